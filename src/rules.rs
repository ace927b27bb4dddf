//! Tunable thresholds used by the date, minority and password checks

use crate::validators::{AGE_OF_MAJORITY, MAX_AGE_YEARS, MIN_PASSWORD_LENGTH};

/// Thresholds applied when deriving a form's status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Birth dates more than this many calendar years back are rejected
    pub max_age_years: u32,
    /// Ages strictly below this make the parents' names required
    pub age_of_majority: u32,
    /// Minimum password length, counted in characters
    pub min_password_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_age_years: MAX_AGE_YEARS,
            age_of_majority: AGE_OF_MAJORITY,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl Rules {
    /// Unknown age is never treated as a minor
    pub fn is_minor(&self, age: Option<u32>) -> bool {
        age.is_some_and(|age| age < self.age_of_majority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.max_age_years, 130);
        assert_eq!(rules.age_of_majority, 18);
        assert_eq!(rules.min_password_length, 8);
    }

    #[test]
    fn test_is_minor() {
        let rules = Rules::default();
        assert!(rules.is_minor(Some(0)));
        assert!(rules.is_minor(Some(17)));
        assert!(!rules.is_minor(Some(18)));
        assert!(!rules.is_minor(Some(64)));
    }

    #[test]
    fn test_unknown_age_is_not_minor() {
        assert!(!Rules::default().is_minor(None));
    }

    #[test]
    fn test_custom_majority() {
        let rules = Rules {
            age_of_majority: 21,
            ..Default::default()
        };
        assert!(rules.is_minor(Some(20)));
        assert!(!rules.is_minor(Some(21)));
    }
}
