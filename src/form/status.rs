//! Derived form state: age, minority, field errors, submittability

use super::errors::{FieldError, FieldErrors};
use super::field::{Field, Requirement};
use super::registration::RegistrationForm;
use crate::rules::Rules;
use crate::validators;
use chrono::NaiveDate;
use tracing::debug;

/// Everything recomputed from the raw fields after an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    /// Defined only for a valid birth date
    pub age: Option<u32>,
    pub is_minor: bool,
    pub errors: FieldErrors,
    /// True iff no field has an error
    pub valid: bool,
}

/// Free text counts whitespace alone as empty, everything else uses raw emptiness
fn is_blank(field: Field, value: &str) -> bool {
    match field {
        Field::FullName
        | Field::FatherName
        | Field::MotherName
        | Field::Address
        | Field::Number
        | Field::Complement
        | Field::City
        | Field::State => value.trim().is_empty(),
        _ => value.is_empty(),
    }
}

/// Content check for a field that has something typed in it
fn check_content(
    field: Field,
    form: &RegistrationForm,
    today: NaiveDate,
    rules: &Rules,
) -> Option<FieldError> {
    let value = form.get(field);
    let (valid, err) = match field {
        Field::FullName => (validators::has_two_names(value), FieldError::IncompleteName),
        Field::BirthDate => (
            validators::birth_date(value, today, rules.max_age_years).is_some(),
            FieldError::InvalidDate,
        ),
        Field::Cpf => (validators::is_valid_cpf(value), FieldError::InvalidCpf),
        Field::Landline => (validators::is_valid_landline(value), FieldError::InvalidLandline),
        Field::Cellphone => (
            validators::is_valid_cellphone(value),
            FieldError::InvalidCellphone,
        ),
        Field::PostalCode => (validators::is_valid_cep(value), FieldError::InvalidCep),
        Field::Email => (validators::is_valid_email(value), FieldError::InvalidEmail),
        Field::Password => (
            validators::meets_password_policy(value, rules.min_password_length),
            FieldError::WeakPassword {
                min_length: rules.min_password_length,
            },
        ),
        Field::PasswordConfirmation => (value == form.password, FieldError::PasswordMismatch),
        // Parents, address lines and complement only need to be present
        Field::FatherName
        | Field::MotherName
        | Field::Address
        | Field::Number
        | Field::Complement
        | Field::City
        | Field::State => return None,
    };
    (!valid).then_some(err)
}

fn field_error(
    field: Field,
    form: &RegistrationForm,
    is_minor: bool,
    today: NaiveDate,
    rules: &Rules,
) -> Option<FieldError> {
    let blank = is_blank(field, form.get(field));
    match field.requirement() {
        Requirement::Always if blank => Some(FieldError::Required),
        Requirement::MinorsOnly if !is_minor => None,
        Requirement::MinorsOnly if blank => Some(FieldError::RequiredForMinors),
        Requirement::Optional if blank => None,
        _ => check_content(field, form, today, rules),
    }
}

/// Recompute the whole derived state from `form`
pub fn derive(form: &RegistrationForm, today: NaiveDate, rules: &Rules) -> FormStatus {
    let age = validators::age_within(&form.birth_date, today, rules.max_age_years);
    let is_minor = rules.is_minor(age);

    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.set(field, field_error(field, form, is_minor, today, rules));
    }

    let valid = errors.is_clear();
    debug!(?age, is_minor, errors = errors.count(), valid, "form status derived");

    FormStatus {
        age,
        is_minor,
        errors,
        valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn complete_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set(Field::FullName, "Maria da Silva");
        form.set(Field::BirthDate, "10031990");
        form.set(Field::Cpf, "11144477735");
        form.set(Field::Cellphone, "11912345678");
        form.set(Field::PostalCode, "01310100");
        form.set(Field::Address, "Av. Paulista");
        form.set(Field::Number, "1000");
        form.set(Field::City, "São Paulo");
        form.set(Field::State, "SP");
        form.set(Field::Email, "maria@example.com");
        form.set(Field::Password, "Abcdef1!");
        form.set(Field::PasswordConfirmation, "Abcdef1!");
        form
    }

    fn status(form: &RegistrationForm) -> FormStatus {
        derive(form, today(), &Rules::default())
    }

    mod aggregate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_complete_form_is_valid() {
            let status = status(&complete_form());
            assert_eq!(status.errors, FieldErrors::default());
            assert!(status.valid);
            assert_eq!(status.age, Some(35));
            assert!(!status.is_minor);
        }

        #[test]
        fn test_empty_form_lists_every_required_field() {
            let status = status(&RegistrationForm::new());
            assert!(!status.valid);
            assert_eq!(status.age, None);
            assert!(!status.is_minor);
            let fields: Vec<_> = status.errors.iter().map(|(f, _)| f).collect();
            assert_eq!(
                fields,
                vec![
                    Field::FullName,
                    Field::BirthDate,
                    Field::Cpf,
                    Field::Cellphone,
                    Field::PostalCode,
                    Field::Address,
                    Field::Number,
                    Field::City,
                    Field::State,
                    Field::Email,
                    Field::Password,
                    Field::PasswordConfirmation,
                ]
            );
            assert!(status
                .errors
                .iter()
                .all(|(_, err)| err == FieldError::Required));
        }

        #[test]
        fn test_any_single_empty_required_field_blocks_submission() {
            for field in Field::ALL {
                if field.requirement() != Requirement::Always {
                    continue;
                }
                let mut form = complete_form();
                form.clear_field(field);
                let status = status(&form);
                assert!(!status.valid, "{} empty", field.key());
                assert_eq!(status.errors.get(field), Some(FieldError::Required));
            }
        }

        #[test]
        fn test_empty_field_error_follows_its_requirement() {
            let mut minor = complete_form();
            minor.set(Field::BirthDate, "01022010");
            minor.set(Field::FatherName, "Carlos Pereira");
            minor.set(Field::MotherName, "Lúcia Pereira");
            assert!(status(&minor).valid);

            for field in Field::ALL {
                let mut form = minor.clone();
                form.clear_field(field);
                let expected = match field.requirement() {
                    Requirement::Always => Some(FieldError::Required),
                    Requirement::MinorsOnly => Some(FieldError::RequiredForMinors),
                    Requirement::Optional => None,
                };
                assert_eq!(status(&form).errors.get(field), expected, "{}", field.key());
            }
        }

        #[test]
        fn test_whitespace_only_free_text_is_required() {
            let mut form = complete_form();
            form.set(Field::City, "   ");
            form.set(Field::FullName, " ");
            let status = status(&form);
            assert_eq!(status.errors.city, Some(FieldError::Required));
            assert_eq!(status.errors.full_name, Some(FieldError::Required));
        }
    }

    mod fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_single_name_is_incomplete() {
            let mut form = complete_form();
            form.set(Field::FullName, "Maria");
            assert_eq!(status(&form).errors.full_name, Some(FieldError::IncompleteName));
        }

        #[test]
        fn test_invalid_birth_dates() {
            let mut form = complete_form();
            for text in ["31022020", "16062025", "01011800", "1003"] {
                form.set(Field::BirthDate, text);
                let status = status(&form);
                assert_eq!(status.errors.birth_date, Some(FieldError::InvalidDate), "{text}");
                assert_eq!(status.age, None);
            }
        }

        #[test]
        fn test_invalid_cpf() {
            let mut form = complete_form();
            form.set(Field::Cpf, "11144477736");
            assert_eq!(status(&form).errors.cpf, Some(FieldError::InvalidCpf));
            form.set(Field::Cpf, "11111111111");
            assert_eq!(status(&form).errors.cpf, Some(FieldError::InvalidCpf));
        }

        #[test]
        fn test_cellphone_without_nine() {
            let mut form = complete_form();
            form.set(Field::Cellphone, "11812345678");
            assert_eq!(
                status(&form).errors.cellphone,
                Some(FieldError::InvalidCellphone)
            );
        }

        #[test]
        fn test_landline_optional_but_checked_when_present() {
            let mut form = complete_form();
            assert_eq!(status(&form).errors.landline, None);
            form.set(Field::Landline, "112345");
            let status_partial = status(&form);
            assert_eq!(status_partial.errors.landline, Some(FieldError::InvalidLandline));
            assert!(!status_partial.valid);
            form.set(Field::Landline, "1123456789");
            assert_eq!(status(&form).errors.landline, None);
        }

        #[test]
        fn test_complement_never_errors() {
            let mut form = complete_form();
            form.set(Field::Complement, "");
            assert_eq!(status(&form).errors.complement, None);
            form.set(Field::Complement, "Apto 12");
            assert_eq!(status(&form).errors.complement, None);
        }

        #[test]
        fn test_incomplete_cep() {
            let mut form = complete_form();
            form.set(Field::PostalCode, "0131");
            assert_eq!(status(&form).errors.postal_code, Some(FieldError::InvalidCep));
        }

        #[test]
        fn test_invalid_email() {
            let mut form = complete_form();
            form.set(Field::Email, "maria@example");
            assert_eq!(status(&form).errors.email, Some(FieldError::InvalidEmail));
        }

        #[test]
        fn test_weak_password_and_mismatch() {
            let mut form = complete_form();
            form.set(Field::Password, "abcdefgh");
            let status = status(&form);
            assert_eq!(
                status.errors.password,
                Some(FieldError::WeakPassword { min_length: 8 })
            );
            assert_eq!(
                status.errors.password_confirmation,
                Some(FieldError::PasswordMismatch)
            );
        }

        #[test]
        fn test_confirmation_must_match_exactly() {
            let mut form = complete_form();
            form.set(Field::PasswordConfirmation, "Abcdef1! ");
            assert_eq!(
                status(&form).errors.password_confirmation,
                Some(FieldError::PasswordMismatch)
            );
        }
    }

    mod minors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_minor_requires_parent_names() {
            let mut form = complete_form();
            // 17 on 2025-06-15
            form.set(Field::BirthDate, "10012008");
            let status_empty = status(&form);
            assert_eq!(status_empty.age, Some(17));
            assert!(status_empty.is_minor);
            assert_eq!(
                status_empty.errors.father_name,
                Some(FieldError::RequiredForMinors)
            );
            assert_eq!(
                status_empty.errors.mother_name,
                Some(FieldError::RequiredForMinors)
            );
            assert!(!status_empty.valid);

            form.set(Field::FatherName, "José da Silva");
            form.set(Field::MotherName, "Ana da Silva");
            let status_filled = status(&form);
            assert_eq!(status_filled.errors.father_name, None);
            assert_eq!(status_filled.errors.mother_name, None);
            assert!(status_filled.valid);
        }

        #[test]
        fn test_whitespace_parent_name_is_still_missing() {
            let mut form = complete_form();
            form.set(Field::BirthDate, "10012008");
            form.set(Field::FatherName, "  ");
            form.set(Field::MotherName, "Ana");
            let status = status(&form);
            assert_eq!(status.errors.father_name, Some(FieldError::RequiredForMinors));
            assert_eq!(status.errors.mother_name, None);
        }

        #[test]
        fn test_adult_never_requires_parent_names() {
            let mut form = complete_form();
            // 19 on 2025-06-15
            form.set(Field::BirthDate, "10012006");
            let status_adult = status(&form);
            assert_eq!(status_adult.age, Some(19));
            assert!(!status_adult.is_minor);
            assert_eq!(status_adult.errors.father_name, None);
            assert_eq!(status_adult.errors.mother_name, None);

            form.set(Field::FatherName, "x");
            assert_eq!(status(&form).errors.father_name, None);
        }

        #[test]
        fn test_unknown_age_does_not_require_parent_names() {
            let mut form = complete_form();
            form.set(Field::BirthDate, "3102");
            let status = status(&form);
            assert_eq!(status.age, None);
            assert_eq!(status.errors.father_name, None);
            assert_eq!(status.errors.mother_name, None);
        }

        #[test]
        fn test_eighteenth_birthday_flips_minority() {
            let mut form = complete_form();
            form.set(Field::BirthDate, "15062007");
            assert!(!status(&form).is_minor);
            form.set(Field::BirthDate, "16062007");
            assert!(status(&form).is_minor);
        }
    }

    mod custom_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_longer_password_policy() {
            let rules = Rules {
                min_password_length: 10,
                ..Default::default()
            };
            let status = derive(&complete_form(), today(), &rules);
            assert_eq!(
                status.errors.password,
                Some(FieldError::WeakPassword { min_length: 10 })
            );
        }

        #[test]
        fn test_higher_age_of_majority() {
            let rules = Rules {
                age_of_majority: 21,
                ..Default::default()
            };
            let mut form = complete_form();
            form.set(Field::BirthDate, "10012006");
            let status = derive(&form, today(), &rules);
            assert!(status.is_minor);
            assert_eq!(status.errors.father_name, Some(FieldError::RequiredForMinors));
        }
    }
}
