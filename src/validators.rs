//! Field predicates and age computation
//!
//! Predicates only judge non-empty content. Whether an empty field is an
//! error is decided by the form aggregator, not here.

use crate::mask::only_digits;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Birth dates further back than this many calendar years are rejected
pub const MAX_AGE_YEARS: u32 = 130;
/// Below this age the parents' names become required
pub const AGE_OF_MAJORITY: u32 = 18;
pub const MIN_PASSWORD_LENGTH: usize = 8;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("date pattern compiles")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern compiles")
});

/// Today's date in the local timezone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse `DD/MM/YYYY` into a calendar date, rejecting days that do not exist
fn parse_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_PATTERN.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolve a birth date that is well formed, real, not in the future and at
/// most `max_age_years` calendar years before `today`
pub fn birth_date(text: &str, today: NaiveDate, max_age_years: u32) -> Option<NaiveDate> {
    let date = parse_date(text)?;
    if date > today {
        return None;
    }
    // Compared by calendar year, not by exact anniversary
    if i64::from(today.year()) - i64::from(date.year()) > i64::from(max_age_years) {
        return None;
    }
    Some(date)
}

pub fn is_valid_date(text: &str, today: NaiveDate) -> bool {
    birth_date(text, today, MAX_AGE_YEARS).is_some()
}

/// Whole years elapsed from `birth` to `today`
///
/// The year only counts once today's month and day reach the birthday, so a
/// 29 February birthday is reached on 1 March in common years.
pub fn years_between(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Age for a birth date text, `None` whenever the date is not valid
pub fn age(text: &str, today: NaiveDate) -> Option<u32> {
    age_within(text, today, MAX_AGE_YEARS)
}

pub fn age_within(text: &str, today: NaiveDate, max_age_years: u32) -> Option<u32> {
    birth_date(text, today, max_age_years).map(|birth| years_between(birth, today))
}

/// Brazilian CPF check: eleven digits, not all equal, both check digits match
pub fn is_valid_cpf(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let first = cpf_check_digit(&digits[..9]);
    let mut base = digits[..9].to_vec();
    base.push(first);
    let second = cpf_check_digit(&base);

    digits[9] == first && digits[10] == second
}

/// Weighted sum mod 11, weights running from `len + 1` down to 2
fn cpf_check_digit(base: &[u32]) -> u32 {
    let weight_start = base.len() as u32 + 1;
    let sum: u32 = base
        .iter()
        .zip((2..=weight_start).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        rem => 11 - rem,
    }
}

/// Area code plus eight digits
pub fn is_valid_landline(s: &str) -> bool {
    only_digits(s).len() == 10
}

/// Area code plus nine digits, the first of which must be 9
pub fn is_valid_cellphone(s: &str) -> bool {
    let digits = only_digits(s);
    digits.len() == 11 && digits.as_bytes()[2] == b'9'
}

pub fn is_valid_cep(s: &str) -> bool {
    only_digits(s).len() == 8
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

pub fn is_strong_password(password: &str) -> bool {
    meets_password_policy(password, MIN_PASSWORD_LENGTH)
}

/// Length of at least `min_length` with an uppercase letter, a lowercase
/// letter, a digit and a character outside `[A-Za-z0-9]`
///
/// Length is counted in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (most emoji) counts as two.
pub fn meets_password_policy(password: &str, min_length: usize) -> bool {
    if password.encode_utf16().count() < min_length {
        return false;
    }
    let upper = password.chars().any(|c| c.is_ascii_uppercase());
    let lower = password.chars().any(|c| c.is_ascii_lowercase());
    let digit = password.chars().any(|c| c.is_ascii_digit());
    let special = password.chars().any(|c| !c.is_ascii_alphanumeric());
    upper && lower && digit && special
}

/// At least a first and a last name
pub fn has_two_names(full_name: &str) -> bool {
    full_name.split_whitespace().nth(1).is_some()
}
