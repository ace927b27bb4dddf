//! Digit masks for Brazilian form inputs
//!
//! Every mask keeps only ASCII digits, truncates them to the mask's capacity
//! and re-inserts the literal separators. A separator is only emitted together
//! with the group that follows it, so partial input never ends on a dangling
//! `.`, `/`, `-` or space.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Remove every character that is not an ASCII digit
pub fn only_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// One run of digits with the literal text wrapped around it
#[derive(Debug, Clone, Copy)]
struct Group {
    prefix: &'static str,
    len: usize,
    suffix: &'static str,
}

impl Group {
    const fn new(prefix: &'static str, len: usize) -> Self {
        Self {
            prefix,
            len,
            suffix: "",
        }
    }

    const fn wrapped(prefix: &'static str, len: usize, suffix: &'static str) -> Self {
        Self {
            prefix,
            len,
            suffix,
        }
    }
}

const DATE_GROUPS: &[Group] = &[Group::new("", 2), Group::new("/", 2), Group::new("/", 4)];
const CPF_GROUPS: &[Group] = &[
    Group::new("", 3),
    Group::new(".", 3),
    Group::new(".", 3),
    Group::new("-", 2),
];
const CEP_GROUPS: &[Group] = &[Group::new("", 5), Group::new("-", 3)];
const LANDLINE_GROUPS: &[Group] = &[
    Group::wrapped("(", 2, ")"),
    Group::new(" ", 4),
    Group::new("-", 4),
];
const CELLPHONE_GROUPS: &[Group] = &[
    Group::wrapped("(", 2, ")"),
    Group::new(" ", 5),
    Group::new("-", 4),
];

/// The masked input kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mask {
    /// `DD/MM/YYYY`
    Date,
    /// `000.000.000-00`
    Cpf,
    /// `00000-000`
    Cep,
    /// `(00) 0000-0000`
    Landline,
    /// `(00) 00000-0000`
    Cellphone,
}

impl Mask {
    pub const ALL: [Mask; 5] = [
        Mask::Date,
        Mask::Cpf,
        Mask::Cep,
        Mask::Landline,
        Mask::Cellphone,
    ];

    fn groups(self) -> &'static [Group] {
        match self {
            Mask::Date => DATE_GROUPS,
            Mask::Cpf => CPF_GROUPS,
            Mask::Cep => CEP_GROUPS,
            Mask::Landline => LANDLINE_GROUPS,
            Mask::Cellphone => CELLPHONE_GROUPS,
        }
    }

    /// Number of digits the mask holds before truncating
    pub fn max_digits(self) -> usize {
        self.groups().iter().map(|g| g.len).sum()
    }

    /// Length of the fully filled mask, useful as an input length limit
    pub fn max_len(self) -> usize {
        self.groups()
            .iter()
            .map(|g| g.prefix.len() + g.len + g.suffix.len())
            .sum()
    }

    pub fn name(self) -> &'static str {
        match self {
            Mask::Date => "date",
            Mask::Cpf => "cpf",
            Mask::Cep => "cep",
            Mask::Landline => "landline",
            Mask::Cellphone => "cellphone",
        }
    }

    /// Placeholder showing the complete shape of the mask
    pub fn placeholder(self) -> &'static str {
        match self {
            Mask::Date => "DD/MM/AAAA",
            Mask::Cpf => "000.000.000-00",
            Mask::Cep => "00000-000",
            Mask::Landline => "(11) 2345-6789",
            Mask::Cellphone => "(11) 91234-5678",
        }
    }

    /// Format `input` according to this mask
    pub fn apply(self, input: &str) -> String {
        let digits = only_digits(input);
        let mut rest = &digits[..digits.len().min(self.max_digits())];
        let mut out = String::with_capacity(self.max_len());

        for group in self.groups() {
            if rest.is_empty() {
                break;
            }
            // Digits are ASCII so byte offsets are char boundaries
            let (head, tail) = rest.split_at(group.len.min(rest.len()));
            out.push_str(group.prefix);
            out.push_str(head);
            out.push_str(group.suffix);
            rest = tail;
        }

        out
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mask {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mask::ALL
            .into_iter()
            .find(|mask| mask.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMask(s.to_string()))
    }
}

pub fn mask_date(s: &str) -> String {
    Mask::Date.apply(s)
}

pub fn mask_cpf(s: &str) -> String {
    Mask::Cpf.apply(s)
}

pub fn mask_cep(s: &str) -> String {
    Mask::Cep.apply(s)
}

/// Ten-digit landline with area code
pub fn mask_landline(s: &str) -> String {
    Mask::Landline.apply(s)
}

/// Eleven-digit cellphone with area code
pub fn mask_cellphone(s: &str) -> String {
    Mask::Cellphone.apply(s)
}
