//! Canonical payload produced by a successful submission

use crate::form::RegistrationForm;
use crate::mask::only_digits;
use serde::{Deserialize, Serialize};

const REDACTED: &str = "********";

/// Normalized registration data
///
/// Masked numbers are reduced to digits, free text is trimmed, and empty
/// optional fields become `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub full_name: String,
    /// `DD/MM/YYYY`, as entered
    pub birth_date: String,
    pub age: u32,
    pub cpf: String,
    pub landline: Option<String>,
    pub cellphone: String,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub postal_code: String,
    pub address: String,
    pub number: String,
    pub complement: Option<String>,
    pub city: String,
    pub state: String,
    pub email: String,
    pub password: String,
}

fn trimmed_or_none(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl RegistrationPayload {
    /// Build from a form whose status is valid, with the derived `age`
    pub fn from_form(form: &RegistrationForm, age: u32) -> Self {
        let landline = only_digits(&form.landline);
        Self {
            full_name: form.full_name.trim().to_string(),
            birth_date: form.birth_date.clone(),
            age,
            cpf: only_digits(&form.cpf),
            landline: (!landline.is_empty()).then_some(landline),
            cellphone: only_digits(&form.cellphone),
            father_name: trimmed_or_none(&form.father_name),
            mother_name: trimmed_or_none(&form.mother_name),
            postal_code: only_digits(&form.postal_code),
            address: form.address.trim().to_string(),
            number: form.number.trim().to_string(),
            complement: trimmed_or_none(&form.complement),
            city: form.city.trim().to_string(),
            state: form.state.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
        }
    }

    /// Copy safe to print or log
    pub fn redacted(&self) -> Self {
        Self {
            password: REDACTED.to_string(),
            ..self.clone()
        }
    }
}
