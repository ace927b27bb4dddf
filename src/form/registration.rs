//! Raw registration form state

use super::field::Field;
use super::status::{derive, FormStatus};
use crate::error::Result;
use crate::mask::only_digits;
use crate::rules::Rules;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Field values exactly as typed, after masking
///
/// Masked fields only ever hold their mask's output when edited through
/// [`RegistrationForm::set`] or loaded with [`RegistrationForm::from_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub birth_date: String,
    pub cpf: String,
    pub landline: String,
    pub cellphone: String,
    pub father_name: String,
    pub mother_name: String,
    pub postal_code: String,
    pub address: String,
    pub number: String,
    pub complement: String,
    pub city: String,
    pub state: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document keyed by [`Field::key`], masking masked fields
    pub fn from_json(json: &str) -> Result<Self> {
        let mut form: RegistrationForm = serde_json::from_str(json)?;
        form.remask();
        Ok(form)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::BirthDate => &self.birth_date,
            Field::Cpf => &self.cpf,
            Field::Landline => &self.landline,
            Field::Cellphone => &self.cellphone,
            Field::FatherName => &self.father_name,
            Field::MotherName => &self.mother_name,
            Field::PostalCode => &self.postal_code,
            Field::Address => &self.address,
            Field::Number => &self.number,
            Field::Complement => &self.complement,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::BirthDate => &mut self.birth_date,
            Field::Cpf => &mut self.cpf,
            Field::Landline => &mut self.landline,
            Field::Cellphone => &mut self.cellphone,
            Field::FatherName => &mut self.father_name,
            Field::MotherName => &mut self.mother_name,
            Field::PostalCode => &mut self.postal_code,
            Field::Address => &mut self.address,
            Field::Number => &mut self.number,
            Field::Complement => &mut self.complement,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordConfirmation => &mut self.password_confirmation,
        }
    }

    /// Replace a field's text, masking it when the field has a mask
    pub fn set(&mut self, field: Field, value: &str) {
        let value = match field.mask() {
            Some(mask) => mask.apply(value),
            None => value.to_string(),
        };
        if field.is_secret() {
            debug!(field = field.key(), len = value.chars().count(), "field edited");
        } else {
            debug!(field = field.key(), value = %value, "field edited");
        }
        *self.slot_mut(field) = value;
    }

    /// Append one typed character
    pub fn push_char(&mut self, field: Field, c: char) {
        let mut value = self.get(field).to_string();
        value.push(c);
        self.set(field, &value);
    }

    /// Remove the last character, then re-mask
    ///
    /// Removing a digit can leave a dangling separator, which the mask drops.
    /// When the last character is a separator the mask would put straight
    /// back, such as the `)` closing a phone's area code, the last digit goes
    /// instead.
    pub fn pop_char(&mut self, field: Field) {
        let current = self.get(field);
        let mut value = current.to_string();
        value.pop();
        if let Some(mask) = field.mask() {
            if mask.apply(&value) == current {
                value = only_digits(current);
                value.pop();
            }
        }
        self.set(field, &value);
    }

    /// Empty a single field
    pub fn clear_field(&mut self, field: Field) {
        self.slot_mut(field).clear();
    }

    /// Reset the whole form
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Re-apply every mask so the masked fields satisfy their grammar
    pub fn remask(&mut self) {
        for field in Field::ALL {
            if let Some(mask) = field.mask() {
                let masked = mask.apply(self.get(field));
                *self.slot_mut(field) = masked;
            }
        }
    }

    /// Derived status against `today`
    pub fn status(&self, today: NaiveDate, rules: &Rules) -> FormStatus {
        derive(self, today, rules)
    }
}
