//! Per-field validation messages

use super::field::Field;
use thiserror::Error;

/// Why a field blocks submission
///
/// The `Display` text is the message shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Obrigatório.")]
    Required,
    #[error("Obrigatório para menores.")]
    RequiredForMinors,
    #[error("Informe nome e sobrenome.")]
    IncompleteName,
    #[error("Data inválida (DD/MM/AAAA).")]
    InvalidDate,
    #[error("CPF inválido.")]
    InvalidCpf,
    #[error("Telefone fixo deve ter 10 dígitos com DDD.")]
    InvalidLandline,
    #[error("Celular deve ter 11 dígitos com 9º dígito.")]
    InvalidCellphone,
    #[error("CEP inválido.")]
    InvalidCep,
    #[error("E-mail inválido.")]
    InvalidEmail,
    #[error("Mín. {min_length}, com maiúscula, minúscula, número e especial.")]
    WeakPassword { min_length: usize },
    #[error("Senhas não conferem.")]
    PasswordMismatch,
}

/// One error slot per form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<FieldError>,
    pub birth_date: Option<FieldError>,
    pub cpf: Option<FieldError>,
    pub landline: Option<FieldError>,
    pub cellphone: Option<FieldError>,
    pub father_name: Option<FieldError>,
    pub mother_name: Option<FieldError>,
    pub postal_code: Option<FieldError>,
    pub address: Option<FieldError>,
    pub number: Option<FieldError>,
    pub complement: Option<FieldError>,
    pub city: Option<FieldError>,
    pub state: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub password_confirmation: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::FullName => self.full_name,
            Field::BirthDate => self.birth_date,
            Field::Cpf => self.cpf,
            Field::Landline => self.landline,
            Field::Cellphone => self.cellphone,
            Field::FatherName => self.father_name,
            Field::MotherName => self.mother_name,
            Field::PostalCode => self.postal_code,
            Field::Address => self.address,
            Field::Number => self.number,
            Field::Complement => self.complement,
            Field::City => self.city,
            Field::State => self.state,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::PasswordConfirmation => self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        let slot = match field {
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
        };
        *slot = error;
    }

    /// Present errors in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|err| (field, err)))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// True when no field has an error
    pub fn is_clear(&self) -> bool {
        self.iter().next().is_none()
    }
}
