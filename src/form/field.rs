//! Registration form field catalogue

use crate::error::Error;
use crate::mask::Mask;
use std::fmt;
use std::str::FromStr;

/// When a field must be filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    /// Only while the derived age is below the age of majority
    MinorsOnly,
    Optional,
}

/// Every input of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    BirthDate,
    Cpf,
    Landline,
    Cellphone,
    FatherName,
    MotherName,
    PostalCode,
    Address,
    Number,
    Complement,
    City,
    State,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::FullName,
        Field::BirthDate,
        Field::Cpf,
        Field::Landline,
        Field::Cellphone,
        Field::FatherName,
        Field::MotherName,
        Field::PostalCode,
        Field::Address,
        Field::Number,
        Field::Complement,
        Field::City,
        Field::State,
        Field::Email,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    /// Stable identifier, matching the form's serialized keys
    pub fn key(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::BirthDate => "birth_date",
            Field::Cpf => "cpf",
            Field::Landline => "landline",
            Field::Cellphone => "cellphone",
            Field::FatherName => "father_name",
            Field::MotherName => "mother_name",
            Field::PostalCode => "postal_code",
            Field::Address => "address",
            Field::Number => "number",
            Field::Complement => "complement",
            Field::City => "city",
            Field::State => "state",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Nome Completo",
            Field::BirthDate => "Data de Nascimento",
            Field::Cpf => "CPF",
            Field::Landline => "Telefone Fixo (com DDD)",
            Field::Cellphone => "Celular (com DDD)",
            Field::FatherName => "Nome do Pai",
            Field::MotherName => "Nome da Mãe",
            Field::PostalCode => "CEP",
            Field::Address => "Endereço",
            Field::Number => "Número",
            Field::Complement => "Complemento (opcional)",
            Field::City => "Cidade",
            Field::State => "Estado",
            Field::Email => "Email",
            Field::Password => "Senha",
            Field::PasswordConfirmation => "Confirmar Senha",
        }
    }

    /// Mask applied on every edit, if any
    pub fn mask(self) -> Option<Mask> {
        match self {
            Field::BirthDate => Some(Mask::Date),
            Field::Cpf => Some(Mask::Cpf),
            Field::Landline => Some(Mask::Landline),
            Field::Cellphone => Some(Mask::Cellphone),
            Field::PostalCode => Some(Mask::Cep),
            _ => None,
        }
    }

    pub fn requirement(self) -> Requirement {
        match self {
            Field::FatherName | Field::MotherName => Requirement::MinorsOnly,
            Field::Landline | Field::Complement => Requirement::Optional,
            _ => Requirement::Always,
        }
    }

    /// Whether the value is hidden when echoed back
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::PasswordConfirmation)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}
