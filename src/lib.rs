//! Cadastro - masking and validation engine for a Brazilian registration form
//!
//! Pure functions turn keystrokes into masked field text (dates, CPF, CEP,
//! landline and cellphone numbers), judge each field, derive the person's age
//! and whether the form can be submitted. Submission builds a normalized
//! payload and hands it to a [`submit::SubmissionSink`].
//!
//! ```
//! use cadastro::form::{Field, RegistrationForm};
//! use cadastro::rules::Rules;
//! use chrono::NaiveDate;
//!
//! let mut form = RegistrationForm::new();
//! form.set(Field::Cpf, "11144477735");
//! assert_eq!(form.cpf, "111.444.777-35");
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let status = form.status(today, &Rules::default());
//! assert!(status.errors.cpf.is_none());
//! assert!(!status.valid);
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod mask;
pub mod rules;
pub mod submit;
pub mod validators;

pub use config::CadastroConfig;
pub use error::{Error, Result};
pub use form::{derive, Field, FieldError, FieldErrors, FormStatus, RegistrationForm};
pub use mask::Mask;
pub use rules::Rules;
pub use submit::{submit, LogSink, RegistrationPayload, SubmissionSink};
pub use validators::local_today;
