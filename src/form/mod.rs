//! Registration form domain
//!
//! [`RegistrationForm`] holds the raw text of every input. Each edit goes
//! through [`RegistrationForm::set`], which applies the field's mask, and the
//! caller then re-derives the whole [`FormStatus`] with [`derive`]. Nothing is
//! cached between edits.

mod errors;
mod field;
mod registration;
mod status;

pub use errors::{FieldError, FieldErrors};
pub use field::{Field, Requirement};
pub use registration::RegistrationForm;
pub use status::{derive, FormStatus};
