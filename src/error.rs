//! Error types for operations that can fail outside of field validation
//!
//! Field validation never fails: invalid input becomes a [`crate::form::FieldError`]
//! attached to the field. The variants here cover the steps around it:
//! submission gating, sink delivery, and parsing user-supplied names and files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The form still has at least one field error
    #[error("form is not submittable: {count} field(s) with errors")]
    NotSubmittable { count: usize },

    /// The submission sink rejected the payload
    #[error("submission sink failed")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("unknown mask `{0}` (expected date, cpf, cep, landline or cellphone)")]
    UnknownMask(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("invalid form document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
