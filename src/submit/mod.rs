//! Submission gate
//!
//! A form is only turned into a [`RegistrationPayload`] when its derived
//! status is valid. The payload is then handed, unchanged, to a
//! [`SubmissionSink`].

mod payload;
mod sink;

pub use payload::RegistrationPayload;
pub use sink::{LogSink, SubmissionSink};

#[cfg(test)]
pub use sink::MockSubmissionSink;

use crate::error::{Error, Result};
use crate::form::{derive, RegistrationForm};
use crate::rules::Rules;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Validate `form` and deliver its payload to `sink`
///
/// Returns [`Error::NotSubmittable`] without touching the sink when any field
/// has an error.
pub fn submit<S>(
    form: &RegistrationForm,
    sink: &mut S,
    today: NaiveDate,
    rules: &Rules,
) -> Result<RegistrationPayload>
where
    S: SubmissionSink + ?Sized,
{
    let status = derive(form, today, rules);
    let age = match status.age {
        Some(age) if status.valid => age,
        _ => {
            let count = status.errors.count();
            warn!(errors = count, "Submission refused");
            return Err(Error::NotSubmittable { count });
        }
    };

    let payload = RegistrationPayload::from_form(form, age);
    sink.deliver(&payload).map_err(|err| Error::Sink(err.into()))?;
    info!(age, "Registration submitted");
    Ok(payload)
}
