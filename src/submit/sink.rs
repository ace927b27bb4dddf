//! Destinations for submitted registrations

use super::payload::RegistrationPayload;
use anyhow::Result;
use tracing::info;

/// Receiver of valid registrations, mockable in tests
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Hand over one valid registration; called once per submission
    fn deliver(&mut self, payload: &RegistrationPayload) -> Result<()>;
}

/// Sink that only logs the payload, with the password redacted
#[derive(Debug, Default)]
pub struct LogSink {
    delivered: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of payloads logged so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl SubmissionSink for LogSink {
    fn deliver(&mut self, payload: &RegistrationPayload) -> Result<()> {
        let json = serde_json::to_string(&payload.redacted())?;
        info!(payload = %json, "SUBMIT");
        self.delivered += 1;
        Ok(())
    }
}
