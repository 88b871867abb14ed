//! Sink that writes submitted records to the log

use super::traits::RecordSink;
use crate::state::SubmittedRecord;
use anyhow::{Context, Result};

/// Log target carrying submitted records
pub const SUBMISSION_TARGET: &str = "onboarding_tui::submission";

/// Emits each record as JSON through `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl RecordSink for LogSink {
    fn emit(&self, record: &SubmittedRecord) -> Result<()> {
        let json = serde_json::to_string(record).context("failed to serialize submitted record")?;
        tracing::info!(target: SUBMISSION_TARGET, record = %json, "Form Submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, FieldChange, OnboardingForm, DEFAULT_EMAIL_DOMAIN};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record() -> SubmittedRecord {
        let form = [
            (Field::Email, "ravi@gmail.com"),
            (Field::FranchiseName, "Ravi Placements"),
            (Field::PersonName, "Ravi Kumar"),
            (Field::MobileNo, "9876543210"),
            (Field::WhatsappNo, "9876543210"),
            (Field::CompanyEmailStart, "ravi_k"),
        ]
        .into_iter()
        .fold(OnboardingForm::new(), |form, (field, value)| {
            form.apply(&FieldChange::new(field, value))
        });
        form.submit(DEFAULT_EMAIL_DOMAIN).unwrap()
    }

    #[test]
    fn test_emit_logs_record_json() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            LogSink.emit(&record()).unwrap();
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Form Submitted"));
        assert!(output.contains(SUBMISSION_TARGET));
        assert!(output.contains(r#""fullEmail":"ravi_k@talentcorner.in""#));
    }

    #[test]
    fn test_emit_without_subscriber_is_ok() {
        assert!(LogSink.emit(&record()).is_ok());
    }
}
