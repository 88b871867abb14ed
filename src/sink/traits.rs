//! Trait abstraction for record sinks to enable mocking in tests

use crate::state::SubmittedRecord;
use anyhow::Result;

/// Receives every record that passes the submit check
#[cfg_attr(test, mockall::automock)]
pub trait RecordSink {
    /// Emit one submitted record
    fn emit(&self, record: &SubmittedRecord) -> Result<()>;
}
