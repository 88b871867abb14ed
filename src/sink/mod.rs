//! Destinations for submitted onboarding records

mod log_sink;
mod traits;

pub use log_sink::LogSink;
pub use traits::RecordSink;

#[cfg(test)]
pub use traits::MockRecordSink;
