//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exhausted) are expressed via
//! [`crate::outcome::TerminationReasonV1`] and never surface as errors.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No
/// `SearchOutcome` is produced because no expansion took place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A policy knob holds a value no search could run under.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
