//! Typed search errors.
//!
//! The search loop itself never fails: "no path" is `None`, and the reason is
//! recorded in [`crate::report::TerminationReason`]. `SearchError` covers the
//! edges only: loading a policy and encoding a report.

/// Failure outside the search loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A policy document could not be parsed.
    InvalidPolicy { detail: String },
    /// A report could not be encoded as canonical JSON.
    ReportEncoding { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::ReportEncoding { detail } => write!(f, "cannot encode search report: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
