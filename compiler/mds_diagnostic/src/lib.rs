//! Diagnostics for the mdspec checker.
//!
//! Every problem the checker finds is surfaced as a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a [`Severity`]
//! - a best-effort [`Location`] recovered by the fuzzy locator
//! - optional notes quoting the offending text
//!
//! Diagnostics render in the single-line `location: error CODE: message`
//! form that editors and build systems pick up.

mod diagnostic;
mod error_code;
mod location;

pub use diagnostic::{Diagnostic, Severity, TOOL_LOCATION};
pub use error_code::ErrorCode;
pub use location::Location;
