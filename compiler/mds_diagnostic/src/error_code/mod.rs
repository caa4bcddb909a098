//! Stable diagnostic codes.

use std::fmt;
use std::str::FromStr;

/// Error codes for all checker diagnostics.
///
/// Format: MD### where the tens digit groups the source:
/// - MD00x: document structure
/// - MD01x: grammar notation syntax
/// - MD02x: grammar consistency
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Document structure (MD00x)
    /// Two sections resolve to the same link target
    MD001,
    /// Heading nested deeper than the supported depth
    MD002,

    // Grammar syntax (MD01x)
    /// Malformed terminal
    MD010,
    /// Comment contains `*)`
    MD011,
    /// Mismatched parentheses
    MD012,
    /// Production missing its name or `:`
    MD013,
    /// Expected an expression
    MD014,

    // Grammar consistency (MD02x)
    /// Production defined more than once (warning)
    MD020,
    /// Markdown defines a production the grammar lacks
    MD021,
    /// Markdown lacks a production the grammar defines
    MD022,
    /// Production differs between grammar and markdown
    MD023,
}

impl ErrorCode {
    /// All defined error codes.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::MD001,
        ErrorCode::MD002,
        ErrorCode::MD010,
        ErrorCode::MD011,
        ErrorCode::MD012,
        ErrorCode::MD013,
        ErrorCode::MD014,
        ErrorCode::MD020,
        ErrorCode::MD021,
        ErrorCode::MD022,
        ErrorCode::MD023,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MD001 => "MD001",
            ErrorCode::MD002 => "MD002",
            ErrorCode::MD010 => "MD010",
            ErrorCode::MD011 => "MD011",
            ErrorCode::MD012 => "MD012",
            ErrorCode::MD013 => "MD013",
            ErrorCode::MD014 => "MD014",
            ErrorCode::MD020 => "MD020",
            ErrorCode::MD021 => "MD021",
            ErrorCode::MD022 => "MD022",
            ErrorCode::MD023 => "MD023",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string (e.g., `"MD021"`).
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
