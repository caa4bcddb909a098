//! Grammar notation syntax errors.

use mds_diagnostic::{Diagnostic, ErrorCode};
use mds_ir::Span;
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum SyntaxErrorKind {
    #[error("terminal is not terminated")]
    UnterminatedTerminal,
    #[error("terminals must be single-line")]
    MultiLineTerminal,
    #[error("terminals may not include \\ except in \\\\ or \\' or \\\"")]
    InvalidEscape,
    #[error("a terminal must either contain no ' or no \"")]
    MixedQuotes,
    #[error("a terminal may not be '<>'")]
    EmptyExtendedTerminal,
    #[error("a special-terminal may not contain a question-mark '?'")]
    QuestionInExtendedTerminal,
    #[error("comments may not include *)")]
    CommentClosesBlock,
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("after '{name}' expected ':' not {found}")]
    MissingColon { name: String, found: String },
    #[error("expected a production name, found {found}")]
    ExpectedName { found: String },
    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: String },
}

impl SyntaxErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxErrorKind::UnterminatedTerminal
            | SyntaxErrorKind::MultiLineTerminal
            | SyntaxErrorKind::InvalidEscape
            | SyntaxErrorKind::MixedQuotes
            | SyntaxErrorKind::EmptyExtendedTerminal
            | SyntaxErrorKind::QuestionInExtendedTerminal => ErrorCode::MD010,
            SyntaxErrorKind::CommentClosesBlock => ErrorCode::MD011,
            SyntaxErrorKind::MismatchedParentheses => ErrorCode::MD012,
            SyntaxErrorKind::MissingColon { .. } | SyntaxErrorKind::ExpectedName { .. } => {
                ErrorCode::MD013
            }
            SyntaxErrorKind::ExpectedExpression { .. } => ErrorCode::MD014,
        }
    }
}

/// Malformed grammar notation. Fatal to the one text being parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind}")]
pub struct GrammarSyntaxError {
    pub kind: SyntaxErrorKind,
    /// Byte range of the offending text.
    pub span: Span,
}

impl GrammarSyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        GrammarSyntaxError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a diagnostic; the caller turns [`Self::span`] into a
    /// location once it knows which file the text came from.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.kind.to_string())
    }
}
