//! # Error Types
//!
//! Error types and diagnostics for automaton construction and scanning.
//!
//! Two families live here:
//!
//! - [`AutomatonError`]: fatal precondition violations when building an
//!   automaton. Construction aborts; there is no recovery path.
//! - [`ScanDiagnostic`]: non-fatal observations made while scanning. The
//!   scanner records them and continues with the next character, so a single
//!   bad character never aborts a scan.
//!
//! When the `diagnostics` feature is enabled, errors integrate with
//! [`miette`] for rich error reporting.

use crate::automata::StateId;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// Fatal errors raised while building an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum AutomatonError {
    #[error("automaton has no start state")]
    #[cfg_attr(
        feature = "diagnostics",
        diagnostic(code(automata::missing_start_state))
    )]
    MissingStartState,

    #[error("state id {id} does not belong to this automaton")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(automata::unknown_state)))]
    UnknownStateId { id: StateId },
}

/// Errors raised while compiling a pattern-table classifier.
#[derive(Debug, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum ClassifierError {
    #[error("invalid token pattern")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(classify::invalid_pattern)))]
    Pattern(#[from] regex::Error),
}

/// A non-fatal diagnostic recorded during a scan, with its source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
#[error("line {line}: {kind}")]
pub struct ScanDiagnostic {
    /// 1-based source line the diagnostic was raised on.
    pub line: u32,
    #[source]
    pub kind: ScanDiagnosticKind,
}

/// Kinds of scan diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum ScanDiagnosticKind {
    #[error("unrecognized character '{ch}'")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(scan::unrecognized_char)))]
    UnrecognizedCharacter { ch: char },

    #[error("unterminated {quote}-quoted literal, closed at end of line")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(scan::unterminated_literal)))]
    UnterminatedLiteral { quote: char },

    #[error("unterminated block comment, closed at end of input")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(scan::unterminated_comment)))]
    UnterminatedComment,

    #[error("numeric lexeme \"{text}\" matched no number pattern")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(scan::invalid_number)))]
    InvalidNumber { text: String },
}

impl ScanDiagnostic {
    #[must_use]
    pub const fn new(line: u32, kind: ScanDiagnosticKind) -> Self {
        Self { line, kind }
    }
}
