//! # Lexel
//!
//! Automaton-driven lexical analysis.
//!
//! ## Overview
//!
//! Lexel models lexical patterns as nondeterministic finite automata,
//! converts them to deterministic automata via subset construction, and
//! scans raw source text into typed tokens:
//!
//! - **Automata**: NFA and DFA models plus the subset-construction engine
//! - **Scanning**: a single-pass scanner with injected keyword, operator,
//!   and comment tables
//! - **Classification**: interchangeable automaton-driven and
//!   pattern-table strategies for numeric lexemes
//! - **Symbols**: an append-only identifier-to-type store filled while
//!   scanning
//!
//! ## Quick start
//!
//! ```rust
//! use lexel::{Scanner, TokenKind};
//!
//! let scanner = Scanner::builder()
//!     .type_keyword("integer", "integer")
//!     .operator('=', "assignment")
//!     .operator(';', "semicolon")
//!     .build()
//!     .expect("numeric automata are well-formed");
//!
//! let output = scanner.scan("integer num = 100;");
//! let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Integer,
//!         TokenKind::Operator,
//!     ],
//! );
//! assert_eq!(output.symbols.type_of("num"), Some("integer"));
//! ```
//!
//! ## Modules
//!
//! - [`automata`] - NFA/DFA models and subset construction
//! - [`lexer`] - Scanner, tokens, and classification strategies
//! - [`symtab`] - Symbol table
//! - [`error`] - Error types and scan diagnostics

pub mod automata;
pub mod error;
pub mod lexer;
pub mod symtab;

// Re-export commonly used types
pub use automata::{subset_construction, Dfa, DfaState, Nfa, NfaBuilder, NfaState, StateId, StateSet};
pub use error::{AutomatonError, ClassifierError, ScanDiagnostic, ScanDiagnosticKind};
pub use lexer::{
    AutomatonClassifier, Classifier, PatternTableClassifier, ScanOutput, ScanTables, Scanner,
    ScannerBuilder, Token, TokenKind,
};
pub use symtab::SymbolTable;
