//! # Scanner
//!
//! Single-pass, left-to-right token scanning over a text buffer.
//!
//! The scanner dispatches on the lookahead character class: letters start
//! keyword/identifier runs, digits start numeric lexemes handed to a
//! [`Classifier`], quotes start string/char literals, comment delimiters
//! start discarded trivia, and anything else is matched against the operator
//! table. Keyword, operator, and comment tables are injected through
//! [`ScannerBuilder`] rather than hardcoded, so tests can scan alternate
//! grammars.
//!
//! Scanning never fails: unrecognized characters and unterminated literals
//! are recorded as [`ScanDiagnostic`]s and the scan continues.

pub mod classify;
pub mod token;

pub use classify::{
    decimal_nfa, integer_nfa, AutomatonClassifier, Classifier, PatternTableClassifier, TokenRule,
};
pub use token::{Token, TokenKind};

use crate::error::{AutomatonError, ScanDiagnostic, ScanDiagnosticKind};
use crate::symtab::SymbolTable;
use compact_str::CompactString;
use hashbrown::{HashMap, HashSet};

/// Injected classification tables: keywords, operators, comment delimiters,
/// and the type keywords that drive symbol-table typing.
#[derive(Debug, Clone)]
pub struct ScanTables {
    keywords: HashSet<CompactString, ahash::RandomState>,
    operators: HashMap<char, CompactString, ahash::RandomState>,
    type_keywords: HashMap<CompactString, CompactString, ahash::RandomState>,
    line_comment: Option<CompactString>,
    block_comment: Option<(CompactString, CompactString)>,
    default_type: CompactString,
}

impl Default for ScanTables {
    fn default() -> Self {
        Self {
            keywords: HashSet::default(),
            operators: HashMap::default(),
            type_keywords: HashMap::default(),
            line_comment: None,
            block_comment: None,
            default_type: CompactString::const_new("auto"),
        }
    }
}

impl ScanTables {
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// The report name of an operator character, when it is one.
    #[must_use]
    pub fn operator_name(&self, symbol: char) -> Option<&str> {
        self.operators.get(&symbol).map(CompactString::as_str)
    }

    /// The type a keyword declares for the identifier following it.
    #[must_use]
    pub fn declared_type(&self, keyword: &str) -> Option<&str> {
        self.type_keywords.get(keyword).map(CompactString::as_str)
    }

    /// Type given to identifiers seen without a preceding type keyword.
    #[must_use]
    pub fn default_type(&self) -> &str {
        &self.default_type
    }
}

/// Builder for [`Scanner`]. All tables start empty.
#[derive(Debug, Default)]
pub struct ScannerBuilder {
    tables: ScanTables,
}

impl ScannerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reserved word.
    #[must_use]
    pub fn keyword(mut self, word: &str) -> Self {
        self.tables.keywords.insert(CompactString::from(word));
        self
    }

    /// Add a reserved word that also declares the type of the identifier
    /// immediately following it.
    #[must_use]
    pub fn type_keyword(mut self, word: &str, ty: &str) -> Self {
        self.tables.keywords.insert(CompactString::from(word));
        self.tables
            .type_keywords
            .insert(CompactString::from(word), CompactString::from(ty));
        self
    }

    /// Add a single-character operator with its report name.
    #[must_use]
    pub fn operator(mut self, symbol: char, name: &str) -> Self {
        self.tables
            .operators
            .insert(symbol, CompactString::from(name));
        self
    }

    /// Set the line-comment start sequence (consumed to end of line).
    #[must_use]
    pub fn line_comment(mut self, start: &str) -> Self {
        self.tables.line_comment = Some(CompactString::from(start));
        self
    }

    /// Set the block-comment delimiters (consumed to the end marker).
    #[must_use]
    pub fn block_comment(mut self, start: &str, end: &str) -> Self {
        self.tables.block_comment =
            Some((CompactString::from(start), CompactString::from(end)));
        self
    }

    /// Set the type given to identifiers with no preceding type keyword.
    #[must_use]
    pub fn default_type(mut self, ty: &str) -> Self {
        self.tables.default_type = CompactString::from(ty);
        self
    }

    /// Build a scanner with the default automaton-driven classifier.
    ///
    /// # Errors
    ///
    /// Propagates [`AutomatonError`] from building the numeric automata.
    pub fn build(self) -> Result<Scanner<AutomatonClassifier>, AutomatonError> {
        let classifier = AutomatonClassifier::new()?;
        Ok(self.build_with(classifier))
    }

    /// Build a scanner with an explicit classification strategy.
    pub fn build_with<C: Classifier>(self, classifier: C) -> Scanner<C> {
        Scanner {
            tables: self.tables,
            classifier,
        }
    }
}

/// Everything one scan produces: the ordered token sequence, the diagnostics
/// raised along the way, and the final symbol store.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<ScanDiagnostic>,
    pub symbols: SymbolTable,
}

/// The scanner: injected tables plus a numeric classification strategy.
#[derive(Debug, Clone)]
pub struct Scanner<C = AutomatonClassifier> {
    tables: ScanTables,
    classifier: C,
}

impl Scanner<AutomatonClassifier> {
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }
}

impl<C: Classifier> Scanner<C> {
    #[must_use]
    pub const fn tables(&self) -> &ScanTables {
        &self.tables
    }

    #[must_use]
    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Scan `input` to completion. Never fails; see [`ScanOutput`].
    #[must_use]
    pub fn scan(&self, input: &str) -> ScanOutput {
        let mut out = ScanOutput::default();
        let bytes = input.as_bytes();
        let len = bytes.len();
        let mut pos = 0;
        let mut line: u32 = 1;
        // Type declared by the immediately preceding keyword, if any.
        let mut pending_type: Option<CompactString> = None;

        while pos < len {
            let byte = bytes[pos];

            if byte == b'\n' {
                line += 1;
                pos += 1;
                continue;
            }
            if byte.is_ascii_whitespace() {
                pos += 1;
                continue;
            }

            if let Some(start) = &self.tables.line_comment {
                if input[pos..].starts_with(start.as_str()) {
                    // Leave the newline for the whitespace branch so the
                    // line counter stays right.
                    pos += memchr::memchr(b'\n', &bytes[pos..]).unwrap_or(len - pos);
                    continue;
                }
            }
            if let Some((open, close)) = &self.tables.block_comment {
                if input[pos..].starts_with(open.as_str()) {
                    let body = pos + open.len();
                    match input[body..].find(close.as_str()) {
                        Some(offset) => {
                            let end = body + offset + close.len();
                            line += count_newlines(&bytes[pos..end]);
                            pos = end;
                        }
                        None => {
                            out.diagnostics.push(ScanDiagnostic::new(
                                line,
                                ScanDiagnosticKind::UnterminatedComment,
                            ));
                            line += count_newlines(&bytes[pos..]);
                            pos = len;
                        }
                    }
                    continue;
                }
            }

            if byte.is_ascii_alphabetic() {
                let start = pos;
                while pos < len
                    && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                let text = &input[start..pos];
                if self.tables.is_keyword(text) {
                    out.tokens.push(Token::new(TokenKind::Keyword, text, line));
                    pending_type = self.tables.declared_type(text).map(CompactString::from);
                } else {
                    out.tokens
                        .push(Token::new(TokenKind::Identifier, text, line));
                    match pending_type.take() {
                        Some(ty) => out.symbols.reclassify(text, &ty),
                        None => {
                            out.symbols.declare(text, self.tables.default_type());
                        }
                    }
                }
                continue;
            }

            if byte.is_ascii_digit() {
                let start = pos;
                while pos < len && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                // The dot is consumed only when a digit follows, so "3."
                // lexes as the integer 3 and a separate dot.
                if pos + 1 < len && bytes[pos] == b'.' && bytes[pos + 1].is_ascii_digit() {
                    pos += 1;
                    while pos < len && bytes[pos].is_ascii_digit() {
                        pos += 1;
                    }
                }
                let text = &input[start..pos];
                match self.classifier.classify(text) {
                    Some(kind) => out.tokens.push(Token::new(kind, text, line)),
                    None => out.diagnostics.push(ScanDiagnostic::new(
                        line,
                        ScanDiagnosticKind::InvalidNumber { text: text.into() },
                    )),
                }
                pending_type = None;
                continue;
            }

            if byte == b'"' || byte == b'\'' {
                let quote = byte;
                let start = pos;
                pos += 1;
                while pos < len && bytes[pos] != quote && bytes[pos] != b'\n' {
                    pos += 1;
                }
                if pos < len && bytes[pos] == quote {
                    pos += 1;
                } else {
                    // Close implicitly at end of line and keep the lexeme.
                    out.diagnostics.push(ScanDiagnostic::new(
                        line,
                        ScanDiagnosticKind::UnterminatedLiteral {
                            quote: quote as char,
                        },
                    ));
                }
                let kind = if quote == b'\'' {
                    TokenKind::Char
                } else {
                    TokenKind::Str
                };
                out.tokens.push(Token::new(kind, &input[start..pos], line));
                pending_type = None;
                continue;
            }

            let Some(ch) = input[pos..].chars().next() else {
                break;
            };
            if self.tables.operator_name(ch).is_some() {
                let end = pos + ch.len_utf8();
                out.tokens
                    .push(Token::new(TokenKind::Operator, &input[pos..end], line));
                pos = end;
            } else {
                out.diagnostics.push(ScanDiagnostic::new(
                    line,
                    ScanDiagnosticKind::UnrecognizedCharacter { ch },
                ));
                pos += ch.len_utf8();
            }
            pending_type = None;
        }

        out
    }
}

fn count_newlines(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}
