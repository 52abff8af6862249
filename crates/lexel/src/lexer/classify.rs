//! Token-classification strategies for numeric lexemes.
//!
//! Two equivalent strategies share one contract: walk an automaton's
//! transition map character by character, or try an ordered table of greedy
//! pattern recognizers. Both must agree on the lexeme classes they jointly
//! cover (integers and decimals), and tests hold them to that.

use crate::automata::{subset_construction, Dfa, Nfa};
use crate::error::{AutomatonError, ClassifierError};
use crate::lexer::TokenKind;
use regex::Regex;

/// A classification strategy over whole lexemes.
pub trait Classifier {
    /// Classify `lexeme`, or return `None` when no pattern matches it.
    fn classify(&self, lexeme: &str) -> Option<TokenKind>;
}

/// The NFA accepting one-or-more digits.
///
/// # Errors
///
/// Construction of the canned automaton cannot actually fail; the `Result`
/// is the builder's contract.
pub fn integer_nfa() -> Result<Nfa, AutomatonError> {
    let mut b = Nfa::builder();
    let start = b.state(false);
    let accept = b.state(true);
    for digit in '0'..='9' {
        b.transition(start, digit, accept);
        b.transition(accept, digit, accept);
    }
    b.build(start)
}

/// The NFA accepting `digits . digits` — at least one digit on each side of
/// the decimal point, so `"3."` is rejected.
///
/// # Errors
///
/// Construction of the canned automaton cannot actually fail; the `Result`
/// is the builder's contract.
pub fn decimal_nfa() -> Result<Nfa, AutomatonError> {
    let mut b = Nfa::builder();
    let start = b.state(false);
    let integer_part = b.state(false);
    let fraction = b.state(false);
    let accept = b.state(true);
    for digit in '0'..='9' {
        b.transition(start, digit, integer_part);
        b.transition(integer_part, digit, integer_part);
        b.transition(fraction, digit, accept);
        b.transition(accept, digit, accept);
    }
    b.transition(integer_part, '.', fraction);
    b.build(start)
}

/// Automaton-driven classification: one DFA per numeric pattern, produced by
/// subset construction, consulted with maximal-match acceptance.
#[derive(Debug, Clone)]
pub struct AutomatonClassifier {
    integer: Dfa,
    decimal: Dfa,
}

impl AutomatonClassifier {
    /// Build the integer and decimal DFAs.
    ///
    /// # Errors
    ///
    /// Propagates [`AutomatonError`] from NFA construction.
    pub fn new() -> Result<Self, AutomatonError> {
        Ok(Self {
            integer: subset_construction(&integer_nfa()?),
            decimal: subset_construction(&decimal_nfa()?),
        })
    }

    #[must_use]
    pub const fn integer_dfa(&self) -> &Dfa {
        &self.integer
    }

    #[must_use]
    pub const fn decimal_dfa(&self) -> &Dfa {
        &self.decimal
    }
}

impl Classifier for AutomatonClassifier {
    fn classify(&self, lexeme: &str) -> Option<TokenKind> {
        if self.integer.accepts(lexeme) {
            Some(TokenKind::Integer)
        } else if self.decimal.accepts(lexeme) {
            Some(TokenKind::Decimal)
        } else {
            None
        }
    }
}

/// One entry of the pattern table: a kind and the regex recognizing it.
#[derive(Debug, Clone)]
pub struct TokenRule {
    kind: TokenKind,
    pattern: Regex,
}

impl TokenRule {
    /// Compile a rule. The pattern is anchored to the whole lexeme.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Pattern`] when the regex does not compile.
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, ClassifierError> {
        Ok(Self {
            kind,
            pattern: Regex::new(&format!("^(?:{pattern})$"))?,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// Table-driven classification: an ordered list of recognizers, first match
/// wins.
#[derive(Debug, Clone)]
pub struct PatternTableClassifier {
    rules: Vec<TokenRule>,
}

impl PatternTableClassifier {
    /// Build a classifier from `(kind, pattern)` pairs, tried in order.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Pattern`] when any pattern fails to
    /// compile.
    pub fn new<'p>(
        rules: impl IntoIterator<Item = (TokenKind, &'p str)>,
    ) -> Result<Self, ClassifierError> {
        let rules = rules
            .into_iter()
            .map(|(kind, pattern)| TokenRule::new(kind, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The numeric rule table equivalent to [`AutomatonClassifier`].
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Pattern`] when a pattern fails to compile.
    pub fn numeric() -> Result<Self, ClassifierError> {
        Self::new([
            (TokenKind::Integer, r"[0-9]+"),
            (TokenKind::Decimal, r"[0-9]+\.[0-9]+"),
        ])
    }
}

impl Classifier for PatternTableClassifier {
    fn classify(&self, lexeme: &str) -> Option<TokenKind> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(lexeme))
            .map(TokenRule::kind)
    }
}
