//! Finite automata: the NFA model, the DFA model, and subset construction.
//!
//! An [`Nfa`] is built once through [`NfaBuilder`], converted to an
//! equivalent [`Dfa`] with [`subset_construction`], and both are immutable
//! afterwards. State ids are dense indices scoped to the automaton that
//! created them; nothing here is process-global.

pub mod dfa;
pub mod nfa;
pub mod subset;

pub use dfa::{Dfa, DfaState};
pub use nfa::{Nfa, NfaBuilder, NfaState};
pub use subset::subset_construction;

use smallvec::SmallVec;
use std::fmt;

/// State id within one automaton.
///
/// Uses u32 which is sufficient for all practical automaton sizes.
pub type StateId = u32;

/// A set of NFA state ids with value-based equality and hashing.
///
/// Kept as a sorted, deduplicated id list so that structurally equal sets
/// compare equal regardless of insertion order. This is the map key that
/// makes subset construction correct: one DFA state per distinct set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StateSet(SmallVec<[StateId; 8]>);

impl StateSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(SmallVec::new_const())
    }

    #[must_use]
    pub fn singleton(id: StateId) -> Self {
        let mut set = Self::new();
        set.insert(id);
        set
    }

    /// Insert an id, keeping the representation sorted. Returns `true` if
    /// the id was not already present.
    pub fn insert(&mut self, id: StateId) -> bool {
        match self.0.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, id);
                true
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: StateId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "}}")
    }
}
