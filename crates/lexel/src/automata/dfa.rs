//! Deterministic finite automaton model.
//!
//! A [`Dfa`] is the pure data product of subset construction: it exposes
//! state inspection and transition lookup and is never mutated externally.

use super::{StateId, StateSet};
use hashbrown::HashMap;

/// A single DFA state: the set of NFA states it represents (its label), an
/// accepting flag, and at most one target per symbol.
#[derive(Debug, Clone)]
pub struct DfaState {
    label: StateSet,
    accepting: bool,
    transitions: HashMap<char, StateId, ahash::RandomState>,
}

impl DfaState {
    fn new(label: StateSet, accepting: bool) -> Self {
        Self {
            label,
            accepting,
            transitions: HashMap::default(),
        }
    }

    /// The exact set of NFA states this DFA state represents.
    #[must_use]
    pub const fn label(&self) -> &StateSet {
        &self.label
    }

    /// True iff any represented NFA state is accepting.
    #[must_use]
    pub const fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// The unique target on `symbol`, or `None` when the symbol has no
    /// outgoing transition. A missing transition means immediate rejection
    /// of the current input under this automaton.
    #[must_use]
    pub fn target(&self, symbol: char) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }

    /// All outgoing transitions as `(symbol, target)` pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.transitions.iter().map(|(&c, &t)| (c, t))
    }
}

/// An immutable DFA: a start state and every state reachable from it.
#[derive(Debug, Clone)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: StateId,
}

impl Dfa {
    pub(crate) const fn empty() -> Self {
        Self {
            states: Vec::new(),
            start: 0,
        }
    }

    /// Ids are assigned monotonically within one construction run.
    pub(crate) fn add_state(&mut self, label: StateSet, accepting: bool) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(DfaState::new(label, accepting));
        id
    }

    pub(crate) fn add_transition(&mut self, from: StateId, symbol: char, to: StateId) {
        self.states[from as usize].transitions.insert(symbol, to);
    }

    #[must_use]
    pub const fn start(&self) -> StateId {
        self.start
    }

    #[must_use]
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Look up a state by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this automaton's construction run.
    #[must_use]
    pub fn state(&self, id: StateId) -> &DfaState {
        &self.states[id as usize]
    }

    /// All states with their ids, in construction order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &DfaState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(id, s)| (id as StateId, s))
    }

    /// Transition lookup: the unique target of `state` on `symbol`.
    #[must_use]
    pub fn transition(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.state(state).target(symbol)
    }

    #[must_use]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.state(state).is_accepting()
    }

    /// Run the unique DFA path over `input`. A missing transition rejects
    /// immediately; otherwise accept iff the final state is accepting.
    #[must_use]
    pub fn accepts(&self, input: &str) -> bool {
        let mut state = self.start;
        for c in input.chars() {
            match self.transition(state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }
}
