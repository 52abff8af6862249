//! Nondeterministic finite automaton model.

use super::{StateId, StateSet};
use crate::error::AutomatonError;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// A single NFA state: an accepting flag and a transition relation mapping
/// each symbol to the targets reachable on it. A symbol may reach several
/// states; that is the source of nondeterminism. Target lists preserve
/// insertion order for reproducible diagnostics.
#[derive(Debug, Clone)]
pub struct NfaState {
    accepting: bool,
    transitions: HashMap<char, SmallVec<[StateId; 4]>, ahash::RandomState>,
}

impl NfaState {
    fn new(accepting: bool) -> Self {
        Self {
            accepting,
            transitions: HashMap::default(),
        }
    }

    #[must_use]
    pub const fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Targets reachable from this state on `symbol`, in insertion order.
    /// Empty when the symbol has no outgoing transition.
    #[must_use]
    pub fn targets(&self, symbol: char) -> &[StateId] {
        self.transitions.get(&symbol).map_or(&[], |t| t.as_slice())
    }

    /// All outgoing transitions as `(symbol, targets)` pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (char, &[StateId])> + '_ {
        self.transitions.iter().map(|(&c, t)| (c, t.as_slice()))
    }
}

/// An immutable NFA: an arena of states, a designated start state, and the
/// accepting states marked per state. Built once through [`NfaBuilder`]; no
/// transitions are added afterwards.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: StateId,
}

impl Nfa {
    #[must_use]
    pub fn builder() -> NfaBuilder {
        NfaBuilder::new()
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
    /// Panics if `id` did not come from this automaton's builder.
    #[must_use]
    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id as usize]
    }

    /// All states with their ids.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &NfaState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(id, s)| (id as StateId, s))
    }

    /// Ids of all accepting states.
    #[must_use]
    pub fn accepting_states(&self) -> StateSet {
        self.states()
            .filter(|(_, s)| s.is_accepting())
            .map(|(id, _)| id)
            .collect()
    }

    /// Run the NFA over `input` by simulating all states in parallel.
    /// Accepts iff some run over the whole input ends in an accepting state.
    #[must_use]
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = StateSet::singleton(self.start);
        for c in input.chars() {
            let mut next = StateSet::new();
            for state in current.iter() {
                for &target in self.state(state).targets(c) {
                    next.insert(target);
                }
            }
            if next.is_empty() {
                return false;
            }
            current = next;
        }
        let accepted = current.iter().any(|id| self.state(id).is_accepting());
        accepted
    }
}

/// Builder for [`Nfa`]. State ids are scoped to one builder and assigned
/// densely from zero, so two concurrent constructions can never collide.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<NfaState>,
}

impl NfaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Add a state and return its id.
    pub fn state(&mut self, accepting: bool) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::new(accepting));
        id
    }

    /// Append `to` to the target list mapped to `symbol` on `from`. There is
    /// no removal operation and no alphabet validation: any character may
    /// label a transition.
    ///
    /// # Panics
    ///
    /// Panics if `from` was not created by this builder.
    pub fn transition(&mut self, from: StateId, symbol: char, to: StateId) {
        self.states[from as usize]
            .transitions
            .entry(symbol)
            .or_default()
            .push(to);
    }

    /// Finish construction with `start` as the start state.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::MissingStartState`] for an empty builder and
    /// [`AutomatonError::UnknownStateId`] when `start` is not one of this
    /// builder's states.
    pub fn build(self, start: StateId) -> Result<Nfa, AutomatonError> {
        if self.states.is_empty() {
            return Err(AutomatonError::MissingStartState);
        }
        if start as usize >= self.states.len() {
            return Err(AutomatonError::UnknownStateId { id: start });
        }
        Ok(Nfa {
            states: self.states,
            start,
        })
    }
}
