//! Subset construction: convert an [`Nfa`] into an equivalent [`Dfa`] by
//! grouping reachable sets of NFA states into single DFA states.

use super::{Dfa, Nfa, StateId, StateSet};
use hashbrown::HashMap;
use std::collections::VecDeque;

/// Build the DFA equivalent to `nfa`.
///
/// Each DFA state corresponds to a set of NFA states; sets are compared by
/// value, so one DFA state exists per distinct reachable set. A symbol with
/// no outgoing transition from any member of a set is simply absent from the
/// resulting transition map — no reject state is materialized.
///
/// The algorithm is total: the number of distinct subsets of a finite state
/// set is finite and the queue only admits sets not previously mapped.
#[must_use]
pub fn subset_construction(nfa: &Nfa) -> Dfa {
    let mut dfa = Dfa::empty();
    let mut mapping: HashMap<StateSet, StateId, ahash::RandomState> = HashMap::default();
    let mut queue: VecDeque<(StateSet, StateId)> = VecDeque::new();

    let start_set = StateSet::singleton(nfa.start());
    let start_id = dfa.add_state(start_set.clone(), is_accepting(nfa, &start_set));
    mapping.insert(start_set.clone(), start_id);
    queue.push_back((start_set, start_id));

    while let Some((current_set, current_id)) = queue.pop_front() {
        // Union of all transition targets from every member, per symbol.
        let mut moves: HashMap<char, StateSet, ahash::RandomState> = HashMap::default();
        for state in current_set.iter() {
            for (symbol, targets) in nfa.state(state).transitions() {
                let union = moves.entry(symbol).or_default();
                for &target in targets {
                    union.insert(target);
                }
            }
        }

        // Fixed symbol order keeps state numbering reproducible across runs.
        let mut moves: Vec<(char, StateSet)> = moves.into_iter().collect();
        moves.sort_unstable_by_key(|&(symbol, _)| symbol);

        for (symbol, target_set) in moves {
            let target_id = match mapping.get(&target_set) {
                Some(&existing) => existing,
                None => {
                    let id = dfa.add_state(target_set.clone(), is_accepting(nfa, &target_set));
                    mapping.insert(target_set.clone(), id);
                    queue.push_back((target_set, id));
                    id
                }
            };
            dfa.add_transition(current_id, symbol, target_id);
        }
    }

    dfa
}

fn is_accepting(nfa: &Nfa, set: &StateSet) -> bool {
    set.iter().any(|id| nfa.state(id).is_accepting())
}
