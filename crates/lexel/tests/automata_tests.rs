//! Tests for the automaton models and subset construction

use lexel::lexer::{decimal_nfa, integer_nfa};
use lexel::{subset_construction, Dfa, Nfa, StateSet};
use std::collections::HashSet;

/// Rebuild an NFA with the same language as `dfa`, for idempotence checks.
fn nfa_from_dfa(dfa: &Dfa) -> Nfa {
    let mut b = Nfa::builder();
    let ids: Vec<_> = dfa
        .states()
        .map(|(_, state)| b.state(state.is_accepting()))
        .collect();
    for (id, state) in dfa.states() {
        for (symbol, target) in state.transitions() {
            b.transition(ids[id as usize], symbol, ids[target as usize]);
        }
    }
    b.build(ids[dfa.start() as usize])
        .expect("DFA has at least its start state")
}

/// Every string over `alphabet` up to `max_len` characters.
fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for s in &frontier {
            for &c in alphabet {
                let mut t = s.clone();
                t.push(c);
                next.push(t);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

#[test]
fn constructed_dfa_is_deterministic() {
    for nfa in [integer_nfa().unwrap(), decimal_nfa().unwrap()] {
        let dfa = subset_construction(&nfa);
        for (_, state) in dfa.states() {
            let symbols: Vec<char> = state.transitions().map(|(c, _)| c).collect();
            let distinct: HashSet<char> = symbols.iter().copied().collect();
            assert_eq!(symbols.len(), distinct.len(), "one target per symbol");
        }
    }
}

#[test]
fn no_two_states_share_a_label() {
    let dfa = subset_construction(&decimal_nfa().unwrap());
    let labels: Vec<&StateSet> = dfa.states().map(|(_, s)| s.label()).collect();
    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            assert_ne!(a, b, "distinct DFA states represent distinct sets");
        }
    }
}

#[test]
fn accepting_flag_matches_label() {
    let nfa = decimal_nfa().unwrap();
    let dfa = subset_construction(&nfa);
    for (_, state) in dfa.states() {
        let any_final = state
            .label()
            .iter()
            .any(|id| nfa.state(id).is_accepting());
        assert_eq!(state.is_accepting(), any_final);
    }
}

#[test]
fn integer_dfa_two_states_and_accepts_42() {
    let dfa = subset_construction(&integer_nfa().unwrap());
    assert_eq!(dfa.num_states(), 2);
    assert!(!dfa.is_accepting(dfa.start()));

    let mut state = dfa.start();
    for c in "42".chars() {
        state = dfa.transition(state, c).expect("digit transition exists");
    }
    assert!(dfa.is_accepting(state));
    // The accepting state loops on digits.
    assert_eq!(dfa.transition(state, '7'), Some(state));
}

#[test]
fn decimal_dfa_accepts_and_rejects() {
    let dfa = subset_construction(&decimal_nfa().unwrap());
    assert!(dfa.accepts("3.14"));
    assert!(dfa.accepts("0.5"));
    assert!(!dfa.accepts("3."), "no trailing digit after the point");
    assert!(!dfa.accepts(".5"), "no leading digit before the point");
    assert!(!dfa.accepts(".0"));
    assert!(!dfa.accepts("3"));
    assert!(!dfa.accepts("3.1.4"));
}

#[test]
fn dfa_agrees_with_nfa_on_small_alphabet() {
    let alphabet = ['0', '1', '9', '.'];
    for nfa in [integer_nfa().unwrap(), decimal_nfa().unwrap()] {
        let dfa = subset_construction(&nfa);
        for input in strings_up_to(&alphabet, 4) {
            assert_eq!(
                dfa.accepts(&input),
                nfa.accepts(&input),
                "disagree on {input:?}"
            );
        }
    }
}

#[test]
fn construction_is_idempotent_on_the_language() {
    let alphabet = ['0', '5', '.'];
    for nfa in [integer_nfa().unwrap(), decimal_nfa().unwrap()] {
        let dfa = subset_construction(&nfa);
        let rebuilt = subset_construction(&nfa_from_dfa(&dfa));
        for input in strings_up_to(&alphabet, 4) {
            assert_eq!(dfa.accepts(&input), rebuilt.accepts(&input));
        }
    }
}

#[test]
fn ids_are_scoped_per_construction_run() {
    let first = subset_construction(&integer_nfa().unwrap());
    let second = subset_construction(&integer_nfa().unwrap());
    // Independent runs number their states independently from zero.
    assert_eq!(first.start(), 0);
    assert_eq!(second.start(), 0);
    assert_eq!(first.num_states(), second.num_states());
}
