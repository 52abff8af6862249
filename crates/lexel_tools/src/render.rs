//! Plain-text renderers for scan results and automata.
//!
//! These format the core's return values for the console; they never change
//! the values themselves.

use lexel::{Dfa, ScanOutput, StateId};
use std::collections::VecDeque;
use std::fmt::Write;

/// One line per token, followed by any diagnostics.
#[must_use]
pub fn token_report(output: &ScanOutput) -> String {
    let mut report = String::new();
    for token in &output.tokens {
        let _ = writeln!(
            report,
            "[{}] -> {} (line {})",
            token.kind.name(),
            token.text,
            token.line
        );
    }
    for diag in &output.diagnostics {
        let _ = writeln!(report, "error: {diag}");
    }
    report
}

/// The symbol registry, sorted by name.
#[must_use]
pub fn symbol_registry(output: &ScanOutput) -> String {
    let mut entries: Vec<(&str, &str)> = output.symbols.iter().collect();
    entries.sort_unstable();

    let mut table = String::from("--- Symbol Registry ---\n");
    for (name, ty) in entries {
        let _ = writeln!(table, "| {name} | Type: {ty} |");
    }
    table
}

/// The DFA transition table, one line per state in breadth-first order from
/// the start state. Each state shows its NFA-state label, accepting flag,
/// and outgoing transitions sorted by symbol.
#[must_use]
pub fn transition_table(dfa: &Dfa) -> String {
    let mut table = String::from("--- DFA Transition Table ---\n");
    let mut visited = vec![false; dfa.num_states()];
    let mut queue: VecDeque<StateId> = VecDeque::new();

    visited[dfa.start() as usize] = true;
    queue.push_back(dfa.start());

    while let Some(id) = queue.pop_front() {
        let state = dfa.state(id);
        let _ = write!(
            table,
            "State {} (Final: {}) ->",
            state.label(),
            state.is_accepting()
        );

        let mut transitions: Vec<(char, StateId)> = state.transitions().collect();
        transitions.sort_unstable_by_key(|&(symbol, _)| symbol);
        for (symbol, target) in transitions {
            let _ = write!(table, " [{} -> {}]", symbol, dfa.state(target).label());
            if !visited[target as usize] {
                visited[target as usize] = true;
                queue.push_back(target);
            }
        }
        table.push('\n');
    }
    table
}
