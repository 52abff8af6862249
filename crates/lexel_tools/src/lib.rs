//! Command-line tools for lexel.
//!
//! Provides source scanning with token/symbol reports and transition-table
//! rendering for the built-in numeric automata.

pub mod cli;
pub mod render;
