//! CLI interface for lexel-tools

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexel-scan")]
#[command(about = "Token scanning and automaton inspection for lexel")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a source file and report its tokens
    Scan {
        /// Input source file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Also print the symbol registry
        #[arg(short = 's', long)]
        dump_symbols: bool,
    },

    /// Print the transition table of a built-in numeric DFA
    Dfa {
        /// Which automaton to print
        #[arg(short, long, default_value = "integer")]
        pattern: NumericPattern,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Supported: text, json")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericPattern {
    Integer,
    Decimal,
}

impl std::str::FromStr for NumericPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "integer" | "int" => Ok(NumericPattern::Integer),
            "decimal" | "dec" => Ok(NumericPattern::Decimal),
            _ => Err(format!("Unknown pattern: {s}. Supported: integer, decimal")),
        }
    }
}
