//! Lexel Tools CLI
//!
//! Scans source files with a demo grammar and prints token, symbol, and
//! automaton reports.

use clap::Parser;
use lexel::{AutomatonClassifier, Scanner};
use lexel_tools::cli::{Cli, Commands, NumericPattern, OutputFormat};
use lexel_tools::render;
use std::fs;

/// The grammar used by the CLI: C-flavoured type keywords, single-character
/// arithmetic operators, and both comment styles.
fn demo_scanner() -> Result<Scanner, lexel::AutomatonError> {
    Scanner::builder()
        .type_keyword("integer", "integer")
        .type_keyword("decimal", "decimal")
        .type_keyword("string", "string")
        .type_keyword("char", "char")
        .keyword("return")
        .operator('+', "plus")
        .operator('-', "minus")
        .operator('*', "star")
        .operator('/', "slash")
        .operator('%', "modulo")
        .operator('=', "assignment")
        .operator(';', "semicolon")
        .line_comment("//")
        .block_comment("/*", "*/")
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            input,
            format,
            dump_symbols,
        } => {
            if !input.exists() {
                eprintln!("Error: Input file {} does not exist", input.display());
                return Err("Input file not found".into());
            }
            let source = fs::read_to_string(&input)?;
            let output = demo_scanner()?.scan(&source);

            match format {
                OutputFormat::Text => {
                    print!("{}", render::token_report(&output));
                    if dump_symbols {
                        println!();
                        print!("{}", render::symbol_registry(&output));
                    }
                }
                OutputFormat::Json => {
                    let tokens: Vec<_> = output
                        .tokens
                        .iter()
                        .map(|t| {
                            serde_json::json!({
                                "kind": t.kind.name(),
                                "text": t.text.as_str(),
                                "line": t.line,
                            })
                        })
                        .collect();
                    let diagnostics: Vec<_> = output
                        .diagnostics
                        .iter()
                        .map(|d| {
                            serde_json::json!({
                                "line": d.line,
                                "message": d.kind.to_string(),
                            })
                        })
                        .collect();
                    let symbols: serde_json::Map<_, _> = output
                        .symbols
                        .iter()
                        .map(|(name, ty)| (name.to_string(), serde_json::json!(ty)))
                        .collect();
                    let report = serde_json::json!({
                        "input_file": input.to_string_lossy(),
                        "tokens": tokens,
                        "diagnostics": diagnostics,
                        "symbols": symbols,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }

            if !output.diagnostics.is_empty() && format == OutputFormat::Text {
                eprintln!(
                    "{} diagnostic(s) reported; scan completed",
                    output.diagnostics.len()
                );
            }
        }

        Commands::Dfa { pattern } => {
            let classifier = AutomatonClassifier::new()?;
            let dfa = match pattern {
                NumericPattern::Integer => classifier.integer_dfa(),
                NumericPattern::Decimal => classifier.decimal_dfa(),
            };
            print!("{}", render::transition_table(dfa));
        }
    }

    Ok(())
}
