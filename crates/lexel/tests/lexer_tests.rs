//! Tests for scanner functionality

use lexel::{ScanDiagnosticKind, Scanner, TokenKind};

fn demo_scanner() -> Scanner {
    Scanner::builder()
        .type_keyword("integer", "integer")
        .type_keyword("decimal", "decimal")
        .keyword("return")
        .operator('=', "assignment")
        .operator(';', "semicolon")
        .operator('+', "plus")
        .operator('-', "minus")
        .operator('*', "star")
        .operator('/', "slash")
        .line_comment("//")
        .block_comment("/*", "*/")
        .build()
        .expect("numeric automata are well-formed")
}

#[test]
fn declaration_statement() {
    let output = demo_scanner().scan("integer num = 100;");

    let tokens: Vec<(TokenKind, &str)> = output
        .tokens
        .iter()
        .map(|t| (t.kind, t.text.as_str()))
        .collect();
    assert_eq!(
        tokens,
        [
            (TokenKind::Keyword, "integer"),
            (TokenKind::Identifier, "num"),
            (TokenKind::Operator, "="),
            (TokenKind::Integer, "100"),
            (TokenKind::Operator, ";"),
        ],
    );
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.symbols.type_of("num"), Some("integer"));
}

#[test]
fn operator_names_come_from_the_table() {
    let scanner = demo_scanner();
    assert_eq!(scanner.tables().operator_name('='), Some("assignment"));
    assert_eq!(scanner.tables().operator_name(';'), Some("semicolon"));
    assert_eq!(scanner.tables().operator_name('@'), None);
}

#[test]
fn identifier_without_type_keyword_gets_default_type() {
    let output = demo_scanner().scan("x = 1;");
    assert_eq!(output.symbols.type_of("x"), Some("auto"));
}

#[test]
fn later_sightings_do_not_overwrite() {
    let output = demo_scanner().scan("integer num = 1; num = 2;");
    assert_eq!(output.symbols.type_of("num"), Some("integer"));
    assert_eq!(output.symbols.len(), 1);
}

#[test]
fn type_keyword_must_immediately_precede() {
    // The operator between keyword and identifier breaks the declaration.
    let output = demo_scanner().scan("integer = num;");
    assert_eq!(output.symbols.type_of("num"), Some("auto"));
}

#[test]
fn unrecognized_character_recovers() {
    let output = demo_scanner().scan("a @ b;");

    assert_eq!(output.diagnostics.len(), 1);
    let diag = &output.diagnostics[0];
    assert_eq!(diag.line, 1);
    assert_eq!(
        diag.kind,
        ScanDiagnosticKind::UnrecognizedCharacter { ch: '@' }
    );

    // Scanning resumed: tokens on both sides of the bad character.
    let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Operator,
        ],
    );
}

#[test]
fn decimal_and_integer_tokens() {
    let output = demo_scanner().scan("3.14 + 42");
    let tokens: Vec<(TokenKind, &str)> = output
        .tokens
        .iter()
        .map(|t| (t.kind, t.text.as_str()))
        .collect();
    assert_eq!(
        tokens,
        [
            (TokenKind::Decimal, "3.14"),
            (TokenKind::Operator, "+"),
            (TokenKind::Integer, "42"),
        ],
    );
}

#[test]
fn trailing_dot_is_not_part_of_the_number() {
    let output = demo_scanner().scan("3.;");
    let tokens: Vec<(TokenKind, &str)> = output
        .tokens
        .iter()
        .map(|t| (t.kind, t.text.as_str()))
        .collect();
    // "3." has no trailing digit, so the dot falls out of the numeric
    // lexeme and is not an operator either.
    assert_eq!(
        tokens,
        [(TokenKind::Integer, "3"), (TokenKind::Operator, ";")],
    );
    assert_eq!(
        output.diagnostics[0].kind,
        ScanDiagnosticKind::UnrecognizedCharacter { ch: '.' }
    );
}

#[test]
fn line_numbers_are_one_based_and_count_newlines() {
    let output = demo_scanner().scan("a\nb\n\nc");
    let lines: Vec<(u32, &str)> = output
        .tokens
        .iter()
        .map(|t| (t.line, t.text.as_str()))
        .collect();
    assert_eq!(lines, [(1, "a"), (2, "b"), (4, "c")]);
}

#[test]
fn string_and_char_literals() {
    let output = demo_scanner().scan(r#"s = "hi"; c = 'x';"#);
    let literals: Vec<(TokenKind, &str)> = output
        .tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Str | TokenKind::Char))
        .map(|t| (t.kind, t.text.as_str()))
        .collect();
    assert_eq!(
        literals,
        [(TokenKind::Str, "\"hi\""), (TokenKind::Char, "'x'")],
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn unterminated_string_closes_at_end_of_line() {
    let output = demo_scanner().scan("s = \"oops\nnext");

    assert_eq!(
        output.diagnostics[0].kind,
        ScanDiagnosticKind::UnterminatedLiteral { quote: '"' }
    );
    // The consumed text is still classified.
    let lit = output
        .tokens
        .iter()
        .find(|t| t.kind == TokenKind::Str)
        .unwrap();
    assert_eq!(lit.text, "\"oops");
    assert_eq!(lit.line, 1);
    // Scanning continued on the next line.
    let next = output.tokens.last().unwrap();
    assert_eq!((next.kind, next.line), (TokenKind::Identifier, 2));
}

#[test]
fn comments_are_discarded() {
    let output = demo_scanner().scan("a // trailing\nb /* inline */ c");
    let texts: Vec<&str> = output.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn block_comment_spans_lines() {
    let output = demo_scanner().scan("a /* one\ntwo */ b");
    let lines: Vec<(u32, &str)> = output
        .tokens
        .iter()
        .map(|t| (t.line, t.text.as_str()))
        .collect();
    assert_eq!(lines, [(1, "a"), (2, "b")]);
}

#[test]
fn unterminated_block_comment_runs_to_end_of_input() {
    let output = demo_scanner().scan("a /* never closed");
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(
        output.diagnostics[0].kind,
        ScanDiagnosticKind::UnterminatedComment
    );
}

#[test]
fn alternate_grammar_tables() {
    // The classifier accepts injected tables, not hardcoded literals.
    let scanner = Scanner::builder()
        .type_keyword("adad", "adad")
        .operator('%', "modulo")
        .build()
        .unwrap();
    let output = scanner.scan("adad n % 2");
    let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Integer,
        ],
    );
    assert_eq!(output.symbols.type_of("n"), Some("adad"));
}

#[test]
fn token_display_matches_report_format() {
    let output = demo_scanner().scan("integer");
    assert_eq!(output.tokens[0].to_string(), "<Keyword, integer>");
}
