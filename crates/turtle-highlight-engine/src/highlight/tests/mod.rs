//! Tests for the highlighting pipeline.
//!
//! Fixtures (.ttl) and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::highlight::{TokenKind, highlight_block, highlight_line, span::Span};

use TokenKind::*;

// Fixture-based snapshot tests

#[test]
fn fixture_dcat_dataset() {
    assert_fixture("dcat_dataset");
}

#[test]
fn fixture_edge_cases() {
    assert_fixture("edge_cases");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!(
        "{}/src/highlight/tests/fixtures",
        env!("CARGO_MANIFEST_DIR")
    );
    let ttl = std::fs::read_to_string(format!("{fixtures_dir}/{name}.ttl")).unwrap();

    let block = highlight_block(&ttl);
    invariants::check(&block);

    let snap = normalize::normalize(&block);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

fn parts(line: &str) -> Vec<(TokenKind, &str)> {
    let block = highlight_block(line);
    invariants::check(&block);
    assert_eq!(block.lines.len(), 1, "expected a single line");
    block.line_parts(0)
}

// Behaviour of single lines

#[test]
fn uri_takes_precedence_over_prefix_and_keyword() {
    assert_eq!(
        parts(r#"<http://example.org/a:b> "a""#),
        vec![
            (Uri, "<http://example.org/a:b>"),
            (Plain, " "),
            (String, r#""a""#),
        ]
    );
}

#[test]
fn prefixed_name_is_split_around_the_colon() {
    assert_eq!(
        parts("dcat:Dataset"),
        vec![
            (PrefixNamespace, "dcat"),
            (Plain, ":"),
            (PrefixLocalName, "Dataset"),
        ]
    );
}

#[test]
fn keyword_at_word_boundary() {
    assert_eq!(parts("a dataset"), vec![(Keyword, "a"), (Plain, " dataset")]);
}

#[test]
fn keyword_not_matched_inside_word() {
    assert_eq!(parts("alpha"), vec![(Plain, "alpha")]);
}

#[test]
fn language_tag_after_string() {
    assert_eq!(
        parts(r#""hello"@en ."#),
        vec![(String, r#""hello""#), (LanguageTag, "@en"), (Plain, " .")]
    );
}

#[test]
fn string_contents_are_not_retagged() {
    assert_eq!(
        parts(r#""ex:a true @en""#),
        vec![(String, r#""ex:a true @en""#)]
    );
}

#[test]
fn prefixed_name_inside_string_gap_after_uri() {
    assert_eq!(
        parts("<s> ex:p"),
        vec![
            (Uri, "<s>"),
            (Plain, " "),
            (PrefixNamespace, "ex"),
            (Plain, ":"),
            (PrefixLocalName, "p"),
        ]
    );
}

#[test]
fn escaped_quote_ends_string_early() {
    assert_eq!(
        parts(r#""a\"b""#),
        vec![(String, r#""a\""#), (Plain, "b\"")]
    );
}

#[test]
fn unterminated_string_is_plain() {
    assert_eq!(parts(r#""open"#), vec![(Plain, r#""open"#)]);
}

#[test]
fn non_ascii_text_keeps_byte_spans_valid() {
    assert_eq!(
        parts(r#"ex:name "Zürich"@de-CH"#),
        vec![
            (PrefixNamespace, "ex"),
            (Plain, ":"),
            (PrefixLocalName, "name"),
            (Plain, " "),
            (String, r#""Zürich""#),
            (LanguageTag, "@de-CH"),
        ]
    );
}

#[rstest]
#[case("# comment")]
#[case("   # indented comment")]
#[case("\t#")]
#[case("# <http://example.org/> \"x\" ex:a true")]
fn comment_line_is_one_untrimmed_token(#[case] line: &str) {
    assert_eq!(parts(line), vec![(Comment, line)]);
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("# only\n")]
#[case("@prefix ex: <http://example.org/> .\n\nex:a a ex:B .")]
#[case("ex:a ex:b \"unterminated\n<also unterminated\r\n")]
#[case("<<>>\"\"\"@@:a:b a:a")]
#[case("ex:ünïcode \"ümlaut\"@de\t# trailing")]
fn reconstruction_is_lossless(#[case] source: &str) {
    let block = highlight_block(source);
    invariants::check(&block);
    assert_eq!(block.reconstruct(), source);
}

// Block-level behaviour

#[test]
fn empty_input_has_no_lines() {
    let block = highlight_block("");
    assert!(block.lines.is_empty());
    assert_eq!(block.tokens().count(), 0);
}

#[test]
fn lines_are_classified_independently() {
    let block = highlight_block("# header\nex:a a ex:B .\n");
    invariants::check(&block);
    assert_eq!(block.lines.len(), 3);
    assert!(block.lines[0].is_comment());
    assert!(!block.lines[1].is_comment());
    assert!(block.lines[2].tokens.is_empty());
    assert_eq!(block.line_parts(1)[0], (PrefixNamespace, "ex"));
}

#[test]
fn string_does_not_continue_onto_next_line() {
    let block = highlight_block("\"first\nsecond\"");
    invariants::check(&block);
    assert_eq!(block.line_parts(0), vec![(Plain, "\"first")]);
    assert_eq!(block.line_parts(1), vec![(Plain, "second\"")]);
}

#[test]
fn token_spans_are_absolute_offsets() {
    let block = highlight_block("x\nex:a");
    let spans: Vec<_> = block.lines[1].tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(2, 4), Span::new(4, 5), Span::new(5, 6)]
    );
}

#[test]
fn highlight_line_honours_base() {
    let tokens = highlight_line(100, "# c");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].span, Span::new(100, 103));
}
