//! Integration tests for comments, bogus comments and CDATA sections.

use quill_html::{ParseError, Token, TokenStream, TokenizerOptions, tokenize_with};
use test_case::test_case;

fn tokenize(input: &str) -> TokenStream {
    quill_html::tokenize(input).unwrap_or_else(|e| panic!("{e}"))
}

fn tokenize_foreign(input: &str) -> TokenStream {
    let options = TokenizerOptions {
        cdata_allowed: true,
        ..TokenizerOptions::default()
    };
    tokenize_with(input, &options).unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn test_comment() {
    let stream = tokenize("<!-- hello -->");
    assert_eq!(
        stream.tokens,
        vec![Token::comment(" hello "), Token::EndOfInput]
    );
    assert!(stream.errors.is_empty());
}

#[test]
fn test_empty_comment() {
    let stream = tokenize("<!---->");
    assert_eq!(stream.tokens, vec![Token::comment(""), Token::EndOfInput]);
    assert!(stream.errors.is_empty());
}

#[test_case("<!-->" ; "two dashes")]
#[test_case("<!--->" ; "three dashes")]
fn test_abruptly_closed_empty_comment(input: &str) {
    let stream = tokenize(input);
    assert_eq!(stream.tokens, vec![Token::comment(""), Token::EndOfInput]);
    assert_eq!(stream.errors, vec![ParseError::AbruptClosingOfEmptyComment]);
}

#[test]
fn test_trailing_dash_at_eof_is_dropped() {
    let stream = tokenize("<!--abc-");
    assert_eq!(stream.tokens, vec![Token::comment("abc"), Token::EndOfInput]);
    assert_eq!(stream.errors, vec![ParseError::EofInComment]);
}

#[test]
fn test_eof_in_comment() {
    let stream = tokenize("<!--a");
    assert_eq!(stream.tokens, vec![Token::comment("a"), Token::EndOfInput]);
    assert_eq!(stream.errors, vec![ParseError::EofInComment]);
}

#[test]
fn test_text_before_comment_is_flushed_first() {
    let stream = tokenize("a<!--b-->c");
    assert_eq!(
        stream.tokens,
        vec![
            Token::characters("a"),
            Token::comment("b"),
            Token::characters("c"),
            Token::EndOfInput,
        ]
    );
}

#[test_case("<!--a--b-->", "a--b" ; "double dash inside")]
#[test_case("<!--a---->", "a--" ; "extra dashes before close")]
#[test_case("<!--a<b-->", "a<b" ; "less than sign")]
#[test_case("<!--<!-->", "<!" ; "bang without nested comment")]
#[test_case("<!--a--!b-->", "a--!b" ; "bang then text")]
fn test_comment_data(input: &str, data: &str) {
    let stream = tokenize(input);
    assert_eq!(stream.tokens[0], Token::comment(data));
    assert!(stream.errors.is_empty(), "{:?}", stream.errors);
}

#[test]
fn test_incorrectly_closed_comment() {
    let stream = tokenize("<!--a--!>");
    assert_eq!(stream.tokens[0], Token::comment("a"));
    assert_eq!(stream.errors, vec![ParseError::IncorrectlyClosedComment]);
}

#[test]
fn test_nested_comment() {
    let stream = tokenize("<!--a<!--b-->");
    assert_eq!(stream.tokens[0], Token::comment("a<!--b"));
    assert_eq!(stream.errors, vec![ParseError::NestedComment]);
}

#[test]
fn test_null_in_comment_is_replaced() {
    let stream = tokenize("<!--\0-->");
    assert_eq!(stream.tokens[0], Token::comment("\u{FFFD}"));
    assert_eq!(stream.errors, vec![ParseError::UnexpectedNullCharacter]);
}

#[test_case("<!x>", "x" ; "unknown declaration")]
#[test_case("<!-x>", "-x" ; "single dash")]
#[test_case("<!DOCTYP>", "DOCTYP" ; "truncated doctype keyword")]
#[test_case("<!>", "" ; "empty declaration")]
fn test_incorrectly_opened_comment(input: &str, data: &str) {
    let stream = tokenize(input);
    assert_eq!(stream.tokens, vec![Token::comment(data), Token::EndOfInput]);
    assert_eq!(stream.errors, vec![ParseError::IncorrectlyOpenedComment]);
}

#[test]
fn test_bogus_comment_runs_to_eof() {
    let stream = tokenize("<?php echo 1");
    assert_eq!(
        stream.tokens,
        vec![Token::comment("?php echo 1"), Token::EndOfInput]
    );
}

#[test]
fn test_cdata_in_html_content_is_a_bogus_comment() {
    let stream = tokenize("<![CDATA[x]]>");
    assert_eq!(
        stream.tokens,
        vec![Token::comment("[CDATA[x]]"), Token::EndOfInput]
    );
    assert_eq!(stream.errors, vec![ParseError::CdataInHtmlContent]);
}

#[test]
fn test_cdata_keyword_is_case_sensitive() {
    let stream = tokenize_foreign("<![cdata[x]]>");
    assert_eq!(stream.tokens[0], Token::comment("[cdata[x]]"));
    assert_eq!(stream.errors, vec![ParseError::IncorrectlyOpenedComment]);
}

#[test]
fn test_cdata_section_in_foreign_content() {
    let stream = tokenize_foreign("a<![CDATA[x<y>&amp;]]>b");
    assert_eq!(
        stream.tokens,
        vec![Token::characters("ax<y>&amp;b"), Token::EndOfInput]
    );
    assert!(stream.errors.is_empty());
}

#[test]
fn test_cdata_section_keeps_lone_brackets() {
    let stream = tokenize_foreign("<![CDATA[a]b]]]>");
    assert_eq!(stream.tokens[0], Token::characters("a]b]"));
}

#[test]
fn test_eof_in_cdata() {
    let stream = tokenize_foreign("<![CDATA[x");
    assert_eq!(stream.tokens, vec![Token::characters("x"), Token::EndOfInput]);
    assert_eq!(stream.errors, vec![ParseError::EofInCdata]);
}
