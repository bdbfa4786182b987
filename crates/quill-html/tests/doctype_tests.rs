//! Integration tests for DOCTYPE tokens.

use quill_html::{ParseError, Token, TokenStream};
use test_case::test_case;

fn tokenize(input: &str) -> TokenStream {
    quill_html::tokenize(input).unwrap_or_else(|e| panic!("{e}"))
}

/// The fields of the first token, which must be a DOCTYPE.
fn doctype(stream: &TokenStream) -> (Option<&str>, Option<&str>, Option<&str>, bool) {
    match &stream.tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => (
            name.as_deref(),
            public_identifier.as_deref(),
            system_identifier.as_deref(),
            *force_quirks,
        ),
        other => panic!("Expected DOCTYPE token, got {other:?}"),
    }
}

#[test]
fn test_html5_doctype() {
    let stream = tokenize("<!DOCTYPE html>");
    assert_eq!(stream.tokens.len(), 2);
    assert_eq!(doctype(&stream), (Some("html"), None, None, false));
    assert!(stream.errors.is_empty());
}

#[test]
fn test_keyword_and_name_are_case_insensitive() {
    let stream = tokenize("<!doctype HTML>");
    assert_eq!(doctype(&stream), (Some("html"), None, None, false));
}

#[test]
fn test_public_and_system_identifiers() {
    let stream = tokenize(
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" 'http://www.w3.org/TR/html4/strict.dtd'>"#,
    );
    assert_eq!(
        doctype(&stream),
        (
            Some("html"),
            Some("-//W3C//DTD HTML 4.01//EN"),
            Some("http://www.w3.org/TR/html4/strict.dtd"),
            false
        )
    );
    assert!(stream.errors.is_empty());
}

#[test]
fn test_system_identifier_only() {
    let stream = tokenize(r#"<!DOCTYPE html system "about:legacy-compat">"#);
    assert_eq!(
        doctype(&stream),
        (Some("html"), None, Some("about:legacy-compat"), false)
    );
}

#[test]
fn test_missing_public_identifier() {
    let stream = tokenize("<!DOCTYPE html PUBLIC>");
    assert_eq!(doctype(&stream), (Some("html"), None, None, true));
    assert_eq!(
        stream.errors,
        vec![ParseError::MissingDoctypePublicIdentifier]
    );
}

#[test]
fn test_missing_name() {
    let stream = tokenize("<!DOCTYPE>");
    assert_eq!(doctype(&stream), (None, None, None, true));
    assert_eq!(stream.errors, vec![ParseError::MissingDoctypeName]);
}

#[test]
fn test_missing_whitespace_before_name() {
    let stream = tokenize("<!DOCTYPEhtml>");
    assert_eq!(doctype(&stream), (Some("html"), None, None, false));
    assert_eq!(
        stream.errors,
        vec![ParseError::MissingWhitespaceBeforeDoctypeName]
    );
}

#[test]
fn test_missing_whitespace_after_keyword_keeps_identifier() {
    let stream = tokenize(r#"<!DOCTYPE html PUBLIC"x">"#);
    assert_eq!(doctype(&stream), (Some("html"), Some("x"), None, false));
    assert_eq!(
        stream.errors,
        vec![ParseError::MissingWhitespaceAfterDoctypePublicKeyword]
    );
}

#[test]
fn test_empty_identifier_is_not_missing() {
    let stream = tokenize(r#"<!DOCTYPE html SYSTEM "">"#);
    assert_eq!(doctype(&stream), (Some("html"), None, Some(""), false));
}

#[test_case("<!DOCTYPE html foo>", ParseError::InvalidCharacterSequenceAfterDoctypeName ; "garbage after name")]
#[test_case("<!DOCTYPE html PUBX>", ParseError::InvalidCharacterSequenceAfterDoctypeName ; "partial keyword")]
#[test_case("<!DOCTYPE html PUBLIC x>", ParseError::MissingQuoteBeforeDoctypePublicIdentifier ; "unquoted public identifier")]
#[test_case("<!DOCTYPE html SYSTEM x>", ParseError::MissingQuoteBeforeDoctypeSystemIdentifier ; "unquoted system identifier")]
#[test_case("<!DOCTYPE html SYSTEM>", ParseError::MissingDoctypeSystemIdentifier ; "missing system identifier")]
#[test_case(r#"<!DOCTYPE html PUBLIC "a>"#, ParseError::AbruptDoctypePublicIdentifier ; "abrupt public identifier")]
#[test_case("<!DOCTYPE html SYSTEM 'a>", ParseError::AbruptDoctypeSystemIdentifier ; "abrupt system identifier")]
#[test_case(r#"<!DOCTYPE html PUBLIC "a" x>"#, ParseError::MissingQuoteBeforeDoctypeSystemIdentifier ; "unquoted system after public")]
#[test_case("<!DOCTYPE html", ParseError::EofInDoctype ; "eof after name")]
#[test_case("<!DOCTYPE", ParseError::EofInDoctype ; "eof after keyword")]
#[test_case(r#"<!DOCTYPE html PUBLIC "a"#, ParseError::EofInDoctype ; "eof in identifier")]
fn test_errors_that_force_quirks(input: &str, expected: ParseError) {
    let stream = tokenize(input);
    assert!(doctype(&stream).3, "force-quirks not set for {input}");
    assert_eq!(stream.errors, vec![expected]);
    assert_eq!(stream.tokens.last(), Some(&Token::EndOfInput));
}

#[test_case(r#"<!DOCTYPE html PUBLIC "a""b">"#, ParseError::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers ; "identifiers run together")]
#[test_case(r#"<!DOCTYPE html SYSTEM "a" x>"#, ParseError::UnexpectedCharacterAfterDoctypeSystemIdentifier ; "garbage after system identifier")]
fn test_errors_that_do_not_force_quirks(input: &str, expected: ParseError) {
    let stream = tokenize(input);
    assert!(!doctype(&stream).3, "force-quirks set for {input}");
    assert_eq!(stream.errors, vec![expected]);
}

#[test]
fn test_eof_keeps_accumulated_fields() {
    let stream = tokenize(r#"<!DOCTYPE html PUBLIC "-//W3C"#);
    assert_eq!(doctype(&stream), (Some("html"), Some("-//W3C"), None, true));
}

#[test]
fn test_null_in_name_is_replaced() {
    let stream = tokenize("<!DOCTYPE h\0>");
    assert_eq!(doctype(&stream), (Some("h\u{FFFD}"), None, None, false));
    assert_eq!(stream.errors, vec![ParseError::UnexpectedNullCharacter]);
}

#[test]
fn test_text_follows_doctype() {
    let stream = tokenize("<!DOCTYPE html>\nx");
    assert_eq!(stream.tokens[1], Token::characters("\nx"));
}
