//! Integration tests for named and numeric character references in text and
//! attribute values.

use quill_html::tokenizer::NamedReferences;
use quill_html::{
    Attribute, ParseError, StrSource, Token, TokenCollector, TokenStream, Tokenizer,
};
use test_case::test_case;

fn tokenize(input: &str) -> TokenStream {
    quill_html::tokenize(input).unwrap_or_else(|e| panic!("{e}"))
}

/// The value of the first attribute of the first token.
fn first_attribute_value(input: &str) -> String {
    match &tokenize(input).tokens[0] {
        Token::StartTag { attributes, .. } => attributes
            .first()
            .map(Attribute::value_or_empty)
            .unwrap_or_else(|| panic!("No attributes in {input}"))
            .to_string(),
        other => panic!("Expected StartTag token, got {other:?}"),
    }
}

#[test_case("&amp;", "&" ; "amp")]
#[test_case("&lt;b&gt;", "<b>" ; "lt and gt")]
#[test_case("&notin;", "\u{2209}" ; "longest match wins")]
#[test_case("&fjlig;", "fj" ; "two characters")]
#[test_case("x&quot;y", "x\"y" ; "between text")]
#[test_case("&", "&" ; "lone ampersand")]
#[test_case("& x", "& x" ; "ampersand then space")]
#[test_case("&#65;", "A" ; "decimal")]
#[test_case("&#x41;", "A" ; "hexadecimal")]
#[test_case("&#X6a;", "j" ; "hexadecimal upper x")]
#[test_case("&#9;", "\t" ; "tab is not a control error")]
#[test_case("&#x1F600;", "\u{1F600}" ; "astral")]
fn test_resolves_without_errors(input: &str, expected: &str) {
    let stream = tokenize(input);
    assert_eq!(
        stream.tokens,
        vec![Token::characters(expected), Token::EndOfInput]
    );
    assert!(stream.errors.is_empty(), "{:?}", stream.errors);
}

#[test_case("&amp", "&", ParseError::MissingSemicolonAfterCharacterReference ; "legacy name")]
#[test_case("&notit;", "\u{00AC}it;", ParseError::MissingSemicolonAfterCharacterReference ; "legacy prefix of longer name")]
#[test_case("&foo;", "&foo;", ParseError::UnknownNamedCharacterReference ; "unknown name")]
#[test_case("&#65", "A", ParseError::MissingSemicolonAfterCharacterReference ; "decimal without semicolon")]
#[test_case("&#x41g", "Ag", ParseError::MissingSemicolonAfterCharacterReference ; "hex followed by letter")]
#[test_case("&#;", "&#;", ParseError::AbsenceOfDigitsInNumericCharacterReference ; "no decimal digits")]
#[test_case("&#xg;", "&#xg;", ParseError::AbsenceOfDigitsInNumericCharacterReference ; "no hex digits")]
#[test_case("&#0;", "\u{FFFD}", ParseError::NullCharacterReference ; "null")]
#[test_case("&#x110000;", "\u{FFFD}", ParseError::CharacterReferenceOutsideUnicodeRange ; "outside unicode")]
#[test_case("&#99999999999999;", "\u{FFFD}", ParseError::CharacterReferenceOutsideUnicodeRange ; "overflowing digits")]
#[test_case("&#xD800;", "\u{FFFD}", ParseError::SurrogateCharacterReference ; "surrogate")]
#[test_case("&#xFFFE;", "\u{FFFE}", ParseError::NoncharacterCharacterReference ; "noncharacter")]
#[test_case("&#x80;", "\u{20AC}", ParseError::ControlCharacterReference ; "windows 1252 euro")]
#[test_case("&#x9F;", "\u{0178}", ParseError::ControlCharacterReference ; "windows 1252 y diaeresis")]
#[test_case("&#x81;", "\u{81}", ParseError::ControlCharacterReference ; "c1 hole")]
#[test_case("&#13;", "\r", ParseError::ControlCharacterReference ; "carriage return")]
#[test_case("&#1;", "\u{1}", ParseError::ControlCharacterReference ; "c0 control")]
fn test_resolves_with_one_error(input: &str, expected: &str, error: ParseError) {
    let stream = tokenize(input);
    assert_eq!(
        stream.tokens,
        vec![Token::characters(expected), Token::EndOfInput]
    );
    assert_eq!(stream.errors, vec![error]);
}

#[test]
fn test_reference_then_tag() {
    let stream = tokenize("&amp<b>");
    assert_eq!(stream.tokens[0], Token::characters("&"));
    assert_eq!(stream.tokens[1].tag_name(), Some("b"));
}

#[test]
fn test_rcdata_resolves_references() {
    let stream = tokenize("<title>&lt;&#x26;</title>");
    assert_eq!(stream.tokens[1], Token::characters("<&"));
}

#[test_case(r#"<a title="&amp;">"#, "&" ; "quoted")]
#[test_case("<a title=&lt;>", "<" ; "unquoted")]
#[test_case("<a title='&not;x'>", "\u{00AC}x" ; "single quoted")]
#[test_case(r#"<a title="x&#65;y">"#, "xAy" ; "numeric")]
#[test_case(r#"<a href="?a=1&not=2">"#, "?a=1&not=2" ; "legacy name before equals stays literal")]
#[test_case(r#"<a title="&notit">"#, "&notit" ; "legacy name before alphanumeric stays literal")]
#[test_case(r#"<a title="&ampx">"#, "&ampx" ; "legacy amp before letter stays literal")]
fn test_attribute_values(input: &str, expected: &str) {
    assert_eq!(first_attribute_value(input), expected);
}

#[test]
fn test_legacy_name_in_attribute_before_other_character_is_resolved() {
    let stream = tokenize(r#"<a title="&amp!">"#);
    assert!(matches!(
        &stream.tokens[0],
        Token::StartTag { attributes, .. } if attributes[0].value.as_deref() == Some("&!")
    ));
    assert_eq!(
        stream.errors,
        vec![ParseError::MissingSemicolonAfterCharacterReference]
    );
}

/// A table with a single reference, to check the tokenizer only relies on
/// the `NamedReferences` trait.
struct Smiley;

impl NamedReferences for Smiley {
    fn lookup(&self, name: &str) -> Option<&str> {
        (name == "smile;").then_some("\u{263A}")
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        "smile;".starts_with(prefix)
    }
}

#[test]
fn test_custom_reference_table() {
    let mut tokenizer =
        Tokenizer::new(StrSource::new("&smile;&amp;"), TokenCollector::default())
            .with_named_references(Smiley);
    tokenizer.run().unwrap_or_else(|e| panic!("{e}"));
    let sink = tokenizer.into_sink();
    assert_eq!(sink.tokens[0], Token::characters("\u{263A}&amp;"));
    assert_eq!(
        sink.errors,
        vec![ParseError::UnknownNamedCharacterReference]
    );
}
