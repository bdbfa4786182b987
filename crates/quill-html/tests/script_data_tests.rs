//! Integration tests for the script data states, including the escaped and
//! double escaped sub-modes entered through `<!--` and a nested `<script`.

use quill_html::tokenizer::InitialState;
use quill_html::{
    ParseError, State, StrSource, Token, TokenCollector, Tokenizer, TokenizerOptions, tokenize,
    tokenize_with,
};

/// Run `input` to the end and return the tokenizer for inspection.
fn run(input: &str) -> Tokenizer<StrSource<'_>, TokenCollector> {
    let mut tokenizer = Tokenizer::new(StrSource::new(input), TokenCollector::default());
    tokenizer.run().unwrap_or_else(|e| panic!("{e}"));
    tokenizer
}

/// The character data inside a `<script>` element.
fn script_text(input: &str) -> String {
    let stream = tokenize(input).unwrap_or_else(|e| panic!("{e}"));
    stream
        .tokens
        .iter()
        .filter_map(|token| match token {
            Token::Characters { data } => Some(data.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_less_than_sign_is_text() {
    let stream = tokenize("<script>if (a < b) x();</script>").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        stream.tokens,
        vec![
            Token::StartTag {
                name: "script".to_string(),
                self_closing: false,
                attributes: Vec::new(),
            },
            Token::characters("if (a < b) x();"),
            Token::EndTag {
                name: "script".to_string(),
                attributes: Vec::new(),
            },
            Token::EndOfInput,
        ]
    );
    assert!(stream.errors.is_empty());
}

#[test]
fn test_other_end_tags_are_text() {
    assert_eq!(
        script_text("<script>document.write('</p>')</script>"),
        "document.write('</p>')"
    );
}

#[test]
fn test_nested_script_open_enters_double_escaped_mode_and_leaves_it() {
    let tokenizer = run("<script><!--<script>-->");
    // The `-->` leaves both escaped sub-modes.
    assert_eq!(tokenizer.state(), State::ScriptData);
    assert!(tokenizer.sink().errors.is_empty());
    assert_eq!(
        tokenizer.sink().tokens[1],
        Token::characters("<!--<script>-->")
    );
}

#[test]
fn test_end_tag_after_escaped_comment_is_recognized() {
    let stream =
        tokenize("<script><!--<script>--></script>after").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(stream.tokens[1], Token::characters("<!--<script>-->"));
    assert!(matches!(&stream.tokens[2], Token::EndTag { name, .. } if name == "script"));
    assert_eq!(stream.tokens[3], Token::characters("after"));
}

#[test]
fn test_end_tag_closes_escaped_script() {
    let stream = tokenize("<script><!--a</script>").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(stream.tokens[1], Token::characters("<!--a"));
    assert!(matches!(&stream.tokens[2], Token::EndTag { name, .. } if name == "script"));
}

#[test]
fn test_end_tag_inside_double_escape_only_returns_to_escaped() {
    assert_eq!(
        script_text("<script><!--<script></script>x--></script>"),
        "<!--<script></script>x-->"
    );
}

#[test]
fn test_script_prefix_does_not_double_escape() {
    // `<scripts` is not `<script` followed by a delimiter.
    assert_eq!(
        script_text("<script><!--<scripts></script>"),
        "<!--<scripts>"
    );
}

#[test]
fn test_eof_in_escaped_script() {
    let stream = tokenize("<script><!--x").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(stream.tokens[1], Token::characters("<!--x"));
    assert_eq!(
        stream.errors,
        vec![ParseError::EofInScriptHtmlCommentLikeText]
    );
}

#[test]
fn test_eof_in_double_escaped_script() {
    let tokenizer = run("<script><!--<script>x");
    assert_eq!(tokenizer.state(), State::ScriptDataDoubleEscaped);
    assert_eq!(
        tokenizer.sink().errors,
        vec![ParseError::EofInScriptHtmlCommentLikeText]
    );
}

#[test]
fn test_null_is_replaced() {
    let stream = tokenize("<script>a\0b</script>").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(stream.tokens[1], Token::characters("a\u{FFFD}b"));
    assert_eq!(stream.errors, vec![ParseError::UnexpectedNullCharacter]);
}

#[test]
fn test_character_references_are_not_resolved() {
    assert_eq!(script_text("<script>a &amp;&& b</script>"), "a &amp;&& b");
}

#[test]
fn test_start_in_script_data() {
    let options = TokenizerOptions {
        initial_state: InitialState::ScriptData,
        last_start_tag: Some("script".to_string()),
        ..TokenizerOptions::default()
    };
    let stream = tokenize_with("x<!--</script>", &options).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        stream.tokens,
        vec![
            Token::characters("x<!--"),
            Token::EndTag {
                name: "script".to_string(),
                attributes: Vec::new(),
            },
            Token::EndOfInput,
        ]
    );
}
