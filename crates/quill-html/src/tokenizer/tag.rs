//! Tag and attribute states.
//!
//! The buffer holds whichever field is being read: the tag name, then each
//! attribute name and value in turn. Leaving a field moves it into the
//! current tag.

use super::core::{ReturnState, State, TagKind, Tokenizer};
use super::errors::ParseError;
use super::input::ScalarSource;
use super::sink::TokenSink;

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    pub(super) fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            // "U+0021 EXCLAMATION MARK (!)"
            // "Switch to the markup declaration open state."
            Some('!') => {
                self.buffer.append('!');
                self.switch_to(State::MarkupDeclarationOpen);
            }
            // "U+002F SOLIDUS (/)"
            // "Switch to the end tag open state."
            Some('/') => {
                self.buffer.append('/');
                self.switch_to(State::EndTagOpen);
            }
            // "ASCII alpha"
            // "Create a new start tag token, set its tag name to the empty string.
            // Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.begin_markup();
                self.create_tag(TagKind::Start);
                self.reconsume_in(State::TagName);
            }
            // "U+003F QUESTION MARK (?)"
            // "This is an unexpected-question-mark-instead-of-tag-name parse error. Create a
            // comment token whose data is the empty string. Reconsume in the bogus comment state."
            Some('?') => {
                self.report(ParseError::UnexpectedQuestionMarkInsteadOfTagName);
                self.begin_markup();
                self.reconsume_in(State::BogusComment);
            }
            // "EOF"
            // "This is an eof-before-tag-name parse error. Emit a U+003C LESS-THAN SIGN
            // character token and an end-of-file token."
            None => {
                self.report(ParseError::EofBeforeTagName);
                self.emit_end_of_input();
            }
            // "Anything else"
            // "This is an invalid-first-character-of-tag-name parse error. Emit a U+003C
            // LESS-THAN SIGN character token. Reconsume in the data state."
            Some(_) => {
                self.report(ParseError::InvalidFirstCharacterOfTagName);
                self.reconsume_in(State::Data);
            }
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    pub(super) fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            // "ASCII alpha"
            // "Create a new end tag token, set its tag name to the empty string. Reconsume
            // in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.begin_markup();
                self.create_tag(TagKind::End);
                self.reconsume_in(State::TagName);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is a missing-end-tag-name parse error. Switch to the data state."
            Some('>') => {
                self.report(ParseError::MissingEndTagName);
                self.buffer.truncate(self.text_mark);
                self.switch_to(State::Data);
            }
            // "EOF"
            // "This is an eof-before-tag-name parse error. Emit a U+003C LESS-THAN SIGN
            // character token, a U+002F SOLIDUS character token and an end-of-file token."
            None => {
                self.report(ParseError::EofBeforeTagName);
                self.emit_end_of_input();
            }
            // "Anything else"
            // "This is an invalid-first-character-of-tag-name parse error. Create a
            // comment token whose data is the empty string. Reconsume in the bogus
            // comment state."
            Some(_) => {
                self.report(ParseError::InvalidFirstCharacterOfTagName);
                self.begin_markup();
                self.reconsume_in(State::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    pub(super) fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab)"
            // "U+000A LINE FEED (LF)"
            // "U+000C FORM FEED (FF)"
            // "U+0020 SPACE"
            // "Switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.finish_tag_name();
                self.switch_to(State::BeforeAttributeName);
            }
            // "U+002F SOLIDUS (/)"
            // "Switch to the self-closing start tag state."
            Some('/') => {
                self.finish_tag_name();
                self.switch_to(State::SelfClosingStartTag);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "Switch to the data state. Emit the current tag token."
            Some('>') => {
                self.finish_tag_name();
                self.emit_current_tag();
            }
            // "ASCII upper alpha"
            // "Append the lowercase version of the current input character (add 0x0020 to
            // the character's code point) to the current tag token's tag name."
            Some(c) if c.is_ascii_uppercase() => self.buffer.append(c.to_ascii_lowercase()),
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Append a U+FFFD
            // REPLACEMENT CHARACTER character to the current tag token's tag name."
            Some('\0') => self.append_replacement_character(),
            // "EOF"
            // "This is an eof-in-tag parse error. Emit an end-of-file token."
            None => self.eof_in_tag(),
            // "Anything else"
            // "Append the current input character to the current tag token's tag name."
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    pub(super) fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            // "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+002F SOLIDUS (/)", "U+003E GREATER-THAN SIGN (>)", "EOF"
            // "Reconsume in the after attribute name state."
            Some('/' | '>') | None => self.reconsume_in(State::AfterAttributeName),
            // "U+003D EQUALS SIGN (=)"
            // "This is an unexpected-equals-sign-before-attribute-name parse error. Start a
            // new attribute in the current tag token. Set that attribute's name to the
            // current input character, and its value to the empty string. Switch to the
            // attribute name state."
            Some('=') => {
                self.report(ParseError::UnexpectedEqualsSignBeforeAttributeName);
                self.buffer.clear();
                self.buffer.append('=');
                self.switch_to(State::AttributeName);
            }
            // "Anything else"
            // "Start a new attribute in the current tag token. Set that attribute name and
            // value to the empty string. Reconsume in the attribute name state."
            Some(_) => {
                self.buffer.clear();
                self.reconsume_in(State::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    pub(super) fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            // whitespace, "/", ">", "EOF"
            // "Reconsume in the after attribute name state."
            Some('\t' | '\n' | '\x0C' | ' ' | '/' | '>') | None => {
                self.finish_attribute_name();
                self.reconsume_in(State::AfterAttributeName);
            }
            // "U+003D EQUALS SIGN (=)"
            // "Switch to the before attribute value state."
            Some('=') => {
                self.finish_attribute_name();
                self.switch_to(State::BeforeAttributeValue);
            }
            Some(c) if c.is_ascii_uppercase() => self.buffer.append(c.to_ascii_lowercase()),
            Some('\0') => self.append_replacement_character(),
            // "U+0022 QUOTATION MARK ("), U+0027 APOSTROPHE ('), U+003C LESS-THAN SIGN (<)"
            // "This is an unexpected-character-in-attribute-name parse error. Treat it as
            // per the "anything else" entry below."
            Some(c @ ('"' | '\'' | '<')) => {
                self.report(ParseError::UnexpectedCharacterInAttributeName);
                self.buffer.append(c);
            }
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    pub(super) fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => self.switch_to(State::SelfClosingStartTag),
            Some('=') => self.switch_to(State::BeforeAttributeValue),
            Some('>') => self.emit_current_tag(),
            None => self.eof_in_tag(),
            // "Start a new attribute in the current tag token. Set that attribute name and
            // value to the empty string. Reconsume in the attribute name state."
            Some(_) => {
                self.buffer.clear();
                self.reconsume_in(State::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    pub(super) fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => self.switch_to(State::AttributeValueDoubleQuoted),
            Some('\'') => self.switch_to(State::AttributeValueSingleQuoted),
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is a missing-attribute-value parse error. Switch to the data state.
            // Emit the current tag token."
            Some('>') => {
                self.report(ParseError::MissingAttributeValue);
                self.finish_attribute_value();
                self.emit_current_tag();
            }
            _ => self.reconsume_in(State::AttributeValueUnquoted),
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    pub(super) fn handle_attribute_value_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            // The matching quote: "Switch to the after attribute value (quoted) state."
            Some(c) if c == quote => {
                self.finish_attribute_value();
                self.switch_to(State::AfterAttributeValueQuoted);
            }
            // "U+0026 AMPERSAND (&)"
            // "Set the return state to the attribute value (...) state. Switch to the
            // character reference state."
            Some('&') => self.start_character_reference(ReturnState::attribute(self.state)),
            Some('\0') => self.append_replacement_character(),
            None => self.eof_in_tag(),
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    pub(super) fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.finish_attribute_value();
                self.switch_to(State::BeforeAttributeName);
            }
            Some('&') => {
                self.start_character_reference(ReturnState::attribute(
                    State::AttributeValueUnquoted,
                ));
            }
            Some('>') => {
                self.finish_attribute_value();
                self.emit_current_tag();
            }
            Some('\0') => self.append_replacement_character(),
            // "This is an unexpected-character-in-unquoted-attribute-value parse error.
            // Treat it as per the "anything else" entry below."
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                self.report(ParseError::UnexpectedCharacterInUnquotedAttributeValue);
                self.buffer.append(c);
            }
            None => self.eof_in_tag(),
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    pub(super) fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => self.switch_to(State::BeforeAttributeName),
            Some('/') => self.switch_to(State::SelfClosingStartTag),
            Some('>') => self.emit_current_tag(),
            None => self.eof_in_tag(),
            // "This is a missing-whitespace-between-attributes parse error. Reconsume in
            // the before attribute name state."
            Some(_) => {
                self.report(ParseError::MissingWhitespaceBetweenAttributes);
                self.reconsume_in(State::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    pub(super) fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>)"
            // "Set the self-closing flag of the current tag token. Switch to the data
            // state. Emit the current tag token."
            Some('>') => {
                if let Some(tag) = self.current_tag.as_mut() {
                    tag.self_closing = true;
                }
                self.emit_current_tag();
            }
            None => self.eof_in_tag(),
            // "This is an unexpected-solidus-in-tag parse error. Reconsume in the before
            // attribute name state."
            Some(_) => {
                self.report(ParseError::UnexpectedSolidusInTag);
                self.reconsume_in(State::BeforeAttributeName);
            }
        }
    }
}
