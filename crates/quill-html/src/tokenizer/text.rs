//! Text content states.
//!
//! Character data accumulates in the buffer. A `<` records a mark and stays
//! in the buffer too, so text that turns out not to be markup needs no
//! replaying; once markup is certain, `begin_markup` cuts the
//! buffer back to the mark and flushes what precedes it.
//!
//! End tags inside RCDATA, RAWTEXT and script data are recognized by matching
//! the last start tag name with the sequence matcher and then checking the
//! character after it in [`State::AppropriateEndTag`].

use super::core::{ReturnState, State, TagKind, Tokenizer};
use super::errors::ParseError;
use super::input::ScalarSource;
use super::sink::TokenSink;

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    pub(super) fn handle_data_state(&mut self) {
        match self.current_input_character {
            // "U+0026 AMPERSAND (&)"
            // "Set the return state to the data state. Switch to the character reference state."
            Some('&') => self.start_character_reference(ReturnState::text(State::Data)),
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the tag open state."
            Some('<') => self.mark_less_than_sign(State::TagOpen),
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Emit the current input
            // character as a character token."
            Some('\0') => {
                self.report(ParseError::UnexpectedNullCharacter);
                self.buffer.append('\0');
            }
            // "EOF"
            // "Emit an end-of-file token."
            None => self.emit_end_of_input(),
            // "Anything else"
            // "Emit the current input character as a character token."
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    pub(super) fn handle_rcdata_state(&mut self) {
        match self.current_input_character {
            Some('&') => self.start_character_reference(ReturnState::text(State::Rcdata)),
            Some('<') => self.mark_less_than_sign(State::RcdataLessThanSign),
            Some('\0') => self.append_replacement_character(),
            None => self.emit_end_of_input(),
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    ///
    /// Character references are not recognized in any of these. PLAINTEXT
    /// does not recognize `<` either.
    pub(super) fn handle_raw_text_state(&mut self) {
        match (self.current_input_character, self.state) {
            (Some('<'), State::Rawtext) => self.mark_less_than_sign(State::RawtextLessThanSign),
            (Some('<'), State::ScriptData) => {
                self.mark_less_than_sign(State::ScriptDataLessThanSign);
            }
            (Some('\0'), _) => self.append_replacement_character(),
            (None, _) => self.emit_end_of_input(),
            (Some(c), _) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    pub(super) fn handle_text_less_than_sign_state(&mut self) {
        let (text_state, end_tag_open) = if self.state == State::RcdataLessThanSign {
            (State::Rcdata, State::RcdataEndTagOpen)
        } else {
            (State::Rawtext, State::RawtextEndTagOpen)
        };
        match self.current_input_character {
            // "U+002F SOLIDUS (/)"
            // "Set the temporary buffer to the empty string. Switch to the ... end tag open state."
            Some('/') => {
                self.buffer.append('/');
                self.switch_to(end_tag_open);
            }
            // "Anything else"
            // "Emit a U+003C LESS-THAN SIGN character token. Reconsume in the ... state."
            _ => self.reconsume_in(text_state),
        }
    }

    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    pub(super) fn handle_text_end_tag_open_state(&mut self) {
        let text_state = match self.state {
            State::RcdataEndTagOpen => State::Rcdata,
            State::RawtextEndTagOpen => State::Rawtext,
            State::ScriptDataEndTagOpen => State::ScriptData,
            _ => State::ScriptDataEscaped,
        };
        match self.current_input_character {
            // "ASCII alpha"
            // "Create a new end tag token, set its tag name to the empty string."
            Some(c) if c.is_ascii_alphabetic() => self.match_appropriate_end_tag(text_state),
            // "Anything else"
            // "Emit a U+003C LESS-THAN SIGN character token and a U+002F SOLIDUS
            // character token. Reconsume in the ... state."
            _ => self.reconsume_in(text_state),
        }
    }

    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any. If no start tag has been emitted from this
    /// tokenizer, then no end tag token is appropriate."
    ///
    /// The end tag name states only accumulate ASCII letters, so a last start
    /// tag with any other character can never be matched.
    fn match_appropriate_end_tag(&mut self, text_state: State) {
        self.text_state = text_state;
        match self.last_start_tag.clone() {
            Some(name) if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) => {
                self.match_sequence(&name, true, State::AppropriateEndTag, text_state);
            }
            _ => self.reconsume_in(text_state),
        }
    }

    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    ///
    /// The last start tag name has just been matched. "If the current end tag
    /// token is an appropriate end tag token" the character after it decides
    /// what follows; anything else leaves `</name` as text.
    pub(super) fn handle_appropriate_end_tag_state(&mut self) {
        match self.current_input_character {
            // "then switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.open_appropriate_end_tag();
                self.switch_to(State::BeforeAttributeName);
            }
            // "then switch to the self-closing start tag state."
            Some('/') => {
                self.open_appropriate_end_tag();
                self.switch_to(State::SelfClosingStartTag);
            }
            // "then switch to the data state and emit the current tag token."
            Some('>') => {
                self.open_appropriate_end_tag();
                self.emit_current_tag();
            }
            _ => self.reconsume_in(self.text_state),
        }
    }

    fn open_appropriate_end_tag(&mut self) {
        self.begin_markup();
        self.create_tag(TagKind::End);
        if let (Some(tag), Some(name)) = (self.current_tag.as_mut(), self.last_start_tag.as_ref()) {
            tag.name.clone_from(name);
        }
    }

    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    pub(super) fn handle_script_data_less_than_sign_state(&mut self) {
        match self.current_input_character {
            // "U+002F SOLIDUS (/)"
            // "Set the temporary buffer to the empty string. Switch to the script data
            // end tag open state."
            Some('/') => {
                self.buffer.append('/');
                self.switch_to(State::ScriptDataEndTagOpen);
            }
            // "U+0021 EXCLAMATION MARK (!)"
            // "Switch to the script data escape start state. Emit a U+003C LESS-THAN SIGN
            // character token and a U+0021 EXCLAMATION MARK character token."
            Some('!') => {
                self.buffer.append('!');
                self.switch_to(State::ScriptDataEscapeStart);
            }
            _ => self.reconsume_in(State::ScriptData),
        }
    }

    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    pub(super) fn handle_script_data_escape_start_state(&mut self) {
        match self.current_input_character {
            // "U+002D HYPHEN-MINUS (-)"
            Some('-') => {
                self.buffer.append('-');
                let next = if self.state == State::ScriptDataEscapeStart {
                    State::ScriptDataEscapeStartDash
                } else {
                    State::ScriptDataEscapedDashDash
                };
                self.switch_to(next);
            }
            // "Anything else"
            // "Reconsume in the script data state."
            _ => self.reconsume_in(State::ScriptData),
        }
    }

    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    ///
    /// The three states differ only in how many dashes were just seen.
    pub(super) fn handle_script_data_escaped_state(&mut self) {
        let state = self.state;
        match self.current_input_character {
            Some('-') => {
                self.buffer.append('-');
                let next = if state == State::ScriptDataEscaped {
                    State::ScriptDataEscapedDash
                } else {
                    State::ScriptDataEscapedDashDash
                };
                self.switch_to(next);
            }
            Some('<') => self.mark_less_than_sign(State::ScriptDataEscapedLessThanSign),
            // "U+003E GREATER-THAN SIGN (>)" in the dash dash state
            // "Switch to the script data state. Emit a U+003E GREATER-THAN SIGN character token."
            Some('>') if state == State::ScriptDataEscapedDashDash => {
                self.buffer.append('>');
                self.switch_to(State::ScriptData);
            }
            Some('\0') => {
                self.append_replacement_character();
                self.switch_to(State::ScriptDataEscaped);
            }
            // "EOF"
            // "This is an eof-in-script-html-comment-like-text parse error. Emit an
            // end-of-file token."
            None => {
                self.report(ParseError::EofInScriptHtmlCommentLikeText);
                self.emit_end_of_input();
            }
            Some(c) => {
                self.buffer.append(c);
                self.switch_to(State::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    pub(super) fn handle_script_data_escaped_less_than_sign_state(&mut self) {
        match self.current_input_character {
            Some('/') => {
                self.buffer.append('/');
                self.switch_to(State::ScriptDataEscapedEndTagOpen);
            }
            // "ASCII alpha"
            // "Set the temporary buffer to the empty string. Emit a U+003C LESS-THAN SIGN
            // character token. Reconsume in the script data double escape start state."
            Some(c) if c.is_ascii_alphabetic() => self.match_sequence(
                "script",
                true,
                State::ScriptDataDoubleEscapeStart,
                State::ScriptDataEscaped,
            ),
            _ => self.reconsume_in(State::ScriptDataEscaped),
        }
    }

    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    ///
    /// `<script` has been seen. "If the temporary buffer is the string
    /// "script", then switch to the script data double escaped state."
    pub(super) fn handle_script_data_double_escape_start_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) || c == '/' || c == '>' => {
                self.buffer.append(c);
                self.switch_to(State::ScriptDataDoubleEscaped);
            }
            _ => self.reconsume_in(State::ScriptDataEscaped),
        }
    }

    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    pub(super) fn handle_script_data_double_escaped_state(&mut self) {
        let state = self.state;
        match self.current_input_character {
            Some('-') => {
                self.buffer.append('-');
                let next = if state == State::ScriptDataDoubleEscaped {
                    State::ScriptDataDoubleEscapedDash
                } else {
                    State::ScriptDataDoubleEscapedDashDash
                };
                self.switch_to(next);
            }
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the script data double escaped less-than sign state. Emit a
            // U+003C LESS-THAN SIGN character token."
            Some('<') => {
                self.buffer.append('<');
                self.switch_to(State::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('>') if state == State::ScriptDataDoubleEscapedDashDash => {
                self.buffer.append('>');
                self.switch_to(State::ScriptData);
            }
            Some('\0') => {
                self.append_replacement_character();
                self.switch_to(State::ScriptDataDoubleEscaped);
            }
            None => {
                self.report(ParseError::EofInScriptHtmlCommentLikeText);
                self.emit_end_of_input();
            }
            Some(c) => {
                self.buffer.append(c);
                self.switch_to(State::ScriptDataDoubleEscaped);
            }
        }
    }

    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    pub(super) fn handle_script_data_double_escaped_less_than_sign_state(&mut self) {
        match self.current_input_character {
            // "U+002F SOLIDUS (/)"
            // "Set the temporary buffer to the empty string. Switch to the script data
            // double escape end state. Emit a U+002F SOLIDUS character token."
            Some('/') => self.match_sequence(
                "/script",
                true,
                State::ScriptDataDoubleEscapeEnd,
                State::ScriptDataDoubleEscaped,
            ),
            _ => self.reconsume_in(State::ScriptDataDoubleEscaped),
        }
    }

    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    pub(super) fn handle_script_data_double_escape_end_state(&mut self) {
        match self.current_input_character {
            // "If the temporary buffer is the string "script", then switch to the
            // script data escaped state."
            Some(c) if Self::is_whitespace_char(c) || c == '/' || c == '>' => {
                self.buffer.append(c);
                self.switch_to(State::ScriptDataEscaped);
            }
            _ => self.reconsume_in(State::ScriptDataDoubleEscaped),
        }
    }
}
