//! Markup declarations, comments and CDATA sections.
//!
//! While a comment is open the buffer holds its data. The text preceding
//! `<!` is flushed only once the declaration is known to be a comment or
//! DOCTYPE; CDATA content joins the surrounding character data.

use super::core::{State, Tokenizer};
use super::errors::ParseError;
use super::input::ScalarSource;
use super::sink::TokenSink;

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    pub(super) fn handle_markup_declaration_open_state(&mut self) {
        match self.current_input_character {
            // "If the next two characters are both U+002D HYPHEN-MINUS characters (-)"
            Some('-') => self.match_sequence(
                "--",
                false,
                State::CommentOpen,
                State::IncorrectlyOpenedComment,
            ),
            // "Otherwise, if the next seven characters are an ASCII case-insensitive
            // match for the word "DOCTYPE""
            Some('d' | 'D') => self.match_sequence(
                "doctype",
                true,
                State::DoctypeOpen,
                State::IncorrectlyOpenedComment,
            ),
            // "Otherwise, if ... the next seven characters are a case-sensitive match for
            // the string "[CDATA[""
            Some('[') => self.match_sequence(
                "[CDATA[",
                false,
                State::CdataOpen,
                State::IncorrectlyOpenedComment,
            ),
            _ => self.reconsume_in(State::IncorrectlyOpenedComment),
        }
    }

    /// `<!--` matched: "Consume those two characters, create a comment token
    /// whose data is the empty string, and switch to the comment start state."
    pub(super) fn handle_comment_open_state(&mut self) {
        self.begin_markup();
        self.reconsume_in(State::CommentStart);
    }

    /// "Anything else"
    /// "This is an incorrectly-opened-comment parse error. Create a comment
    /// token whose data is the empty string. Switch to the bogus comment state
    /// (don't consume anything in the current state)."
    ///
    /// Whatever part of a literal was matched after `<!` becomes comment data.
    pub(super) fn handle_incorrectly_opened_comment_state(&mut self) {
        self.report(ParseError::IncorrectlyOpenedComment);
        self.start_bogus_comment_from_declaration();
    }

    /// `<![CDATA[` matched.
    ///
    /// "If there is an adjusted current node and it is not an element in the
    /// HTML namespace, then switch to the CDATA section state. Otherwise, this
    /// is a cdata-in-html-content parse error. Create a comment token whose
    /// data is the "[CDATA[" string. Switch to the bogus comment state."
    pub(super) fn handle_cdata_open_state(&mut self) {
        if self.cdata_allowed {
            self.buffer.truncate(self.text_mark);
            self.reconsume_in(State::CdataSection);
        } else {
            self.report(ParseError::CdataInHtmlContent);
            self.start_bogus_comment_from_declaration();
        }
    }

    /// Flush the text before `<!` and keep the characters after it as the
    /// start of a bogus comment.
    fn start_bogus_comment_from_declaration(&mut self) {
        let data = self.buffer.take_tail(self.text_mark + 2);
        self.begin_markup();
        self.buffer.append_str(&data);
        self.reconsume_in(State::BogusComment);
    }

    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    pub(super) fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>)"
            // "Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.switch_to(State::Data);
                self.emit_comment();
            }
            // "EOF"
            // "Emit the comment. Emit an end-of-file token."
            None => {
                self.emit_comment();
                self.emit_end_of_input();
            }
            Some('\0') => self.append_replacement_character(),
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    pub(super) fn handle_comment_start_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(State::CommentStartDash),
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is an abrupt-closing-of-empty-comment parse error. Switch to the data
            // state. Emit the current comment token."
            Some('>') => {
                self.report(ParseError::AbruptClosingOfEmptyComment);
                self.switch_to(State::Data);
                self.emit_comment();
            }
            _ => self.reconsume_in(State::Comment),
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    pub(super) fn handle_comment_start_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(State::CommentEnd),
            Some('>') => {
                self.report(ParseError::AbruptClosingOfEmptyComment);
                self.switch_to(State::Data);
                self.emit_comment();
            }
            None => self.eof_in_comment(),
            // "Append a U+002D HYPHEN-MINUS character (-) to the comment token's data.
            // Reconsume in the comment state."
            Some(_) => {
                self.buffer.append('-');
                self.reconsume_in(State::Comment);
            }
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    pub(super) fn handle_comment_state(&mut self) {
        match self.current_input_character {
            // "U+003C LESS-THAN SIGN (<)"
            // "Append the current input character to the comment token's data. Switch to
            // the comment less-than sign state."
            Some('<') => {
                self.buffer.append('<');
                self.switch_to(State::CommentLessThanSign);
            }
            Some('-') => self.switch_to(State::CommentEndDash),
            Some('\0') => self.append_replacement_character(),
            None => self.eof_in_comment(),
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    pub(super) fn handle_comment_less_than_sign_state(&mut self) {
        match self.current_input_character {
            Some('!') => {
                self.buffer.append('!');
                self.switch_to(State::CommentLessThanSignBang);
            }
            Some('<') => self.buffer.append('<'),
            _ => self.reconsume_in(State::Comment),
        }
    }

    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    pub(super) fn handle_comment_less_than_sign_bang_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(State::CommentLessThanSignBangDash),
            _ => self.reconsume_in(State::Comment),
        }
    }

    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    pub(super) fn handle_comment_less_than_sign_bang_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(State::CommentLessThanSignBangDashDash),
            _ => self.reconsume_in(State::CommentEndDash),
        }
    }

    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    pub(super) fn handle_comment_less_than_sign_bang_dash_dash_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>)", "EOF"
            // "Reconsume in the comment end state."
            Some('>') | None => self.reconsume_in(State::CommentEnd),
            // "Anything else"
            // "This is a nested-comment parse error. Reconsume in the comment end state."
            Some(_) => {
                self.report(ParseError::NestedComment);
                self.reconsume_in(State::CommentEnd);
            }
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    pub(super) fn handle_comment_end_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(State::CommentEnd),
            // A lone trailing dash is not part of the data.
            None => self.eof_in_comment(),
            Some(_) => {
                self.buffer.append('-');
                self.reconsume_in(State::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    pub(super) fn handle_comment_end_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(State::Data);
                self.emit_comment();
            }
            Some('!') => self.switch_to(State::CommentEndBang),
            // "Append a U+002D HYPHEN-MINUS character (-) to the comment token's data."
            Some('-') => self.buffer.append('-'),
            None => self.eof_in_comment(),
            // "Append two U+002D HYPHEN-MINUS characters (-) to the comment token's data.
            // Reconsume in the comment state."
            Some(_) => {
                self.buffer.append_str("--");
                self.reconsume_in(State::Comment);
            }
        }
    }

    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    pub(super) fn handle_comment_end_bang_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.buffer.append_str("--!");
                self.switch_to(State::CommentEndDash);
            }
            // "This is an incorrectly-closed-comment parse error. Switch to the data
            // state. Emit the current comment token."
            Some('>') => {
                self.report(ParseError::IncorrectlyClosedComment);
                self.switch_to(State::Data);
                self.emit_comment();
            }
            None => self.eof_in_comment(),
            Some(_) => {
                self.buffer.append_str("--!");
                self.reconsume_in(State::Comment);
            }
        }
    }

    /// "This is an eof-in-comment parse error. Emit the current comment token.
    /// Emit an end-of-file token."
    fn eof_in_comment(&mut self) {
        self.report(ParseError::EofInComment);
        self.emit_comment();
        self.emit_end_of_input();
    }

    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    pub(super) fn handle_cdata_section_state(&mut self) {
        match self.current_input_character {
            Some(']') => {
                self.buffer.append(']');
                self.switch_to(State::CdataSectionBracket);
            }
            // "EOF"
            // "This is an eof-in-cdata parse error. Emit an end-of-file token."
            None => {
                self.report(ParseError::EofInCdata);
                self.emit_end_of_input();
            }
            Some(c) => self.buffer.append(c),
        }
    }

    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    pub(super) fn handle_cdata_section_bracket_state(&mut self) {
        match self.current_input_character {
            Some(']') => {
                self.buffer.append(']');
                self.switch_to(State::CdataSectionEnd);
            }
            _ => self.reconsume_in(State::CdataSection),
        }
    }

    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    pub(super) fn handle_cdata_section_end_state(&mut self) {
        match self.current_input_character {
            // "Emit a U+005D RIGHT SQUARE BRACKET character token."
            Some(']') => self.buffer.append(']'),
            // "Switch to the data state." The two brackets were not content.
            Some('>') => {
                let end = self.buffer.position().saturating_sub(2);
                self.buffer.truncate(end);
                self.switch_to(State::Data);
            }
            _ => self.reconsume_in(State::CdataSection),
        }
    }
}
