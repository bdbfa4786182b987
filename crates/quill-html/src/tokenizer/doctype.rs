//! DOCTYPE states.
//!
//! [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
//! through [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state).
//!
//! The public and system identifier states are mirror images of each other
//! and share one handler per shape, parameterized by [`DoctypeField`].

use super::core::{DoctypeField, State, Tokenizer};
use super::errors::ParseError;
use super::input::ScalarSource;
use super::sink::TokenSink;

impl DoctypeField {
    const fn quoted_state(self, quote: char) -> State {
        match (self, quote) {
            (Self::Public, '"') => State::DoctypePublicIdentifierDoubleQuoted,
            (Self::Public, _) => State::DoctypePublicIdentifierSingleQuoted,
            (Self::System, '"') => State::DoctypeSystemIdentifierDoubleQuoted,
            (Self::System, _) => State::DoctypeSystemIdentifierSingleQuoted,
        }
    }

    const fn before_identifier_state(self) -> State {
        match self {
            Self::Public => State::BeforeDoctypePublicIdentifier,
            Self::System => State::BeforeDoctypeSystemIdentifier,
        }
    }

    const fn after_identifier_state(self) -> State {
        match self {
            Self::Public => State::AfterDoctypePublicIdentifier,
            Self::System => State::AfterDoctypeSystemIdentifier,
        }
    }

    const fn missing_whitespace_after_keyword(self) -> ParseError {
        match self {
            Self::Public => ParseError::MissingWhitespaceAfterDoctypePublicKeyword,
            Self::System => ParseError::MissingWhitespaceAfterDoctypeSystemKeyword,
        }
    }

    const fn missing_identifier(self) -> ParseError {
        match self {
            Self::Public => ParseError::MissingDoctypePublicIdentifier,
            Self::System => ParseError::MissingDoctypeSystemIdentifier,
        }
    }

    const fn missing_quote(self) -> ParseError {
        match self {
            Self::Public => ParseError::MissingQuoteBeforeDoctypePublicIdentifier,
            Self::System => ParseError::MissingQuoteBeforeDoctypeSystemIdentifier,
        }
    }

    const fn abrupt_identifier(self) -> ParseError {
        match self {
            Self::Public => ParseError::AbruptDoctypePublicIdentifier,
            Self::System => ParseError::AbruptDoctypeSystemIdentifier,
        }
    }
}

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// `<!DOCTYPE` matched: "Consume those characters and switch to the DOCTYPE state."
    pub(super) fn handle_doctype_open_state(&mut self) {
        self.begin_markup();
        self.create_doctype();
        self.reconsume_in(State::Doctype);
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    pub(super) fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => self.switch_to(State::BeforeDoctypeName),
            Some('>') => self.reconsume_in(State::BeforeDoctypeName),
            // "EOF"
            // "This is an eof-in-doctype parse error. Create a new DOCTYPE token. Set its
            // force-quirks flag to on. Emit the current token. Emit an end-of-file token."
            None => self.eof_in_doctype(),
            // "This is a missing-whitespace-before-doctype-name parse error. Reconsume in
            // the before DOCTYPE name state."
            Some(_) => {
                self.report(ParseError::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(State::BeforeDoctypeName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    pub(super) fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is a missing-doctype-name parse error. Create a new DOCTYPE token. Set
            // its force-quirks flag to on. Switch to the data state. Emit the current token."
            Some('>') => {
                self.report(ParseError::MissingDoctypeName);
                self.set_force_quirks();
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            None => self.eof_in_doctype(),
            // "Create a new DOCTYPE token. Set the token's name to the current input
            // character. Switch to the DOCTYPE name state."
            Some(_) => self.reconsume_in(State::DoctypeName),
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    pub(super) fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.finish_doctype_name();
                self.switch_to(State::AfterDoctypeName);
            }
            Some('>') => {
                self.finish_doctype_name();
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            Some(c) if c.is_ascii_uppercase() => self.buffer.append(c.to_ascii_lowercase()),
            Some('\0') => self.append_replacement_character(),
            None => {
                self.finish_doctype_name();
                self.eof_in_doctype();
            }
            Some(c) => self.buffer.append(c),
        }
    }

    fn finish_doctype_name(&mut self) {
        let name = self.buffer.take_string();
        if let Some(doctype) = self.current_doctype.as_mut() {
            doctype.name = Some(name);
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    pub(super) fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            None => self.eof_in_doctype(),
            // "If the six characters starting from the current input character are an
            // ASCII case-insensitive match for the word "PUBLIC", then consume those
            // characters and switch to the after DOCTYPE public keyword state."
            Some('p' | 'P') => self.match_sequence(
                "public",
                true,
                State::AfterDoctypePublicKeyword,
                State::DoctypeKeywordMismatch,
            ),
            Some('s' | 'S') => self.match_sequence(
                "system",
                true,
                State::AfterDoctypeSystemKeyword,
                State::DoctypeKeywordMismatch,
            ),
            Some(_) => self.reconsume_in(State::DoctypeKeywordMismatch),
        }
    }

    /// "Otherwise, this is an invalid-character-sequence-after-doctype-name
    /// parse error. Set the current DOCTYPE token's force-quirks flag to on.
    /// Reconsume in the bogus DOCTYPE state."
    pub(super) fn handle_doctype_keyword_mismatch_state(&mut self) {
        self.report(ParseError::InvalidCharacterSequenceAfterDoctypeName);
        self.set_force_quirks();
        self.buffer.clear();
        self.reconsume_in(State::BogusDoctype);
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    pub(super) fn handle_after_doctype_keyword_state(&mut self, field: DoctypeField) {
        // The matched keyword is not part of any field.
        self.buffer.clear();
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(field.before_identifier_state());
            }
            // "This is a missing-whitespace-after-doctype-public-keyword parse error. Set
            // the current DOCTYPE token's public identifier to the empty string (not
            // missing), then switch to the DOCTYPE public identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.report(field.missing_whitespace_after_keyword());
                self.switch_to(field.quoted_state(quote));
            }
            _ => self.handle_missing_doctype_identifier(field),
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    pub(super) fn handle_before_doctype_identifier_state(&mut self, field: DoctypeField) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(quote @ ('"' | '\'')) => self.switch_to(field.quoted_state(quote)),
            _ => self.handle_missing_doctype_identifier(field),
        }
    }

    /// The `>`, EOF and "anything else" entries shared by the keyword and
    /// before-identifier states.
    fn handle_missing_doctype_identifier(&mut self, field: DoctypeField) {
        match self.current_input_character {
            // "This is a missing-doctype-public-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data state. Emit the
            // current DOCTYPE token."
            Some('>') => {
                self.report(field.missing_identifier());
                self.set_force_quirks();
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            None => self.eof_in_doctype(),
            // "This is a missing-quote-before-doctype-public-identifier parse error. Set
            // the current DOCTYPE token's force-quirks flag to on. Reconsume in the bogus
            // DOCTYPE state."
            Some(_) => {
                self.report(field.missing_quote());
                self.set_force_quirks();
                self.reconsume_in(State::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// through [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    pub(super) fn handle_doctype_identifier_state(&mut self, quote: char, field: DoctypeField) {
        match self.current_input_character {
            Some(c) if c == quote => {
                self.finish_doctype_identifier(field);
                self.switch_to(field.after_identifier_state());
            }
            Some('\0') => self.append_replacement_character(),
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is an abrupt-doctype-public-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data state. Emit the
            // current DOCTYPE token."
            Some('>') => {
                self.report(field.abrupt_identifier());
                self.finish_doctype_identifier(field);
                self.set_force_quirks();
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            None => {
                self.finish_doctype_identifier(field);
                self.eof_in_doctype();
            }
            Some(c) => self.buffer.append(c),
        }
    }

    fn finish_doctype_identifier(&mut self, field: DoctypeField) {
        let identifier = self.buffer.take_string();
        if let Some(doctype) = self.current_doctype.as_mut() {
            match field {
                DoctypeField::Public => doctype.public_identifier = Some(identifier),
                DoctypeField::System => doctype.system_identifier = Some(identifier),
            }
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    pub(super) fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(State::BetweenDoctypePublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            // "This is a missing-whitespace-between-doctype-public-and-system-identifiers
            // parse error."
            Some(quote @ ('"' | '\'')) => {
                self.report(ParseError::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers);
                self.switch_to(DoctypeField::System.quoted_state(quote));
            }
            _ => self.handle_missing_doctype_identifier(DoctypeField::System),
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    pub(super) fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            Some(quote @ ('"' | '\'')) => {
                self.switch_to(DoctypeField::System.quoted_state(quote));
            }
            _ => self.handle_missing_doctype_identifier(DoctypeField::System),
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    pub(super) fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            None => self.eof_in_doctype(),
            // "This is an unexpected-character-after-doctype-system-identifier parse
            // error. Reconsume in the bogus DOCTYPE state. (This does not set the current
            // DOCTYPE token's force-quirks flag to on.)"
            Some(_) => {
                self.report(ParseError::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.reconsume_in(State::BogusDoctype);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    pub(super) fn handle_bogus_doctype_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(State::Data);
                self.emit_doctype();
            }
            // "This is an unexpected-null-character parse error. Ignore the character."
            Some('\0') => self.report(ParseError::UnexpectedNullCharacter),
            // "EOF"
            // "Emit the DOCTYPE token. Emit an end-of-file token."
            None => {
                self.emit_doctype();
                self.emit_end_of_input();
            }
            Some(_) => {}
        }
    }
}
