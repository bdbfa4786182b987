//! Helper methods for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains the operations the state handlers are written in terms of:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input handling ("Consume the next input character")
//! - Token emission, including the text mode switch after raw text start tags
//! - Attribute bookkeeping and duplicate detection
//! - Parse error reporting

use super::core::{DoctypeInProgress, LOG_TARGET, State, TagInProgress, TagKind, Tokenizer};
use super::errors::ParseError;
use super::input::ScalarSource;
use super::sink::TokenSink;
use super::token::{Attribute, Token};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: State) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The current character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: State) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
    ///
    /// "Consume the next input character". A leading U+FEFF is skipped when
    /// the tokenizer was asked to discard the byte order mark.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.source.next_scalar();
        if self.at_start {
            self.at_start = false;
            if self.discard_bom && c == Some('\u{FEFF}') {
                return self.source.next_scalar();
            }
        }
        c
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// The tokenizer's whitespace: tab, LF, FF and space. CR never reaches
    /// the tokenizer after input preprocessing.
    pub(super) const fn is_whitespace_char(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\x0C' | ' ')
    }

    /// "This is an unexpected-null-character parse error. Append a U+FFFD
    /// REPLACEMENT CHARACTER character ..."
    pub(super) fn append_replacement_character(&mut self) {
        self.report(ParseError::UnexpectedNullCharacter);
        self.buffer.append('\u{FFFD}');
    }

    /// Record a `<` that may open markup and keep it as text for now.
    pub(super) fn mark_less_than_sign(&mut self, next: State) {
        self.text_mark = self.buffer.position();
        self.buffer.append('<');
        self.switch_to(next);
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// Hand a finished token to the sink.
    pub(super) fn emit(&mut self, token: Token) {
        log::debug!(target: LOG_TARGET, "emit {token:?}");
        self.sink.emit(token);
        self.emitted = true;
    }

    /// Emit the pending character data as one run, if there is any.
    pub(super) fn flush_characters(&mut self) {
        if !self.buffer.is_empty() {
            let data = self.buffer.take_string();
            self.emit(Token::Characters { data });
        }
    }

    /// "Emit an end-of-file token."
    ///
    /// Pending character data goes out first.
    pub(super) fn emit_end_of_input(&mut self) {
        self.flush_characters();
        self.emit(Token::EndOfInput);
        self.finished = true;
    }

    /// Markup has definitely started at the `<` recorded in `text_mark`:
    /// drop the markup characters kept so far and emit the text before them.
    pub(super) fn begin_markup(&mut self) {
        self.buffer.truncate(self.text_mark);
        self.flush_characters();
    }

    /// [§ 13.2.6.2 Parsing elements that contain only text](https://html.spec.whatwg.org/multipage/parsing.html#parsing-elements-that-contain-only-text)
    ///
    /// The tokenizer state a tree builder would select after inserting `name`.
    fn text_state_after(&self, name: &str) -> Option<State> {
        match name {
            // "Follow the generic RCDATA element parsing algorithm."
            "title" | "textarea" => Some(State::Rcdata),
            // "Follow the generic raw text element parsing algorithm."
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(State::Rawtext),
            "noscript" if self.scripting_enabled => Some(State::Rawtext),
            // "Switch the tokenizer to the script data state."
            "script" => Some(State::ScriptData),
            // "Switch the tokenizer to the PLAINTEXT state."
            "plaintext" => Some(State::Plaintext),
            _ => None,
        }
    }

    /// "Emit the current tag token."
    ///
    /// Leaves the tokenizer in the data state, or in the text state the
    /// start tag calls for when text state switching is on.
    pub(super) fn emit_current_tag(&mut self) {
        self.state = State::Data;
        let Some(tag) = self.current_tag.take() else {
            return;
        };

        match tag.kind {
            TagKind::Start => {
                if self.switch_text_states
                    && let Some(next) = self.text_state_after(&tag.name)
                {
                    self.state = next;
                }
                self.last_start_tag = Some(tag.name.clone());
                self.emit(Token::StartTag {
                    name: tag.name,
                    self_closing: tag.self_closing,
                    attributes: tag.attributes,
                });
            }
            TagKind::End => {
                // "When an end tag token is emitted with attributes, that is an
                // end-tag-with-attributes parse error."
                if !tag.attributes.is_empty() {
                    self.report(ParseError::EndTagWithAttributes);
                }
                // "When an end tag token is emitted with its self-closing flag
                // set, that is an end-tag-with-trailing-solidus parse error."
                if tag.self_closing {
                    self.report(ParseError::EndTagWithTrailingSolidus);
                }
                self.emit(Token::EndTag {
                    name: tag.name,
                    attributes: tag.attributes,
                });
            }
        }
    }

    /// Emit the comment whose data is in the buffer.
    pub(super) fn emit_comment(&mut self) {
        let data = self.buffer.take_string();
        self.emit(Token::Comment { data });
    }

    /// Emit the current DOCTYPE token.
    pub(super) fn emit_doctype(&mut self) {
        let doctype = self.current_doctype.take().unwrap_or_default();
        self.buffer.clear();
        self.emit(Token::Doctype {
            name: doctype.name,
            public_identifier: doctype.public_identifier,
            system_identifier: doctype.system_identifier,
            force_quirks: doctype.force_quirks,
        });
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    pub(super) fn set_force_quirks(&mut self) {
        if let Some(doctype) = self.current_doctype.as_mut() {
            doctype.force_quirks = true;
        }
    }

    /// Start a fresh DOCTYPE token.
    pub(super) fn create_doctype(&mut self) {
        self.current_doctype = Some(DoctypeInProgress::default());
    }

    /// "This is an eof-in-doctype parse error. Set the current DOCTYPE token's
    /// force-quirks flag to on. Emit the current DOCTYPE token. Emit an
    /// end-of-file token."
    pub(super) fn eof_in_doctype(&mut self) {
        self.report(ParseError::EofInDoctype);
        self.set_force_quirks();
        self.emit_doctype();
        self.emit_end_of_input();
    }
}

// =============================================================================
// Tag and Attribute Helpers
// =============================================================================

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// "Create a new start tag token" / "Create a new end tag token"
    pub(super) fn create_tag(&mut self, kind: TagKind) {
        self.current_tag = Some(TagInProgress::new(kind));
    }

    /// Move the tag name out of the buffer into the current tag.
    pub(super) fn finish_tag_name(&mut self) {
        let name = self.buffer.take_string();
        if let Some(tag) = self.current_tag.as_mut() {
            tag.name = name;
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state (and before
    /// emitting the tag token, if appropriate), the complete attribute's name
    /// must be compared to the other attributes on the same token; if there is
    /// already an attribute on the token with the exact same name, then this is
    /// a duplicate-attribute parse error and the new attribute must be removed
    /// from the token."
    pub(super) fn finish_attribute_name(&mut self) {
        let name = self.buffer.take_string();
        let duplicate = self.current_tag.as_mut().is_some_and(|tag| {
            let duplicate = tag.attributes.iter().any(|attr| attr.name == name);
            tag.attribute_dropped = duplicate;
            if !duplicate {
                tag.attributes.push(Attribute::new(name, None));
            }
            duplicate
        });
        if duplicate {
            self.report(ParseError::DuplicateAttribute);
        }
    }

    /// Move the attribute value out of the buffer into the attribute most
    /// recently added. Values of dropped duplicates are discarded.
    pub(super) fn finish_attribute_value(&mut self) {
        let value = self.buffer.take_string();
        if let Some(attr) = self
            .current_tag
            .as_mut()
            .filter(|tag| !tag.attribute_dropped)
            .and_then(|tag| tag.attributes.last_mut())
        {
            attr.value = Some(value);
        }
    }

    /// "This is an eof-in-tag parse error. Emit an end-of-file token."
    ///
    /// The unfinished tag is never emitted.
    pub(super) fn eof_in_tag(&mut self) {
        self.report(ParseError::EofInTag);
        self.current_tag = None;
        self.buffer.clear();
        self.emit_end_of_input();
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Parse errors in HTML are not fatal: the sink is told and tokenization continues.
    pub(super) fn report(&mut self, error: ParseError) {
        log::trace!(target: LOG_TARGET, "{error} in {} state", self.state);
        self.sink.error(error);
    }
}
