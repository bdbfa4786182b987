//! Character reference states.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! The "temporary buffer" of the standard is the tail of the tokenizer's
//! buffer starting at the `&`, whose position is kept in `ref_mark`. Code
//! points that turn out not to form a reference are therefore already in
//! place as text or attribute value; a resolved reference truncates the
//! buffer back to the `&` and appends the replacement.

use super::core::{ReturnState, State, Tokenizer};
use super::errors::{ParseError, TokenizerError};
use super::input::ScalarSource;
use super::sink::TokenSink;

/// Numeric references at or above this value are reported as outside the
/// Unicode range; accumulation saturates here so long digit runs cannot overflow.
const CODE_POINT_LIMIT: u32 = 0x0011_0000;

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// "If the number is one of the numbers in the first column of the following
/// table, then find the row with that number in the first column, and set the
/// character reference code to the number in the second column of that row."
#[must_use]
pub const fn c1_replacement(code: u32) -> Option<u32> {
    let replacement = match code {
        0x80 => 0x20AC, // EURO SIGN (€)
        0x82 => 0x201A, // SINGLE LOW-9 QUOTATION MARK (‚)
        0x83 => 0x0192, // LATIN SMALL LETTER F WITH HOOK (ƒ)
        0x84 => 0x201E, // DOUBLE LOW-9 QUOTATION MARK („)
        0x85 => 0x2026, // HORIZONTAL ELLIPSIS (…)
        0x86 => 0x2020, // DAGGER (†)
        0x87 => 0x2021, // DOUBLE DAGGER (‡)
        0x88 => 0x02C6, // MODIFIER LETTER CIRCUMFLEX ACCENT (ˆ)
        0x89 => 0x2030, // PER MILLE SIGN (‰)
        0x8A => 0x0160, // LATIN CAPITAL LETTER S WITH CARON (Š)
        0x8B => 0x2039, // SINGLE LEFT-POINTING ANGLE QUOTATION MARK (‹)
        0x8C => 0x0152, // LATIN CAPITAL LIGATURE OE (Œ)
        0x8E => 0x017D, // LATIN CAPITAL LETTER Z WITH CARON (Ž)
        0x91 => 0x2018, // LEFT SINGLE QUOTATION MARK (‘)
        0x92 => 0x2019, // RIGHT SINGLE QUOTATION MARK (’)
        0x93 => 0x201C, // LEFT DOUBLE QUOTATION MARK (“)
        0x94 => 0x201D, // RIGHT DOUBLE QUOTATION MARK (”)
        0x95 => 0x2022, // BULLET (•)
        0x96 => 0x2013, // EN DASH (–)
        0x97 => 0x2014, // EM DASH (—)
        0x98 => 0x02DC, // SMALL TILDE (˜)
        0x99 => 0x2122, // TRADE MARK SIGN (™)
        0x9A => 0x0161, // LATIN SMALL LETTER S WITH CARON (š)
        0x9B => 0x203A, // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK (›)
        0x9C => 0x0153, // LATIN SMALL LIGATURE OE (œ)
        0x9E => 0x017E, // LATIN SMALL LETTER Z WITH CARON (ž)
        0x9F => 0x0178, // LATIN CAPITAL LETTER Y WITH DIAERESIS (Ÿ)
        _ => return None,
    };
    Some(replacement)
}

/// [Infra: noncharacter](https://infra.spec.whatwg.org/#noncharacter)
///
/// "A noncharacter is a code point that is in the range U+FDD0 to U+FDEF,
/// inclusive, or U+FFFE, U+FFFF, U+1FFFE, U+1FFFF, ..., U+10FFFE, or U+10FFFF."
const fn is_noncharacter(code: u32) -> bool {
    matches!(code, 0xFDD0..=0xFDEF) || (code & 0xFFFE == 0xFFFE && code < CODE_POINT_LIMIT)
}

/// [Infra: control](https://infra.spec.whatwg.org/#control)
///
/// "A C0 control or a code point in the range U+007F DELETE to U+009F
/// APPLICATION PROGRAM COMMAND, inclusive."
const fn is_control(code: u32) -> bool {
    matches!(code, 0x00..=0x1F | 0x7F..=0x9F)
}

const fn is_ascii_whitespace(code: u32) -> bool {
    matches!(code, 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// "Set the return state to the ... state. Switch to the character reference state."
    pub(super) fn start_character_reference(&mut self, return_state: ReturnState) {
        self.return_state = Some(return_state);
        // "Set the temporary buffer to the empty string. Append a U+0026
        // AMPERSAND (&) character to the temporary buffer."
        self.ref_mark = self.buffer.position();
        self.buffer.append('&');
        self.switch_to(State::CharacterReference);
    }

    /// "If the character reference was consumed as part of an attribute"
    fn is_consumed_as_part_of_attribute(&self) -> bool {
        self.return_state.is_some_and(|rs| rs.in_attribute)
    }

    /// "Switch to the return state" / "Reconsume in the return state"
    fn resume_return_state(&mut self, reconsume: bool) -> Result<(), TokenizerError> {
        let ReturnState { state, .. } = self
            .return_state
            .take()
            .ok_or(TokenizerError::MissingReturnState { state: self.state })?;
        if reconsume {
            self.reconsume_in(state);
        } else {
            self.switch_to(state);
        }
        Ok(())
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) -> Result<(), TokenizerError> {
        match self.current_input_character {
            // "ASCII alphanumeric"
            // "Reconsume in the named character reference state."
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(State::NamedCharacterReference);
                Ok(())
            }
            // "U+0023 NUMBER SIGN (#)"
            // "Append the current input character to the temporary buffer. Switch to
            // the numeric character reference state."
            Some('#') => {
                self.buffer.append('#');
                self.switch_to(State::NumericCharacterReference);
                Ok(())
            }
            // "Anything else"
            // "Flush code points consumed as a character reference. Reconsume in the
            // return state."
            _ => self.resume_return_state(true),
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    pub(super) fn handle_named_character_reference_state(&mut self) -> Result<(), TokenizerError> {
        // "Consume the maximum number of characters possible, where the consumed
        // characters are one of the identifiers in the first column of the named
        // character references table. Append each character to the temporary
        // buffer when it's consumed."
        //
        // Characters are consumed while the table still has a name starting with
        // them. Those past the longest match stay in the buffer as text.
        let mut name = String::new();
        let mut longest_match: Option<(usize, String)> = None;

        while let Some(c) = self.current_input_character {
            name.push(c);
            if !self.references.has_prefix(&name) {
                let _ = name.pop();
                break;
            }
            self.buffer.append(c);
            if let Some(replacement) = self.references.lookup(&name) {
                longest_match = Some((name.len(), replacement.to_owned()));
            }
            self.current_input_character = self.consume();
            if c == ';' {
                break;
            }
        }

        // "Otherwise: Flush code points consumed as a character reference.
        // Switch to the ambiguous ampersand state."
        let Some((length, replacement)) = longest_match else {
            self.reconsume_in(State::AmbiguousAmpersand);
            return Ok(());
        };

        let (matched, rest) = name.split_at(length);
        let ends_with_semicolon = matched.ends_with(';');
        let next_input_character = rest.chars().next().or(self.current_input_character);

        // "If the character reference was consumed as part of an attribute, and
        // the last character matched is not a U+003B SEMICOLON character (;), and
        // the next input character is either a U+003D EQUALS SIGN character (=) or
        // an ASCII alphanumeric, then, for historical reasons, flush code points
        // consumed as a character reference and switch to the return state."
        if !ends_with_semicolon
            && self.is_consumed_as_part_of_attribute()
            && next_input_character.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric())
        {
            return self.resume_return_state(true);
        }

        // "If the last character matched is not a U+003B SEMICOLON character (;),
        // then this is a missing-semicolon-after-character-reference parse error."
        if !ends_with_semicolon {
            self.report(ParseError::MissingSemicolonAfterCharacterReference);
        }

        // "Set the temporary buffer to the empty string. Append one or two
        // characters corresponding to the character reference name to the
        // temporary buffer. Flush code points consumed as a character reference."
        self.buffer.truncate(self.ref_mark);
        self.buffer.append_str(&replacement);
        self.buffer.append_str(rest);
        self.resume_return_state(true)
    }

    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    pub(super) fn handle_ambiguous_ampersand_state(&mut self) -> Result<(), TokenizerError> {
        match self.current_input_character {
            // "ASCII alphanumeric"
            // "If the character reference was consumed as part of an attribute, then
            // append the current input character to the current attribute's value.
            // Otherwise, emit the current input character as a character token."
            Some(c) if c.is_ascii_alphanumeric() => {
                self.buffer.append(c);
                Ok(())
            }
            // "U+003B SEMICOLON (;)"
            // "This is an unknown-named-character-reference parse error. Reconsume in
            // the return state."
            Some(';') => {
                self.report(ParseError::UnknownNamedCharacterReference);
                self.resume_return_state(true)
            }
            _ => self.resume_return_state(true),
        }
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;
        match self.current_input_character {
            // "U+0078 LATIN SMALL LETTER X", "U+0058 LATIN CAPITAL LETTER X"
            // "Append the current input character to the temporary buffer. Switch to
            // the hexadecimal character reference start state."
            Some(c @ ('x' | 'X')) => {
                self.buffer.append(c);
                self.switch_to(State::HexadecimalCharacterReferenceStart);
            }
            // "Anything else"
            // "Reconsume in the decimal character reference start state."
            _ => self.reconsume_in(State::DecimalCharacterReferenceStart),
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    pub(super) fn handle_numeric_character_reference_start_state(
        &mut self,
    ) -> Result<(), TokenizerError> {
        let (radix, digits_state) = if self.state == State::HexadecimalCharacterReferenceStart {
            (16, State::HexadecimalCharacterReference)
        } else {
            (10, State::DecimalCharacterReference)
        };
        match self.current_input_character {
            Some(c) if c.is_digit(radix) => {
                self.reconsume_in(digits_state);
                Ok(())
            }
            // "This is an absence-of-digits-in-numeric-character-reference parse error.
            // Flush code points consumed as a character reference. Reconsume in the
            // return state."
            _ => {
                self.report(ParseError::AbsenceOfDigitsInNumericCharacterReference);
                self.resume_return_state(true)
            }
        }
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    pub(super) fn handle_numeric_character_reference_digits_state(
        &mut self,
        radix: u32,
    ) -> Result<(), TokenizerError> {
        // "Multiply the character reference code by 16 (or 10). Add a numeric
        // version of the current input character to the character reference code."
        if let Some(digit) = self.current_input_character.and_then(|c| c.to_digit(radix)) {
            self.character_reference_code = self
                .character_reference_code
                .saturating_mul(radix)
                .saturating_add(digit)
                .min(CODE_POINT_LIMIT);
            return Ok(());
        }

        match self.current_input_character {
            // "U+003B SEMICOLON"
            // "Switch to the numeric character reference end state."
            Some(';') => {
                self.finish_numeric_reference();
                self.resume_return_state(false)
            }
            // "Anything else"
            // "This is a missing-semicolon-after-character-reference parse error.
            // Reconsume in the numeric character reference end state."
            _ => {
                self.report(ParseError::MissingSemicolonAfterCharacterReference);
                self.finish_numeric_reference();
                self.resume_return_state(true)
            }
        }
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// Replaces everything from the `&` with the referenced character.
    fn finish_numeric_reference(&mut self) {
        let code = self.character_reference_code;
        let resolved = if code == 0 {
            // "If the number is 0x00, then this is a null-character-reference parse
            // error. Set the character reference code to 0xFFFD."
            self.report(ParseError::NullCharacterReference);
            '\u{FFFD}'
        } else if code >= CODE_POINT_LIMIT {
            // "If the number is greater than 0x10FFFF, then this is a
            // character-reference-outside-unicode-range parse error."
            self.report(ParseError::CharacterReferenceOutsideUnicodeRange);
            '\u{FFFD}'
        } else if (0xD800..=0xDFFF).contains(&code) {
            // "If the number is a surrogate, then this is a
            // surrogate-character-reference parse error."
            self.report(ParseError::SurrogateCharacterReference);
            '\u{FFFD}'
        } else {
            // "If the number is a noncharacter, then this is a
            // noncharacter-character-reference parse error."
            if is_noncharacter(code) {
                self.report(ParseError::NoncharacterCharacterReference);
            }
            // "If the number is 0x0D, or a control that's not ASCII whitespace, then
            // this is a control-character-reference parse error."
            let code = if code == 0x0D || (is_control(code) && !is_ascii_whitespace(code)) {
                self.report(ParseError::ControlCharacterReference);
                c1_replacement(code).unwrap_or(code)
            } else {
                code
            };
            char::from_u32(code).unwrap_or('\u{FFFD}')
        };

        self.buffer.truncate(self.ref_mark);
        self.buffer.append(resolved);
    }
}
