//! Literal sequence matching.
//!
//! Several states need to know whether the next few characters spell a given
//! word: `--` and `DOCTYPE` after `<!`, `PUBLIC` after a DOCTYPE name, the
//! last start tag name after `</` in text. Instead of peeking ahead in the
//! input, the tokenizer arms a [`SequenceMatch`] and enters
//! [`State::MatchSequence`], which consumes one character at a time and keeps
//! every character it consumes in the buffer. A caller whose literal did not
//! match therefore still has the consumed text available.

use super::core::{State, Tokenizer};
use super::errors::TokenizerError;
use super::input::ScalarSource;
use super::sink::TokenSink;

/// Progress of a [`SequenceMatch`] after one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStep {
    /// The character matched and more of the literal remains.
    Advanced,
    /// The character matched the last scalar of the literal.
    Complete,
    /// The character does not continue the literal.
    Mismatch,
}

/// An in-progress match of one literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceMatch {
    /// The literal to match. ASCII lower case when matching case-insensitively.
    pub literal: Vec<char>,
    /// Number of scalars of `literal` matched so far.
    pub index: usize,
    /// Compare ASCII-case-insensitively.
    pub case_insensitive: bool,
    /// State switched to after a full match. The next character is consumed fresh.
    pub on_match: State,
    /// State the first mismatching character is reconsumed in.
    pub on_mismatch: State,
}

impl SequenceMatch {
    /// Arm a match of `literal`.
    #[must_use]
    pub fn new(literal: &str, case_insensitive: bool, on_match: State, on_mismatch: State) -> Self {
        let literal = if case_insensitive {
            literal.chars().map(|c| c.to_ascii_lowercase()).collect()
        } else {
            literal.chars().collect()
        };
        Self {
            literal,
            index: 0,
            case_insensitive,
            on_match,
            on_mismatch,
        }
    }

    /// Feed one character. End of input never matches.
    pub fn step(&mut self, c: Option<char>) -> MatchStep {
        let Some(c) = c else {
            return MatchStep::Mismatch;
        };
        let c = if self.case_insensitive {
            c.to_ascii_lowercase()
        } else {
            c
        };
        if self.literal.get(self.index) != Some(&c) {
            return MatchStep::Mismatch;
        }
        self.index += 1;
        if self.is_complete() {
            MatchStep::Complete
        } else {
            MatchStep::Advanced
        }
    }

    /// Returns true once every scalar of the literal has matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.index >= self.literal.len()
    }
}

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// Start matching `literal` at the current input character.
    pub(super) fn match_sequence(
        &mut self,
        literal: &str,
        case_insensitive: bool,
        on_match: State,
        on_mismatch: State,
    ) {
        self.sequence = Some(SequenceMatch::new(
            literal,
            case_insensitive,
            on_match,
            on_mismatch,
        ));
        self.reconsume_in(State::MatchSequence);
    }

    /// Consume characters until the armed literal is matched or refuted.
    /// Matched characters are appended to the buffer in their original case.
    pub(super) fn handle_match_sequence_state(&mut self) -> Result<(), TokenizerError> {
        let mut sequence = self
            .sequence
            .take()
            .ok_or(TokenizerError::NoSequenceMatch { state: self.state })?;

        if sequence.is_complete() {
            self.reconsume_in(sequence.on_match);
            return Ok(());
        }

        loop {
            match sequence.step(self.current_input_character) {
                MatchStep::Advanced => {
                    if let Some(c) = self.current_input_character {
                        self.buffer.append(c);
                    }
                    self.current_input_character = self.consume();
                }
                MatchStep::Complete => {
                    if let Some(c) = self.current_input_character {
                        self.buffer.append(c);
                    }
                    self.switch_to(sequence.on_match);
                    return Ok(());
                }
                MatchStep::Mismatch => {
                    self.reconsume_in(sequence.on_mismatch);
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(sequence: &mut SequenceMatch, input: &str) -> Vec<MatchStep> {
        input.chars().map(|c| sequence.step(Some(c))).collect()
    }

    #[test]
    fn test_case_sensitive_match() {
        let mut sequence =
            SequenceMatch::new("--", false, State::CommentOpen, State::IncorrectlyOpenedComment);
        assert_eq!(
            feed(&mut sequence, "--"),
            vec![MatchStep::Advanced, MatchStep::Complete]
        );
        assert!(sequence.is_complete());
    }

    #[test]
    fn test_case_insensitive_match() {
        let mut sequence = SequenceMatch::new(
            "DocType",
            true,
            State::DoctypeOpen,
            State::IncorrectlyOpenedComment,
        );
        assert_eq!(sequence.literal, "doctype".chars().collect::<Vec<_>>());
        let steps = feed(&mut sequence, "DOCTYPE");
        assert_eq!(steps.last(), Some(&MatchStep::Complete));
    }

    #[test]
    fn test_case_sensitive_rejects_other_case() {
        let mut sequence =
            SequenceMatch::new("[CDATA[", false, State::CdataOpen, State::IncorrectlyOpenedComment);
        assert_eq!(
            feed(&mut sequence, "[cd"),
            vec![MatchStep::Advanced, MatchStep::Mismatch, MatchStep::Mismatch]
        );
        assert_eq!(sequence.index, 1);
    }

    #[test]
    fn test_end_of_input_is_a_mismatch() {
        let mut sequence = SequenceMatch::new(
            "public",
            true,
            State::AfterDoctypePublicKeyword,
            State::DoctypeKeywordMismatch,
        );
        assert_eq!(sequence.step(Some('p')), MatchStep::Advanced);
        assert_eq!(sequence.step(None), MatchStep::Mismatch);
        assert!(!sequence.is_complete());
    }
}
