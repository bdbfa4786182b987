//! The tokenizer's scratch buffer.
//!
//! In text states the buffer holds character data that has not been emitted
//! yet. In markup states it holds the field being accumulated (a tag name, an
//! attribute value, comment data, ...). Positions are counted in scalar values
//! and double as backtrack marks.

/// A growable sequence of scalar values, reused across tokens.
#[derive(Debug, Default, Clone)]
pub struct ScalarBuffer {
    scalars: Vec<char>,
}

impl ScalarBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scalars: Vec::new(),
        }
    }

    /// Append one scalar value.
    pub fn append(&mut self, c: char) {
        self.scalars.push(c);
    }

    /// Append every scalar of `s`.
    pub fn append_str(&mut self, s: &str) {
        self.scalars.extend(s.chars());
    }

    /// Number of scalars appended and not yet taken.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.scalars.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// Extract the accumulated content and reset the position to zero.
    /// The allocation is kept for the next token.
    pub fn take_string(&mut self) -> String {
        let s = self.scalars.iter().collect();
        self.scalars.clear();
        s
    }

    /// Extract everything after `mark` and truncate the buffer to `mark`.
    pub fn take_tail(&mut self, mark: usize) -> String {
        let mark = mark.min(self.scalars.len());
        let s = self.scalars[mark..].iter().collect();
        self.scalars.truncate(mark);
        s
    }

    /// Discard everything after `mark`.
    pub fn truncate(&mut self, mark: usize) {
        self.scalars.truncate(mark);
    }

    /// Discard all pending content.
    pub fn clear(&mut self) {
        self.scalars.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_string_resets_position() {
        let mut buffer = ScalarBuffer::new();
        buffer.append('a');
        buffer.append_str("bç");
        assert_eq!(buffer.position(), 3);
        assert_eq!(buffer.take_string(), "abç");
        assert_eq!(buffer.position(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_marks_count_scalars_not_bytes() {
        let mut buffer = ScalarBuffer::new();
        buffer.append_str("é<");
        let mark = buffer.position();
        buffer.append_str("/tïtle");
        assert_eq!(buffer.take_tail(mark), "/tïtle");
        assert_eq!(buffer.take_string(), "é<");
    }

    #[test]
    fn test_truncate_to_mark() {
        let mut buffer = ScalarBuffer::new();
        buffer.append_str("text");
        let mark = buffer.position();
        buffer.append_str("&amp");
        buffer.truncate(mark);
        buffer.append('&');
        assert_eq!(buffer.take_string(), "text&");
    }

    #[test]
    fn test_take_tail_past_end_is_empty() {
        let mut buffer = ScalarBuffer::new();
        buffer.append_str("ab");
        assert_eq!(buffer.take_tail(5), "");
        assert_eq!(buffer.position(), 2);
    }
}
