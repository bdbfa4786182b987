//! Scalar value sources.
//!
//! [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)

use std::iter::Fuse;
use std::str::Chars;

/// A pull-based supplier of Unicode scalar values.
///
/// Implementations must be monotonic and must keep returning `None` once the
/// input is exhausted.
pub trait ScalarSource {
    /// Returns the next scalar value, or `None` at end of stream.
    fn next_scalar(&mut self) -> Option<char>;
}

/// A source over a string slice.
///
/// "Before the tokenization stage, the input stream must be preprocessed by
/// normalizing newlines." Every U+000D CR U+000A LF pair becomes a single LF,
/// and every remaining CR becomes LF.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
    pending: Option<char>,
}

impl<'a> StrSource<'a> {
    /// Create a source that yields the scalars of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            pending: None,
        }
    }
}

impl ScalarSource for StrSource<'_> {
    fn next_scalar(&mut self) -> Option<char> {
        let c = match self.pending.take() {
            Some(c) => c,
            None => self.chars.next()?,
        };
        if c != '\r' {
            return Some(c);
        }
        match self.chars.next() {
            Some('\n') | None => {}
            Some(other) => self.pending = Some(other),
        }
        Some('\n')
    }
}

/// A source over any `char` iterator. No newline normalization is applied.
#[derive(Debug, Clone)]
pub struct CharSource<I: Iterator<Item = char>> {
    iter: Fuse<I>,
}

impl<I: Iterator<Item = char>> CharSource<I> {
    /// Wrap an iterator. The iterator is fused so exhaustion is permanent.
    pub fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I: Iterator<Item = char>> ScalarSource for CharSource<I> {
    fn next_scalar(&mut self) -> Option<char> {
        self.iter.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut source: impl ScalarSource) -> String {
        let mut out = String::new();
        while let Some(c) = source.next_scalar() {
            out.push(c);
        }
        out
    }

    #[test]
    fn test_crlf_is_normalized() {
        assert_eq!(drain(StrSource::new("a\r\nb\rc\n\r")), "a\nb\nc\n\n");
    }

    #[test]
    fn test_lone_cr_followed_by_cr() {
        assert_eq!(drain(StrSource::new("\r\r\n")), "\n\n");
    }

    #[test]
    fn test_exhausted_source_stays_exhausted() {
        let mut source = StrSource::new("x");
        assert_eq!(source.next_scalar(), Some('x'));
        assert_eq!(source.next_scalar(), None);
        assert_eq!(source.next_scalar(), None);

        let mut source = CharSource::new("y".chars());
        assert_eq!(source.next_scalar(), Some('y'));
        assert_eq!(source.next_scalar(), None);
        assert_eq!(source.next_scalar(), None);
    }

    #[test]
    fn test_char_source_keeps_carriage_returns() {
        assert_eq!(drain(CharSource::new("a\r\nb".chars())), "a\r\nb");
    }
}
