//! Where tokens and parse errors go.

use quill_common::warning::warn_once;

use super::core::Tokenizer;
use super::errors::{ParseError, TokenizerError};
use super::input::StrSource;
use super::options::TokenizerOptions;
use super::token::Token;

/// Receives the tokenizer's output.
pub trait TokenSink {
    /// Called exactly once per completed token, in input order.
    fn emit(&mut self, token: Token);

    /// Called for each parse error. Tokenization continues afterwards.
    ///
    /// The default logs each distinct error once.
    fn error(&mut self, error: ParseError) {
        let name: &'static str = error.into();
        warn_once("Tokenizer", name);
    }
}

/// A sink that keeps everything it is given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenCollector {
    /// Tokens in emission order.
    pub tokens: Vec<Token>,
    /// Parse errors in the order they were reported.
    pub errors: Vec<ParseError>,
}

impl TokenSink for TokenCollector {
    fn emit(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn error(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}

/// Everything produced by tokenizing one document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenStream {
    /// Tokens in emission order, ending with [`Token::EndOfInput`].
    pub tokens: Vec<Token>,
    /// Parse errors in the order they were reported.
    pub errors: Vec<ParseError>,
}

impl From<TokenCollector> for TokenStream {
    fn from(collector: TokenCollector) -> Self {
        Self {
            tokens: collector.tokens,
            errors: collector.errors,
        }
    }
}

/// Tokenize `input` with default options.
///
/// # Example
/// ```ignore
/// let stream = tokenize("<p>Hi</p>")?;
/// assert_eq!(stream.tokens.len(), 4);
/// ```
///
/// # Errors
///
/// See [`Tokenizer::pump`]. Malformed markup is reported in
/// [`TokenStream::errors`], never as an `Err`.
pub fn tokenize(input: &str) -> Result<TokenStream, TokenizerError> {
    tokenize_with(input, &TokenizerOptions::default())
}

/// Tokenize `input` with the given options.
///
/// # Errors
///
/// See [`tokenize`].
pub fn tokenize_with(
    input: &str,
    options: &TokenizerOptions,
) -> Result<TokenStream, TokenizerError> {
    let mut tokenizer =
        Tokenizer::with_options(StrSource::new(input), TokenCollector::default(), options);
    tokenizer.run()?;
    Ok(tokenizer.into_sink().into())
}
