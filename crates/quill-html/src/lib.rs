//! HTML tokenizer for the Quill toolkit.
//!
//! # Scope
//!
//! This crate implements the **HTML Tokenizer**
//! ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)):
//! - Data, RCDATA, RAWTEXT, PLAINTEXT and all script data states (escaped and double escaped)
//! - Tag and attribute parsing
//! - Comment, bogus comment, DOCTYPE and CDATA section handling
//! - Named and numeric character references
//!
//! The tokenizer emits a flat token stream. It does not build a tree; a consumer that
//! does tree construction drives the tokenizer with [`Tokenizer::pump`] and feeds state
//! changes back through [`Tokenizer::set_state`] and friends.
//!
//! # Example
//!
//! ```ignore
//! let stream = quill_html::tokenize("<p class=intro>Hello</p>")?;
//! assert!(stream.errors.is_empty());
//! ```

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{
    Attribute, InitialState, ParseError, Pump, State, StrSource, Token, TokenCollector,
    TokenSink, TokenStream, Tokenizer, TokenizerError, TokenizerOptions, tokenize, tokenize_with,
};
