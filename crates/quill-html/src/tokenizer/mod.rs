//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// Scalar staging buffer shared by all states.
pub mod buffer;
/// Character reference states per § 13.2.5.72-80.
pub mod character_reference;
/// Comment, bogus comment, markup declaration and CDATA states.
mod comment;
/// HTML tokenizer state machine implementation.
pub mod core;
/// DOCTYPE states per § 13.2.5.53-68.
mod doctype;
/// Parse errors and tokenizer contract violations.
pub mod errors;
/// Helper methods for tokenizer state transitions.
mod helpers;
/// Scalar value sources with input stream preprocessing.
pub mod input;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Tokenizer configuration.
pub mod options;
/// Literal sequence matcher reused by many states.
pub mod sequence;
/// Token and error sinks.
pub mod sink;
/// Tag and attribute states.
mod tag;
/// Text content states: data, RCDATA, RAWTEXT, PLAINTEXT and script data.
mod text;
/// Token types produced by the tokenizer.
pub mod token;

pub use buffer::ScalarBuffer;
pub use self::core::{Pump, ReturnState, State, Tokenizer};
pub use errors::{ParseError, TokenizerError};
pub use input::{CharSource, ScalarSource, StrSource};
pub use named_character_references::{BuiltinReferences, NamedReferences};
pub use options::{InitialState, OptionsError, TokenizerOptions};
pub use sink::{TokenCollector, TokenSink, TokenStream, tokenize, tokenize_with};
pub use token::{Attribute, Token};
