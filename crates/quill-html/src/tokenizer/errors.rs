//! Tokenizer errors.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! Parse errors are never fatal: the tokenizer reports them to the sink and
//! applies the recovery the standard prescribes. [`TokenizerError`] is the
//! separate, fatal category for violations of the tokenizer's own invariants.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use super::core::State;

/// A recoverable parse error.
///
/// Displays as the stable identifier from the standard's parse error table,
/// e.g. `eof-in-comment`, and parses back from it with [`str::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ParseError {
    /// `<!-->` or `<!--->`.
    AbruptClosingOfEmptyComment,
    /// `>` inside a quoted public identifier.
    AbruptDoctypePublicIdentifier,
    /// `>` inside a quoted system identifier.
    AbruptDoctypeSystemIdentifier,
    /// `&#` or `&#x` not followed by a digit.
    AbsenceOfDigitsInNumericCharacterReference,
    /// `<![CDATA[` outside foreign content.
    CdataInHtmlContent,
    /// A numeric reference above U+10FFFF.
    CharacterReferenceOutsideUnicodeRange,
    /// A numeric reference to a control character.
    ControlCharacterReference,
    /// A second attribute with the same name on one tag.
    DuplicateAttribute,
    /// An end tag carrying attributes.
    EndTagWithAttributes,
    /// An end tag with the self-closing flag set.
    EndTagWithTrailingSolidus,
    /// EOF right after `<` or `</`.
    EofBeforeTagName,
    /// EOF inside a CDATA section.
    EofInCdata,
    /// EOF inside a comment.
    EofInComment,
    /// EOF inside a DOCTYPE.
    EofInDoctype,
    /// EOF inside `<!--` escaped script text.
    EofInScriptHtmlCommentLikeText,
    /// EOF inside a tag.
    EofInTag,
    /// `--!>` closing a comment.
    IncorrectlyClosedComment,
    /// `<!` not followed by `--`, `DOCTYPE` or `[CDATA[`.
    IncorrectlyOpenedComment,
    /// Garbage after the DOCTYPE name.
    InvalidCharacterSequenceAfterDoctypeName,
    /// `<` or `</` followed by a character that cannot start a tag name.
    InvalidFirstCharacterOfTagName,
    /// `=` directly followed by `>`.
    MissingAttributeValue,
    /// `<!DOCTYPE>`.
    MissingDoctypeName,
    /// `PUBLIC` without an identifier.
    MissingDoctypePublicIdentifier,
    /// `SYSTEM` without an identifier.
    MissingDoctypeSystemIdentifier,
    /// `</>`.
    MissingEndTagName,
    /// Public identifier not introduced by a quote.
    MissingQuoteBeforeDoctypePublicIdentifier,
    /// System identifier not introduced by a quote.
    MissingQuoteBeforeDoctypeSystemIdentifier,
    /// A character reference not terminated by `;`.
    MissingSemicolonAfterCharacterReference,
    /// `PUBLIC"`.
    MissingWhitespaceAfterDoctypePublicKeyword,
    /// `SYSTEM"`.
    MissingWhitespaceAfterDoctypeSystemKeyword,
    /// `<!DOCTYPEhtml>`.
    MissingWhitespaceBeforeDoctypeName,
    /// `a="1"b="2"`.
    MissingWhitespaceBetweenAttributes,
    /// Public and system identifiers not separated by whitespace.
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    /// `<!-- <!-- -->`.
    NestedComment,
    /// A numeric reference to a noncharacter.
    NoncharacterCharacterReference,
    /// `&#0;`.
    NullCharacterReference,
    /// A numeric reference to a surrogate.
    SurrogateCharacterReference,
    /// Garbage after the system identifier.
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    /// `"`, `'` or `<` in an attribute name.
    UnexpectedCharacterInAttributeName,
    /// `"`, `'`, `<`, `=` or `` ` `` in an unquoted attribute value.
    UnexpectedCharacterInUnquotedAttributeValue,
    /// `=` where an attribute name should start.
    UnexpectedEqualsSignBeforeAttributeName,
    /// U+0000 in the input.
    UnexpectedNullCharacter,
    /// `<?`.
    UnexpectedQuestionMarkInsteadOfTagName,
    /// A `/` inside a tag that is not followed by `>`.
    UnexpectedSolidusInTag,
    /// `&name;` that matches no named reference.
    UnknownNamedCharacterReference,
}

/// A violation of the tokenizer's internal contract.
///
/// Malformed input never produces one of these; they indicate a bug in the
/// state machine or a consumer driving it into an unreachable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// A character reference finished but no return state had been recorded.
    #[error("no return state recorded when leaving the {state} state")]
    MissingReturnState {
        /// The state that tried to resume.
        state: State,
    },
    /// A state that only the sequence matcher may enter was entered without one.
    #[error("the {state} state was entered without an armed sequence match")]
    NoSequenceMatch {
        /// The state that was entered.
        state: State,
    },
}
