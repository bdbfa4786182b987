use strum_macros::Display;

use super::buffer::ScalarBuffer;
use super::errors::TokenizerError;
use super::input::ScalarSource;
use super::named_character_references::{BuiltinReferences, NamedReferences};
use super::options::TokenizerOptions;
use super::sequence::SequenceMatch;
use super::sink::TokenSink;
use super::token::Attribute;

/// Log target for state transitions and token emission.
pub(super) const LOG_TARGET: &str = "quill_html::tokenizer";

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer state machine. Most states correspond to a section in § 13.2.5.
/// The remainder are junctions: zero-width states entered when a literal
/// match finishes, which perform the match's entry actions and reconsume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum State {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    Rcdata,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    Rawtext,
    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    ScriptData,
    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    Plaintext,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    RcdataLessThanSign,
    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    RcdataEndTagOpen,
    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    RawtextLessThanSign,
    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    RawtextEndTagOpen,
    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    ScriptDataLessThanSign,
    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    ScriptDataEndTagOpen,
    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    ScriptDataEscapeStart,
    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    ScriptDataEscapeStartDash,
    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    ScriptDataEscaped,
    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    ScriptDataEscapedDash,
    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    ScriptDataEscapedDashDash,
    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    ScriptDataEscapedLessThanSign,
    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    ScriptDataEscapedEndTagOpen,
    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    ///
    /// Entered once `script` has been matched after `<` in escaped script data.
    ScriptDataDoubleEscapeStart,
    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    ScriptDataDoubleEscaped,
    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    ScriptDataDoubleEscapedDash,
    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    ScriptDataDoubleEscapedDashDash,
    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    ScriptDataDoubleEscapedLessThanSign,
    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    ///
    /// Entered once `/script` has been matched after `<` in double escaped script data.
    ScriptDataDoubleEscapeEnd,
    /// Junction entered after the last start tag name matched in a text state.
    /// Decides whether the end tag is real from the character that follows it.
    AppropriateEndTag,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    MarkupDeclarationOpen,
    /// Junction entered after `<!--`.
    CommentOpen,
    /// Junction entered after `<!DOCTYPE`.
    DoctypeOpen,
    /// Junction entered after `<![CDATA[`.
    CdataOpen,
    /// Junction entered when `<!` is not followed by a recognized declaration.
    IncorrectlyOpenedComment,
    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    CommentStart,
    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    CommentStartDash,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    CommentLessThanSign,
    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    CommentLessThanSignBang,
    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    CommentLessThanSignBangDash,
    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    CommentLessThanSignBangDashDash,
    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    CommentEndDash,
    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    CommentEnd,
    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    CommentEndBang,
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    Doctype,
    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    BeforeDoctypeName,
    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    DoctypeName,
    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    AfterDoctypeName,
    /// Junction entered when the word after a DOCTYPE name is neither
    /// `PUBLIC` nor `SYSTEM`.
    DoctypeKeywordMismatch,
    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    AfterDoctypePublicKeyword,
    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    BeforeDoctypePublicIdentifier,
    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    DoctypePublicIdentifierDoubleQuoted,
    /// [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    DoctypePublicIdentifierSingleQuoted,
    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    AfterDoctypePublicIdentifier,
    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    BetweenDoctypePublicAndSystemIdentifiers,
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    AfterDoctypeSystemKeyword,
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    BeforeDoctypeSystemIdentifier,
    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    DoctypeSystemIdentifierDoubleQuoted,
    /// [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    DoctypeSystemIdentifierSingleQuoted,
    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    AfterDoctypeSystemIdentifier,
    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    BogusDoctype,
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    CdataSection,
    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    CdataSectionBracket,
    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    CdataSectionEnd,
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    CharacterReference,
    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    NamedCharacterReference,
    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    AmbiguousAmpersand,
    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    NumericCharacterReference,
    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    HexadecimalCharacterReferenceStart,
    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    DecimalCharacterReferenceStart,
    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    HexadecimalCharacterReference,
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    DecimalCharacterReference,
    /// Consumes scalars against the armed [`SequenceMatch`] literal.
    MatchSequence,
}

/// [§ 13.2.4.1 The return state](https://html.spec.whatwg.org/multipage/parsing.html#return-state)
///
/// Where to resume once a character reference has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnState {
    /// The state to resume in.
    pub state: State,
    /// Whether the reference sits in an attribute value. Selects the
    /// historical rule that leaves `&amp=` and `&ampx` undecoded there.
    pub in_attribute: bool,
}

impl ReturnState {
    /// A return to a text state.
    #[must_use]
    pub const fn text(state: State) -> Self {
        Self {
            state,
            in_attribute: false,
        }
    }

    /// A return to an attribute value state.
    #[must_use]
    pub const fn attribute(state: State) -> Self {
        Self {
            state,
            in_attribute: true,
        }
    }
}

/// Outcome of [`Tokenizer::pump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pump {
    /// At least one token was emitted and more input remains.
    Emitted,
    /// The end-of-input token has been emitted. Further pumps do nothing.
    Finished,
}

/// Whether the tag under construction opens or closes an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TagKind {
    Start,
    End,
}

/// A start or end tag whose fields are still being read.
#[derive(Debug)]
pub(super) struct TagInProgress {
    pub(super) kind: TagKind,
    pub(super) name: String,
    pub(super) self_closing: bool,
    pub(super) attributes: Vec<Attribute>,
    /// Set when the current attribute repeats an earlier name; its value is
    /// read but not kept.
    pub(super) attribute_dropped: bool,
}

impl TagInProgress {
    pub(super) const fn new(kind: TagKind) -> Self {
        Self {
            kind,
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
            attribute_dropped: false,
        }
    }
}

/// A DOCTYPE whose fields are still being read. Missing fields stay `None`.
#[derive(Debug, Default)]
pub(super) struct DoctypeInProgress {
    pub(super) name: Option<String>,
    pub(super) public_identifier: Option<String>,
    pub(super) system_identifier: Option<String>,
    pub(super) force_quirks: bool,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The HTML tokenizer. Pulls scalars from `S` and hands tokens and parse
/// errors to `K`.
pub struct Tokenizer<S, K> {
    pub(super) source: S,
    pub(super) sink: K,
    pub(super) references: Box<dyn NamedReferences>,

    pub(super) state: State,
    pub(super) return_state: Option<ReturnState>,
    pub(super) current_input_character: Option<char>,
    pub(super) reconsume: bool,

    /// Pending character data in text states, the current field in markup states.
    pub(super) buffer: ScalarBuffer,
    /// Buffer position of the `<` that may start markup.
    pub(super) text_mark: usize,
    /// Buffer position of the `&` that started the current character reference.
    pub(super) ref_mark: usize,
    pub(super) character_reference_code: u32,

    pub(super) sequence: Option<SequenceMatch>,
    /// The text state an end tag match falls back to.
    pub(super) text_state: State,

    pub(super) current_tag: Option<TagInProgress>,
    pub(super) current_doctype: Option<DoctypeInProgress>,
    pub(super) last_start_tag: Option<String>,

    pub(super) cdata_allowed: bool,
    pub(super) switch_text_states: bool,
    pub(super) scripting_enabled: bool,
    pub(super) discard_bom: bool,

    pub(super) at_start: bool,
    pub(super) emitted: bool,
    pub(super) finished: bool,
}

impl<S: ScalarSource, K: TokenSink> Tokenizer<S, K> {
    /// Create a tokenizer with default options, starting in the data state.
    #[must_use]
    pub fn new(source: S, sink: K) -> Self {
        Self::with_options(source, sink, &TokenizerOptions::default())
    }

    /// Create a tokenizer configured by `options`.
    #[must_use]
    pub fn with_options(source: S, sink: K, options: &TokenizerOptions) -> Self {
        Self {
            source,
            sink,
            references: Box::new(BuiltinReferences),
            state: options.initial_state.into(),
            return_state: None,
            current_input_character: None,
            reconsume: false,
            buffer: ScalarBuffer::new(),
            text_mark: 0,
            ref_mark: 0,
            character_reference_code: 0,
            sequence: None,
            text_state: State::Data,
            current_tag: None,
            current_doctype: None,
            last_start_tag: options
                .last_start_tag
                .as_deref()
                .map(str::to_ascii_lowercase),
            cdata_allowed: options.cdata_allowed,
            switch_text_states: options.switch_text_states,
            scripting_enabled: options.scripting_enabled,
            discard_bom: options.discard_bom,
            at_start: true,
            emitted: false,
            finished: false,
        }
    }

    /// Replace the named character reference table.
    #[must_use]
    pub fn with_named_references(mut self, references: impl NamedReferences + 'static) -> Self {
        self.references = Box::new(references);
        self
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Force the tokenizer into `state`. Intended for a tree builder that
    /// switches text modes between pumps.
    pub const fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// The name of the last start tag emitted (or seeded).
    #[must_use]
    pub fn last_start_tag(&self) -> Option<&str> {
        self.last_start_tag.as_deref()
    }

    /// Set the name used to recognize the appropriate end tag in text states.
    pub fn set_last_start_tag(&mut self, name: Option<&str>) {
        self.last_start_tag = name.map(str::to_ascii_lowercase);
    }

    /// Whether `<![CDATA[` opens a CDATA section. A tree builder sets this
    /// when the adjusted current node is in foreign content.
    pub const fn set_cdata_allowed(&mut self, allowed: bool) {
        self.cdata_allowed = allowed;
    }

    /// Returns true once the end-of-input token has been emitted.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// The sink receiving tokens.
    #[must_use]
    pub const fn sink(&self) -> &K {
        &self.sink
    }

    /// Mutable access to the sink, e.g. to drain collected tokens between pumps.
    pub const fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Consume the tokenizer and return its sink.
    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Run the state machine until at least one token has been emitted.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenizerError`] if the state machine reaches a
    /// configuration it cannot continue from. Malformed input never does this.
    pub fn pump(&mut self) -> Result<Pump, TokenizerError> {
        self.emitted = false;
        while !self.finished {
            self.step()?;
            if self.emitted && !self.finished {
                return Ok(Pump::Emitted);
            }
        }
        Ok(Pump::Finished)
    }

    /// Run the state machine to the end of input.
    ///
    /// # Errors
    ///
    /// See [`Tokenizer::pump`].
    pub fn run(&mut self) -> Result<(), TokenizerError> {
        while self.pump()? == Pump::Emitted {}
        Ok(())
    }

    /// Process one input character in the current state.
    fn step(&mut self) -> Result<(), TokenizerError> {
        // "Each state begins by consuming the next input character", unless the
        // previous state asked for it to be reconsumed.
        if self.reconsume {
            self.reconsume = false;
        } else {
            self.current_input_character = self.consume();
        }

        log::trace!(
            target: LOG_TARGET,
            "{} <- {:?}",
            self.state,
            self.current_input_character
        );

        match self.state {
            State::Data => self.handle_data_state(),
            State::Rcdata => self.handle_rcdata_state(),
            State::Rawtext | State::ScriptData | State::Plaintext => {
                self.handle_raw_text_state();
            }
            State::RcdataLessThanSign | State::RawtextLessThanSign => {
                self.handle_text_less_than_sign_state();
            }
            State::RcdataEndTagOpen | State::RawtextEndTagOpen | State::ScriptDataEndTagOpen => {
                self.handle_text_end_tag_open_state();
            }
            State::ScriptDataLessThanSign => self.handle_script_data_less_than_sign_state(),
            State::ScriptDataEscapeStart | State::ScriptDataEscapeStartDash => {
                self.handle_script_data_escape_start_state();
            }
            State::ScriptDataEscaped
            | State::ScriptDataEscapedDash
            | State::ScriptDataEscapedDashDash => self.handle_script_data_escaped_state(),
            State::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state();
            }
            State::ScriptDataEscapedEndTagOpen => self.handle_text_end_tag_open_state(),
            State::ScriptDataDoubleEscapeStart => {
                self.handle_script_data_double_escape_start_state();
            }
            State::ScriptDataDoubleEscaped
            | State::ScriptDataDoubleEscapedDash
            | State::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_state();
            }
            State::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state();
            }
            State::ScriptDataDoubleEscapeEnd => self.handle_script_data_double_escape_end_state(),
            State::AppropriateEndTag => self.handle_appropriate_end_tag_state(),

            State::TagOpen => self.handle_tag_open_state(),
            State::EndTagOpen => self.handle_end_tag_open_state(),
            State::TagName => self.handle_tag_name_state(),
            State::BeforeAttributeName => self.handle_before_attribute_name_state(),
            State::AttributeName => self.handle_attribute_name_state(),
            State::AfterAttributeName => self.handle_after_attribute_name_state(),
            State::BeforeAttributeValue => self.handle_before_attribute_value_state(),
            State::AttributeValueDoubleQuoted => self.handle_attribute_value_quoted_state('"'),
            State::AttributeValueSingleQuoted => self.handle_attribute_value_quoted_state('\''),
            State::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(),
            State::AfterAttributeValueQuoted => self.handle_after_attribute_value_quoted_state(),
            State::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),

            State::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(),
            State::CommentOpen => self.handle_comment_open_state(),
            State::IncorrectlyOpenedComment => self.handle_incorrectly_opened_comment_state(),
            State::CdataOpen => self.handle_cdata_open_state(),
            State::BogusComment => self.handle_bogus_comment_state(),
            State::CommentStart => self.handle_comment_start_state(),
            State::CommentStartDash => self.handle_comment_start_dash_state(),
            State::Comment => self.handle_comment_state(),
            State::CommentLessThanSign => self.handle_comment_less_than_sign_state(),
            State::CommentLessThanSignBang => self.handle_comment_less_than_sign_bang_state(),
            State::CommentLessThanSignBangDash => {
                self.handle_comment_less_than_sign_bang_dash_state();
            }
            State::CommentLessThanSignBangDashDash => {
                self.handle_comment_less_than_sign_bang_dash_dash_state();
            }
            State::CommentEndDash => self.handle_comment_end_dash_state(),
            State::CommentEnd => self.handle_comment_end_state(),
            State::CommentEndBang => self.handle_comment_end_bang_state(),
            State::CdataSection => self.handle_cdata_section_state(),
            State::CdataSectionBracket => self.handle_cdata_section_bracket_state(),
            State::CdataSectionEnd => self.handle_cdata_section_end_state(),

            State::DoctypeOpen => self.handle_doctype_open_state(),
            State::Doctype => self.handle_doctype_state(),
            State::BeforeDoctypeName => self.handle_before_doctype_name_state(),
            State::DoctypeName => self.handle_doctype_name_state(),
            State::AfterDoctypeName => self.handle_after_doctype_name_state(),
            State::DoctypeKeywordMismatch => self.handle_doctype_keyword_mismatch_state(),
            State::AfterDoctypePublicKeyword => {
                self.handle_after_doctype_keyword_state(DoctypeField::Public);
            }
            State::AfterDoctypeSystemKeyword => {
                self.handle_after_doctype_keyword_state(DoctypeField::System);
            }
            State::BeforeDoctypePublicIdentifier => {
                self.handle_before_doctype_identifier_state(DoctypeField::Public);
            }
            State::BeforeDoctypeSystemIdentifier => {
                self.handle_before_doctype_identifier_state(DoctypeField::System);
            }
            State::DoctypePublicIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_state('"', DoctypeField::Public);
            }
            State::DoctypePublicIdentifierSingleQuoted => {
                self.handle_doctype_identifier_state('\'', DoctypeField::Public);
            }
            State::DoctypeSystemIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_state('"', DoctypeField::System);
            }
            State::DoctypeSystemIdentifierSingleQuoted => {
                self.handle_doctype_identifier_state('\'', DoctypeField::System);
            }
            State::AfterDoctypePublicIdentifier => {
                self.handle_after_doctype_public_identifier_state();
            }
            State::BetweenDoctypePublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state();
            }
            State::AfterDoctypeSystemIdentifier => {
                self.handle_after_doctype_system_identifier_state();
            }
            State::BogusDoctype => self.handle_bogus_doctype_state(),

            State::CharacterReference => self.handle_character_reference_state()?,
            State::NamedCharacterReference => self.handle_named_character_reference_state()?,
            State::AmbiguousAmpersand => self.handle_ambiguous_ampersand_state()?,
            State::NumericCharacterReference => self.handle_numeric_character_reference_state(),
            State::HexadecimalCharacterReferenceStart | State::DecimalCharacterReferenceStart => {
                self.handle_numeric_character_reference_start_state()?;
            }
            State::HexadecimalCharacterReference => {
                self.handle_numeric_character_reference_digits_state(16)?;
            }
            State::DecimalCharacterReference => {
                self.handle_numeric_character_reference_digits_state(10)?;
            }

            State::MatchSequence => self.handle_match_sequence_state()?,
        }
        Ok(())
    }
}

/// Which DOCTYPE identifier a shared doctype state is reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DoctypeField {
    Public,
    System,
}
