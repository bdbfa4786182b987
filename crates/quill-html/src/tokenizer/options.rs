//! Tokenizer configuration.
//!
//! Options can be built in code or loaded from JSON:
//!
//! ```ignore
//! let opts = TokenizerOptions::from_json(r#"{ "initial-state": "rcdata", "last-start-tag": "title" }"#)?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::core::State;

/// The states a tokenizer may be started in.
///
/// These are the entry points a tree builder can select when it creates a
/// tokenizer for a fragment (e.g. the contents of a `<textarea>`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    #[default]
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    Rcdata,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    Rawtext,
    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    ScriptData,
    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    Plaintext,
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    CdataSection,
}

impl From<InitialState> for State {
    fn from(initial: InitialState) -> Self {
        match initial {
            InitialState::Data => Self::Data,
            InitialState::Rcdata => Self::Rcdata,
            InitialState::Rawtext => Self::Rawtext,
            InitialState::ScriptData => Self::ScriptData,
            InitialState::Plaintext => Self::Plaintext,
            InitialState::CdataSection => Self::CdataSection,
        }
    }
}

/// Options controlling a [`Tokenizer`](super::Tokenizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TokenizerOptions {
    /// The state the tokenizer starts in.
    pub initial_state: InitialState,
    /// Name of the last start tag, used to recognize the appropriate end tag
    /// when starting in a text state.
    pub last_start_tag: Option<String>,
    /// Switch to RCDATA, RAWTEXT, script data or PLAINTEXT after emitting the
    /// start tags that require it. A tree builder that manages text modes
    /// itself turns this off and calls [`Tokenizer::set_state`](super::Tokenizer::set_state).
    pub switch_text_states: bool,
    /// Whether scripting is enabled. When it is, `noscript` is a RAWTEXT element.
    pub scripting_enabled: bool,
    /// Whether `<![CDATA[` opens a CDATA section. True only in foreign content.
    pub cdata_allowed: bool,
    /// Drop a leading U+FEFF BYTE ORDER MARK.
    pub discard_bom: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            initial_state: InitialState::Data,
            last_start_tag: None,
            switch_text_states: true,
            scripting_enabled: true,
            cdata_allowed: false,
            discard_bom: true,
        }
    }
}

/// Failure to load [`TokenizerOptions`].
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The document is not valid JSON or does not describe tokenizer options.
    #[error("invalid tokenizer options: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizerOptions {
    /// Parse options from a JSON document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Json`] if the document is malformed or has a
    /// key of the wrong type.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_take_defaults() {
        let opts = TokenizerOptions::from_json("{}").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(opts, TokenizerOptions::default());
    }

    #[test]
    fn test_kebab_case_keys() {
        let opts = TokenizerOptions::from_json(
            r#"{ "initial-state": "script-data", "last-start-tag": "script", "cdata-allowed": true }"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(opts.initial_state, InitialState::ScriptData);
        assert_eq!(opts.last_start_tag.as_deref(), Some("script"));
        assert!(opts.cdata_allowed);
        assert!(opts.switch_text_states);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = TokenizerOptions::from_json(r#"{ "discard-bom": "yes" }"#);
        assert!(matches!(err, Err(OptionsError::Json(_))));
    }
}
