use std::fmt;

use serde::Serialize;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// An attribute on a start or end tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    ///
    /// `None` when the attribute had no `=` at all (`<input disabled>`), which is
    /// distinct from an explicitly empty value (`<input value="">`).
    pub value: Option<String>,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: Option<String>) -> Self {
        Self { name, value }
    }

    /// The value, treating a missing value as the empty string.
    #[must_use]
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
///
/// Consecutive characters are delivered as one [`Token::Characters`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Token {
    /// "DOCTYPE tokens have a name, a public identifier, a system identifier,
    /// and a force-quirks flag. When a DOCTYPE token is created, its name,
    /// public identifier, and system identifier must be marked as missing
    /// (which is a distinct state from the empty string), and the force-quirks
    /// flag must be set to off (its other state is on)."
    Doctype {
        /// "a name"
        name: Option<String>,
        /// "a public identifier"
        public_identifier: Option<String>,
        /// "a system identifier"
        system_identifier: Option<String>,
        /// "a force-quirks flag"
        force_quirks: bool,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes, each of which has a name and a value."
    StartTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// End tag token. Same structure as start tag, minus the self-closing flag
    /// which is only reported as an error on end tags.
    EndTag {
        /// "a tag name"
        name: String,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// A run of character tokens.
    Characters {
        /// The characters, in input order.
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfInput,
}

impl Token {
    /// Create a character run.
    #[must_use]
    pub fn characters(data: impl Into<String>) -> Self {
        Self::Characters { data: data.into() }
    }

    /// Create a comment token.
    #[must_use]
    pub fn comment(data: impl Into<String>) -> Self {
        Self::Comment { data: data.into() }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }

    /// The tag name for start and end tags.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    /// Writes the token back out as markup. For canonical input (lower-case
    /// names, double-quoted attribute values) this reproduces the source text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                ..
            } => {
                write!(f, "<!DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                match (public_identifier, system_identifier) {
                    (Some(public), Some(system)) => write!(f, " PUBLIC \"{public}\" \"{system}\"")?,
                    (Some(public), None) => write!(f, " PUBLIC \"{public}\"")?,
                    (None, Some(system)) => write!(f, " SYSTEM \"{system}\"")?,
                    (None, None) => {}
                }
                write!(f, ">")
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    match &attr.value {
                        Some(value) => write!(f, " {}=\"{value}\"", attr.name)?,
                        None => write!(f, " {}", attr.name)?,
                    }
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name, .. } => write!(f, "</{name}>"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Characters { data } => f.write_str(data),
            Self::EndOfInput => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_start_tag_with_boolean_attribute() {
        let token = Token::StartTag {
            name: "input".to_string(),
            self_closing: true,
            attributes: vec![
                Attribute::new("type".to_string(), Some("text".to_string())),
                Attribute::new("disabled".to_string(), None),
            ],
        };
        assert_eq!(token.to_string(), r#"<input type="text" disabled />"#);
    }

    #[test]
    fn test_display_doctype_identifiers() {
        let token = Token::Doctype {
            name: Some("html".to_string()),
            public_identifier: None,
            system_identifier: Some("about:legacy-compat".to_string()),
            force_quirks: false,
        };
        assert_eq!(token.to_string(), r#"<!DOCTYPE html SYSTEM "about:legacy-compat">"#);
    }

    #[test]
    fn test_serialize_is_tagged() {
        let json = serde_json::to_string(&Token::comment("hi")).unwrap_or_default();
        assert_eq!(json, r#"{"type":"comment","data":"hi"}"#);
        let json = serde_json::to_string(&Token::EndOfInput).unwrap_or_default();
        assert_eq!(json, r#"{"type":"end-of-input"}"#);
    }
}
