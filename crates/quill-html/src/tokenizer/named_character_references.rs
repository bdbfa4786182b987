//! Named character reference lookup table.
//!
//! [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
//!
//! The full standard defines 2,231 entities. The tokenizer only needs two
//! questions answered about them, captured by [`NamedReferences`], so a
//! consumer can plug in the complete table. [`BuiltinReferences`] covers the
//! most common ones.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::LazyLock;

/// A table of named character references.
///
/// Names are given without the leading `&` and include the trailing `;` when
/// the reference has one (`"amp;"`). Legacy references that work without a
/// semicolon appear a second time without it (`"amp"`).
pub trait NamedReferences {
    /// The replacement text for `name`, if it is a reference.
    fn lookup(&self, name: &str) -> Option<&str>;

    /// Whether any reference name starts with `prefix`. The tokenizer keeps
    /// consuming characters only while this holds.
    fn has_prefix(&self, prefix: &str) -> bool;
}

/// The named character reference table.
/// Maps entity names (without the leading '&') to their replacement strings.
///
/// NOTE: Some entities map to multiple characters (e.g., "fjlig;" -> "fj").
static NAMED_ENTITIES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        // Most common entities (required for basic HTML)
        ("amp;", "&"),
        ("amp", "&"), // Legacy (no semicolon)
        ("AMP;", "&"),
        ("AMP", "&"),
        ("lt;", "<"),
        ("lt", "<"), // Legacy
        ("LT;", "<"),
        ("LT", "<"),
        ("gt;", ">"),
        ("gt", ">"), // Legacy
        ("GT;", ">"),
        ("GT", ">"),
        ("quot;", "\""),
        ("quot", "\""), // Legacy
        ("QUOT;", "\""),
        ("QUOT", "\""),
        ("apos;", "'"),
        ("nbsp;", "\u{00A0}"),
        ("nbsp", "\u{00A0}"),
        ("fjlig;", "fj"),
        // Common punctuation and symbols
        ("copy;", "\u{00A9}"), // ©
        ("copy", "\u{00A9}"),
        ("reg;", "\u{00AE}"), // ®
        ("reg", "\u{00AE}"),
        ("not;", "\u{00AC}"), // ¬
        ("not", "\u{00AC}"),
        ("notin;", "\u{2209}"),   // ∉
        ("trade;", "\u{2122}"),   // ™
        ("mdash;", "\u{2014}"),   // —
        ("ndash;", "\u{2013}"),   // –
        ("hellip;", "\u{2026}"),  // …
        ("bull;", "\u{2022}"),    // •
        ("middot;", "\u{00B7}"),  // ·
        ("middot", "\u{00B7}"),
        ("sect;", "\u{00A7}"),    // §
        ("sect", "\u{00A7}"),
        ("para;", "\u{00B6}"),    // ¶
        ("para", "\u{00B6}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("laquo;", "\u{00AB}"), // «
        ("laquo", "\u{00AB}"),
        ("raquo;", "\u{00BB}"), // »
        ("raquo", "\u{00BB}"),
        // Currency
        ("cent;", "\u{00A2}"), // ¢
        ("cent", "\u{00A2}"),
        ("pound;", "\u{00A3}"), // £
        ("pound", "\u{00A3}"),
        ("euro;", "\u{20AC}"), // €
        ("yen;", "\u{00A5}"),  // ¥
        ("yen", "\u{00A5}"),
        // Math symbols
        ("times;", "\u{00D7}"), // ×
        ("times", "\u{00D7}"),
        ("divide;", "\u{00F7}"), // ÷
        ("divide", "\u{00F7}"),
        ("plusmn;", "\u{00B1}"), // ±
        ("plusmn", "\u{00B1}"),
        ("ne;", "\u{2260}"),     // ≠
        ("le;", "\u{2264}"),     // ≤
        ("ge;", "\u{2265}"),     // ≥
        ("deg;", "\u{00B0}"),    // °
        ("deg", "\u{00B0}"),
        ("frac12;", "\u{00BD}"), // ½
        ("frac12", "\u{00BD}"),
        ("frac14;", "\u{00BC}"), // ¼
        ("frac14", "\u{00BC}"),
        ("frac34;", "\u{00BE}"), // ¾
        ("frac34", "\u{00BE}"),
        ("NotEqualTilde;", "\u{2242}\u{0338}"),
        // Arrows
        ("larr;", "\u{2190}"),
        ("rarr;", "\u{2192}"),
        ("uarr;", "\u{2191}"),
        ("darr;", "\u{2193}"),
        // Greek letters (commonly used)
        ("alpha;", "\u{03B1}"),
        ("beta;", "\u{03B2}"),
        ("gamma;", "\u{03B3}"),
        ("delta;", "\u{03B4}"),
        ("pi;", "\u{03C0}"),
        ("sigma;", "\u{03C3}"),
        ("omega;", "\u{03C9}"),
        // Accented characters (common)
        ("Agrave;", "\u{00C0}"),
        ("Agrave", "\u{00C0}"),
        ("Aacute;", "\u{00C1}"),
        ("Aacute", "\u{00C1}"),
        ("Auml;", "\u{00C4}"),
        ("Auml", "\u{00C4}"),
        ("agrave;", "\u{00E0}"),
        ("agrave", "\u{00E0}"),
        ("aacute;", "\u{00E1}"),
        ("aacute", "\u{00E1}"),
        ("auml;", "\u{00E4}"),
        ("auml", "\u{00E4}"),
        ("Eacute;", "\u{00C9}"),
        ("Eacute", "\u{00C9}"),
        ("egrave;", "\u{00E8}"),
        ("egrave", "\u{00E8}"),
        ("eacute;", "\u{00E9}"),
        ("eacute", "\u{00E9}"),
        ("iacute;", "\u{00ED}"),
        ("iacute", "\u{00ED}"),
        ("oacute;", "\u{00F3}"),
        ("oacute", "\u{00F3}"),
        ("ouml;", "\u{00F6}"),
        ("ouml", "\u{00F6}"),
        ("uacute;", "\u{00FA}"),
        ("uacute", "\u{00FA}"),
        ("uuml;", "\u{00FC}"),
        ("uuml", "\u{00FC}"),
        ("ntilde;", "\u{00F1}"),
        ("ntilde", "\u{00F1}"),
        ("Ntilde;", "\u{00D1}"),
        ("Ntilde", "\u{00D1}"),
        ("ccedil;", "\u{00E7}"),
        ("ccedil", "\u{00E7}"),
        ("szlig;", "\u{00DF}"),
        ("szlig", "\u{00DF}"),
    ])
});

/// The built-in table: the most common references, including every legacy
/// (semicolon-less) form of the entities it lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinReferences;

impl NamedReferences for BuiltinReferences {
    fn lookup(&self, name: &str) -> Option<&str> {
        lookup_entity(name)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        any_entity_has_prefix(prefix)
    }
}

/// Look up a named character reference.
///
/// Returns the replacement string if found.
/// The `name` should NOT include the leading '&'.
///
/// # Example
/// ```ignore
/// lookup_entity("amp;")  // Returns Some("&")
/// lookup_entity("amp")   // Returns Some("&") - legacy support
/// lookup_entity("xyz;")  // Returns None
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Check if any entity name starts with the given prefix.
///
/// The table is ordered, so the first key not less than `prefix` is the only
/// candidate that needs checking.
#[must_use]
pub fn any_entity_has_prefix(prefix: &str) -> bool {
    NAMED_ENTITIES
        .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .next()
        .is_some_and(|(name, _)| name.starts_with(prefix))
}
