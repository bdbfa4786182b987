//! Tokenizer warnings routed through the `log` facade.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the tokenizer's default error sink to report parse errors, which
//! are never fatal and can repeat thousands of times on malformed input.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already logged (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Records `key` in the global set. Returns true the first time a key is seen.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a recoverable problem (logs once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Tokenizer", "eof-in-comment");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(format!("[{component}] {message}")) {
        log::warn!(target: "quill", "[Quill {component}] {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deduplicates() {
        assert!(record("[Test] dedupe-me".to_string()));
        assert!(!record("[Test] dedupe-me".to_string()));
        assert!(record("[Test] dedupe-me-too".to_string()));
    }

    #[test]
    fn test_warn_once_does_not_panic_without_logger() {
        warn_once("Test", "no logger installed");
        warn_once("Test", "no logger installed");
    }
}
