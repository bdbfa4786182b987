//! Common utilities for the Quill tokenizer.
//!
//! This crate provides shared infrastructure used by the tokenizer crates:
//! - **Warning System** - de-duplicated diagnostics routed through the `log` facade

pub mod warning;
