//! Common types and utilities for the reqthis analyzer.
//!
//! This crate provides the foundational types used across all reqthis crates:
//! - Source spans (`Span`)
//! - The diagnostic model (`Diagnostic`, `DiagnosticCategory`)
//! - Rule message codes and templates (`diagnostic_codes`, `diagnostic_messages`)

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostic types and message lookup
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, diagnostic_codes, diagnostic_messages, format_message,
};
