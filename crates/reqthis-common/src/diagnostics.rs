//! Diagnostic types and message lookup for the require-this rule.
//!
//! Findings and internal-inconsistency reports share the same diagnostic
//! shape but use disjoint code ranges: `97xx` for lint findings, `98xx`
//! for protocol violations between the tree walker and the resolver.

use serde::Serialize;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 2,
}

/// A reported problem with its source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    pub fn warning(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
        }
    }

    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
        }
    }
}

// =============================================================================
// Message Codes and Templates
// =============================================================================

pub mod diagnostic_codes {
    //! Stable numeric codes for every message the rule can emit.

    /// Unqualified call to an instance method.
    pub const REQUIRE_THIS_METHOD: u32 = 9701;
    /// Unqualified reference to an instance variable.
    pub const REQUIRE_THIS_VARIABLE: u32 = 9702;
    /// Reference that resolved to no active scope.
    pub const UNRESOLVED_REFERENCE: u32 = 9703;
    /// Walker delivered an enter event for a kind the resolver never subscribed to.
    pub const UNEXPECTED_VISIT: u32 = 9801;
    /// Walker delivered a leave event for a kind the resolver never subscribed to.
    pub const UNEXPECTED_LEAVE: u32 = 9802;
    /// Scope stack did not return to its initial depth at end of traversal.
    pub const UNBALANCED_TRAVERSAL: u32 = 9803;
}

pub mod diagnostic_messages {
    //! Message templates with `{0}`-style positional placeholders.

    pub const REQUIRE_THIS_METHOD: &str = "Method call to '{0}' needs \"this.\".";
    pub const REQUIRE_THIS_VARIABLE: &str =
        "Reference to instance variable '{0}' needs \"this.\".";
    pub const UNRESOLVED_REFERENCE: &str =
        "Unable to resolve reference '{0}'; it may be imported, inherited, or static.";
    pub const UNEXPECTED_VISIT: &str = "Unexpected token kind '{0}' on enter.";
    pub const UNEXPECTED_LEAVE: &str = "Unexpected token kind '{0}' on leave.";
    pub const UNBALANCED_TRAVERSAL: &str =
        "Scope stack depth {0} at end of traversal; expected 1.";
}

/// Substitute positional `{n}` placeholders in a message template.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
