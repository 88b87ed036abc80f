//! Internal-consistency failures.
//!
//! These indicate the traversal driver and the resolver disagree about
//! construct nesting. They abort the current tree and are surfaced on a
//! separate channel from lint findings, never as a style violation.

use reqthis_common::{Diagnostic, diagnostic_codes, diagnostic_messages, format_message};
use reqthis_syntax::SyntaxKind;
use std::error::Error;
use std::fmt;

/// A protocol violation between walker and resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// A leave event tried to pop the permanent Global frame.
    StackUnderflow,
    /// An enter event arrived for a kind outside the subscribed set.
    UnexpectedVisit(SyntaxKind),
    /// A leave event arrived for a kind outside the subscribed set.
    UnexpectedLeave(SyntaxKind),
    /// The stack did not return to holding only Global at end of traversal.
    UnbalancedTraversal { depth: usize },
}

impl ResolveError {
    pub fn code(&self) -> u32 {
        match self {
            ResolveError::StackUnderflow | ResolveError::UnbalancedTraversal { .. } => {
                diagnostic_codes::UNBALANCED_TRAVERSAL
            }
            ResolveError::UnexpectedVisit(_) => diagnostic_codes::UNEXPECTED_VISIT,
            ResolveError::UnexpectedLeave(_) => diagnostic_codes::UNEXPECTED_LEAVE,
        }
    }

    /// Render as an Error-category diagnostic, distinct from findings.
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        Diagnostic::error(file, 0, 0, self.to_string(), self.code())
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::StackUnderflow => {
                f.write_str("scope stack underflow: attempted to pop the Global frame")
            }
            ResolveError::UnexpectedVisit(kind) => f.write_str(&format_message(
                diagnostic_messages::UNEXPECTED_VISIT,
                &[kind.as_str()],
            )),
            ResolveError::UnexpectedLeave(kind) => f.write_str(&format_message(
                diagnostic_messages::UNEXPECTED_LEAVE,
                &[kind.as_str()],
            )),
            ResolveError::UnbalancedTraversal { depth } => f.write_str(&format_message(
                diagnostic_messages::UNBALANCED_TRAVERSAL,
                &[&depth.to_string()],
            )),
        }
    }
}

impl Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_kind() {
        let err = ResolveError::UnexpectedVisit(SyntaxKind::MethodCall);
        assert_eq!(err.to_string(), "Unexpected token kind 'MethodCall' on enter.");
    }

    #[test]
    fn diagnostic_uses_error_category_and_internal_code() {
        let diag = ResolveError::UnbalancedTraversal { depth: 3 }.to_diagnostic("A.java");
        assert_eq!(diag.code, diagnostic_codes::UNBALANCED_TRAVERSAL);
        assert_eq!(
            diag.message_text,
            "Scope stack depth 3 at end of traversal; expected 1."
        );
    }
}
