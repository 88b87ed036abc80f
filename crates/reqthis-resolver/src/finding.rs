//! Findings reported by the rule, and where they go.

use reqthis_common::{Diagnostic, Span, diagnostic_codes, diagnostic_messages, format_message};

/// Which form of member access a finding concerns. Selects the message
/// template and participates in [`CheckTargets`](crate::CheckTargets)
/// filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Method,
}

/// The two advisory outcomes the rule can surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FindingKind {
    /// Reference to an instance member without an explicit `this.`.
    ImplicitInstanceAccess,
    /// Identifier not found in any active scope; presumed external.
    UnresolvedReference,
}

/// One flagged identifier occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub member: MemberKind,
    pub name: String,
    pub span: Span,
}

impl Finding {
    /// Render as a Warning-category diagnostic against `file`.
    pub fn into_diagnostic(self, file: &str) -> Diagnostic {
        let (code, template) = match (self.kind, self.member) {
            (FindingKind::ImplicitInstanceAccess, MemberKind::Method) => (
                diagnostic_codes::REQUIRE_THIS_METHOD,
                diagnostic_messages::REQUIRE_THIS_METHOD,
            ),
            (FindingKind::ImplicitInstanceAccess, MemberKind::Field) => (
                diagnostic_codes::REQUIRE_THIS_VARIABLE,
                diagnostic_messages::REQUIRE_THIS_VARIABLE,
            ),
            (FindingKind::UnresolvedReference, _) => (
                diagnostic_codes::UNRESOLVED_REFERENCE,
                diagnostic_messages::UNRESOLVED_REFERENCE,
            ),
        };
        Diagnostic::warning(
            file,
            self.span.start,
            self.span.len(),
            format_message(template, &[&self.name]),
            code,
        )
    }
}

/// Receives findings as the resolver emits them. Internal inconsistencies
/// never travel through this channel.
pub trait FindingSink {
    fn report(&mut self, finding: Finding);
}

impl FindingSink for Vec<Finding> {
    fn report(&mut self, finding: Finding) {
        self.push(finding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_finding_renders_variable_message() {
        let finding = Finding {
            kind: FindingKind::ImplicitInstanceAccess,
            member: MemberKind::Field,
            name: "count".to_string(),
            span: Span::new(40, 45),
        };
        let diag = finding.into_diagnostic("C.java");
        assert_eq!(diag.code, diagnostic_codes::REQUIRE_THIS_VARIABLE);
        assert_eq!(
            diag.message_text,
            "Reference to instance variable 'count' needs \"this.\"."
        );
        assert_eq!(diag.start, 40);
        assert_eq!(diag.length, 5);
    }

    #[test]
    fn method_finding_renders_call_message() {
        let finding = Finding {
            kind: FindingKind::ImplicitInstanceAccess,
            member: MemberKind::Method,
            name: "inc".to_string(),
            span: Span::new(10, 13),
        };
        let diag = finding.into_diagnostic("C.java");
        assert_eq!(diag.code, diagnostic_codes::REQUIRE_THIS_METHOD);
        assert_eq!(diag.message_text, "Method call to 'inc' needs \"this.\".");
    }
}
