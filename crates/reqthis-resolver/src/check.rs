//! The require-this resolver.
//!
//! Driven by walker callbacks: construct-enter events push scopes and
//! register declared names, construct-leave events pop them, and every
//! bare identifier occurrence is classified by its syntactic position
//! and, where that does not decide, by a lookup against the scope stack.

use crate::{
    CheckTargets, Finding, FindingKind, FindingSink, MemberKind, Resolution, ResolveError,
    ScopeKind, ScopeStack,
};
use reqthis_syntax::{NodeArena, NodeIndex, SyntaxKind, SyntaxVisitor, TreeWalker};
use tracing::debug;

/// Token kinds the check subscribes to. Receiving any other kind is a
/// protocol violation.
const SUBSCRIBED: &[SyntaxKind] = &[
    SyntaxKind::Identifier,
    SyntaxKind::VariableDef,
    SyntaxKind::ParameterDef,
    SyntaxKind::ClassDef,
    SyntaxKind::MethodDef,
    SyntaxKind::CtorDef,
    SyntaxKind::Block,
];

/// Checks that instance members are accessed as `this.name` rather than
/// bare `name`. One instance analyzes one tree; nothing survives a
/// traversal.
pub struct RequireThisCheck<S: FindingSink> {
    frames: ScopeStack,
    targets: CheckTargets,
    sink: S,
}

impl<S: FindingSink> RequireThisCheck<S> {
    pub fn new(targets: CheckTargets, sink: S) -> RequireThisCheck<S> {
        RequireThisCheck {
            frames: ScopeStack::new(),
            targets,
            sink,
        }
    }

    /// Hand back the sink once the traversal is over.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Register the declared name of a definition node into the scope it
    /// belongs to. The name is the definition's first identifier child.
    fn declare_name(&mut self, arena: &NodeArena, def: NodeIndex) {
        if let Some(name_idx) = arena.find_first_child(def, SyntaxKind::Identifier) {
            let name = arena.identifier_text(name_idx);
            debug!(name, scope = ?self.frames.current().kind(), "declaring");
            self.frames.current_mut().declare(name);
        }
    }

    /// Classify one bare identifier occurrence. Rules are tried in order;
    /// the first that applies decides.
    fn process_identifier(&mut self, arena: &NodeArena, idx: NodeIndex) {
        let name = arena.identifier_text(idx);
        let parent = arena.parent_of(idx);
        let parent_kind = arena.kind_of(parent);

        // The callee of a call is never a local variable; it always needs
        // the member check, so report without consulting the stack.
        if parent_kind == Some(SyntaxKind::MethodCall) {
            if self.targets.methods {
                self.report(FindingKind::ImplicitInstanceAccess, MemberKind::Method, arena, idx);
            }
            return;
        }
        // The member name after a dot is already qualified by its receiver.
        if parent_kind == Some(SyntaxKind::Dot) && arena.previous_sibling(idx).is_some() {
            return;
        }
        // Type position: annotation or object creation.
        if matches!(parent_kind, Some(SyntaxKind::TypeRef) | Some(SyntaxKind::New)) {
            return;
        }
        // The name token of a declaration is a definition site, not a use.
        if matches!(
            parent_kind,
            Some(SyntaxKind::VariableDef)
                | Some(SyntaxKind::ParameterDef)
                | Some(SyntaxKind::MethodDef)
                | Some(SyntaxKind::CtorDef)
                | Some(SyntaxKind::ClassDef)
        ) {
            return;
        }

        let resolution = self.frames.classify(name);
        debug!(name, ?resolution, "classified identifier");
        match resolution {
            Resolution::Unresolved => {
                if self.targets.fields {
                    self.report(FindingKind::UnresolvedReference, MemberKind::Field, arena, idx);
                }
            }
            Resolution::InstanceMember => {
                if self.targets.fields {
                    self.report(
                        FindingKind::ImplicitInstanceAccess,
                        MemberKind::Field,
                        arena,
                        idx,
                    );
                }
            }
            Resolution::Local => {}
        }
    }

    fn report(
        &mut self,
        kind: FindingKind,
        member: MemberKind,
        arena: &NodeArena,
        idx: NodeIndex,
    ) {
        let span = arena.get(idx).map(|node| node.span).unwrap_or_default();
        self.sink.report(Finding {
            kind,
            member,
            name: arena.identifier_text(idx).to_string(),
            span,
        });
    }
}

impl<S: FindingSink> SyntaxVisitor for RequireThisCheck<S> {
    type Error = ResolveError;

    fn subscribed_kinds(&self) -> &'static [SyntaxKind] {
        SUBSCRIBED
    }

    fn begin_tree(&mut self) {
        self.frames = ScopeStack::new();
    }

    fn visit_node(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), ResolveError> {
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        match node.kind {
            SyntaxKind::ParameterDef | SyntaxKind::VariableDef => {
                self.declare_name(arena, idx);
            }
            SyntaxKind::ClassDef => {
                // The class name goes into the enclosing scope so siblings
                // can see it; only then does the class body's scope open.
                self.declare_name(arena, idx);
                self.frames.push(ScopeKind::Class);
            }
            SyntaxKind::MethodDef | SyntaxKind::CtorDef => {
                self.frames.push(ScopeKind::Method);
            }
            SyntaxKind::Block => {
                self.frames.push(ScopeKind::Block);
            }
            SyntaxKind::Identifier => {
                self.process_identifier(arena, idx);
            }
            kind => return Err(ResolveError::UnexpectedVisit(kind)),
        }
        Ok(())
    }

    fn leave_node(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), ResolveError> {
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        match node.kind {
            SyntaxKind::ClassDef
            | SyntaxKind::Block
            | SyntaxKind::MethodDef
            | SyntaxKind::CtorDef => self.frames.pop(),
            SyntaxKind::ParameterDef | SyntaxKind::VariableDef | SyntaxKind::Identifier => Ok(()),
            kind => Err(ResolveError::UnexpectedLeave(kind)),
        }
    }

    fn finish_tree(&mut self) -> Result<(), ResolveError> {
        let depth = self.frames.depth();
        if depth != 1 {
            return Err(ResolveError::UnbalancedTraversal { depth });
        }
        Ok(())
    }
}

/// Run the check over one tree, collecting findings into a fresh vector.
pub fn run_check(
    arena: &NodeArena,
    root: NodeIndex,
    targets: CheckTargets,
) -> Result<Vec<Finding>, ResolveError> {
    let mut check = RequireThisCheck::new(targets, Vec::new());
    TreeWalker::walk(arena, root, &mut check)?;
    Ok(check.into_sink())
}
