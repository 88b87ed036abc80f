//! Lexical scopes and the scope stack.
//!
//! A scope knows only which names were declared in its region, not what
//! they mean; meaning comes from the kind of the scope a name is found in.
//! The stack mirrors the syntactic nesting of the tree being traversed:
//! one permanent Global frame at the bottom, one frame pushed per entered
//! class/method/constructor/block and popped on leave.

use crate::ResolveError;
use rustc_hash::FxHashSet;
use tracing::debug;

/// What kind of syntactic region a scope covers. Determines how a name
/// found there is classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Class,
    Method,
    Block,
}

/// How an identifier occurrence resolved against the active scopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Found in a non-Class scope; a legitimately local reference.
    Local,
    /// Found in the nearest Class scope; an implicit instance access.
    InstanceMember,
    /// Found nowhere; presumed external (import, static, inherited).
    Unresolved,
}

/// One lexical region and the names declared in it.
#[derive(Clone, Debug)]
pub struct LexicalScope {
    kind: ScopeKind,
    names: FxHashSet<String>,
}

impl LexicalScope {
    pub fn new(kind: ScopeKind) -> LexicalScope {
        LexicalScope {
            kind,
            names: FxHashSet::default(),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Record a declared name. Redeclaration is a no-op; whether it was
    /// legal is the surrounding language's concern, not this engine's.
    pub fn declare(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Active scopes, innermost last. Non-empty for its whole lifetime: the
/// Global frame is seeded at construction and never popped.
#[derive(Debug)]
pub struct ScopeStack {
    frames: Vec<LexicalScope>,
}

impl ScopeStack {
    pub fn new() -> ScopeStack {
        ScopeStack {
            frames: vec![LexicalScope::new(ScopeKind::Global)],
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, kind: ScopeKind) {
        debug!(?kind, depth = self.frames.len(), "entering scope");
        self.frames.push(LexicalScope::new(kind));
    }

    /// Pop the innermost scope. Popping the Global frame means the
    /// traversal events were unbalanced; that is a driver bug, not a
    /// lint outcome.
    pub fn pop(&mut self) -> Result<(), ResolveError> {
        if self.frames.len() <= 1 {
            return Err(ResolveError::StackUnderflow);
        }
        let scope = self.frames.pop();
        debug!(kind = ?scope.map(|s| s.kind), depth = self.frames.len(), "leaving scope");
        Ok(())
    }

    /// The innermost scope; declarations are registered here.
    pub fn current_mut(&mut self) -> &mut LexicalScope {
        // frames is never empty: Global is seeded at construction and
        // pop() refuses to remove it.
        self.frames
            .last_mut()
            .unwrap_or_else(|| unreachable!("scope stack holds at least the Global frame"))
    }

    pub fn current(&self) -> &LexicalScope {
        self.frames
            .last()
            .unwrap_or_else(|| unreachable!("scope stack holds at least the Global frame"))
    }

    /// First scope containing `name`, searching innermost to outermost.
    /// The walk order is the shadowing contract: an inner Block binding
    /// hides a same-named instance member in the Class scope outside it.
    pub fn resolve(&self, name: &str) -> Option<&LexicalScope> {
        self.frames.iter().rev().find(|scope| scope.contains(name))
    }

    /// Resolve `name` and classify the occurrence by the kind of the
    /// scope it was found in.
    pub fn classify(&self, name: &str) -> Resolution {
        match self.resolve(name) {
            Some(scope) if scope.kind() == ScopeKind::Class => Resolution::InstanceMember,
            Some(_) => Resolution::Local,
            None => Resolution::Unresolved,
        }
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        ScopeStack::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_is_idempotent() {
        let mut scope = LexicalScope::new(ScopeKind::Block);
        scope.declare("x");
        scope.declare("x");
        assert!(scope.contains("x"));
        assert!(!scope.contains("y"));
    }

    #[test]
    fn fresh_stack_holds_only_global() {
        let stack = ScopeStack::new();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().kind(), ScopeKind::Global);
    }

    #[test]
    fn inner_binding_shadows_class_member() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeKind::Class);
        stack.current_mut().declare("x");
        stack.push(ScopeKind::Method);
        stack.push(ScopeKind::Block);
        stack.current_mut().declare("x");

        // Innermost wins.
        assert_eq!(stack.classify("x"), Resolution::Local);

        stack.pop().unwrap();
        assert_eq!(stack.classify("x"), Resolution::InstanceMember);
    }

    #[test]
    fn unknown_name_is_unresolved() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeKind::Class);
        assert_eq!(stack.classify("imported"), Resolution::Unresolved);
    }

    #[test]
    fn popping_global_underflows() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeKind::Block);
        assert!(stack.pop().is_ok());
        assert_eq!(stack.pop(), Err(ResolveError::StackUnderflow));
        // The Global frame survives the failed pop.
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn global_names_classify_local() {
        let mut stack = ScopeStack::new();
        stack.current_mut().declare("C");
        stack.push(ScopeKind::Class);
        assert_eq!(stack.classify("C"), Resolution::Local);
    }
}
