//! Depth-first traversal driver.
//!
//! The walker owns the traversal; a visitor only reacts to events. Events
//! are delivered pre-order on enter and post-order on leave, strictly
//! nested, and only for node kinds the visitor subscribed to. The walker
//! still descends through unsubscribed nodes, so a visitor sees e.g. the
//! identifiers inside a call expression without seeing the call itself.

use crate::{NodeArena, NodeIndex, SyntaxKind};

/// Receiver of traversal events for one tree.
pub trait SyntaxVisitor {
    type Error;

    /// Node kinds this visitor wants enter/leave events for.
    fn subscribed_kinds(&self) -> &'static [SyntaxKind];

    /// Called once before the first event of a traversal.
    fn begin_tree(&mut self) {}

    fn visit_node(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), Self::Error>;

    fn leave_node(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), Self::Error>;

    /// Called once after the last event of a traversal that was not aborted.
    fn finish_tree(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Drives one depth-first traversal over an arena-backed tree.
pub struct TreeWalker;

impl TreeWalker {
    /// Walk the tree rooted at `root`, delivering events to `visitor`.
    /// An `Err` from any callback aborts the walk immediately.
    pub fn walk<V: SyntaxVisitor>(
        arena: &NodeArena,
        root: NodeIndex,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.begin_tree();
        Self::walk_node(arena, root, visitor)?;
        visitor.finish_tree()
    }

    fn walk_node<V: SyntaxVisitor>(
        arena: &NodeArena,
        idx: NodeIndex,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        let subscribed = visitor.subscribed_kinds().contains(&node.kind);
        if subscribed {
            visitor.visit_node(arena, idx)?;
        }
        for &child in arena.children_of(idx) {
            Self::walk_node(arena, child, visitor)?;
        }
        if subscribed {
            visitor.leave_node(arena, idx)?;
        }
        Ok(())
    }
}
