//! Arena-backed syntax tree with parent links.
//!
//! Nodes are created bottom-up (children before parents), so parent links
//! can be fixed at creation time. Indices are stable; nothing is ever
//! removed from an arena.

use crate::SyntaxKind;
use reqthis_common::Span;
use smallvec::SmallVec;

/// Index of a node in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for "no node".
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    pub const fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }

    pub const fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }
}

/// One syntax node. Identifier nodes additionally carry their text.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    pub span: Span,
    text: Option<Box<str>>,
}

impl Node {
    /// The identifier text, for `Identifier` nodes.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Structural links maintained alongside each node.
#[derive(Clone, Debug)]
struct ExtendedInfo {
    parent: NodeIndex,
    children: SmallVec<[NodeIndex; 4]>,
}

/// Arena owning the nodes of one parsed tree.
#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    extended: Vec<ExtendedInfo>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node whose children already exist in this arena.
    /// Children gain this node as their parent.
    pub fn push_node(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        text: Option<&str>,
        children: &[NodeIndex],
    ) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            span,
            text: text.map(Into::into),
        });
        self.extended.push(ExtendedInfo {
            parent: NodeIndex::NONE,
            children: children.iter().copied().collect(),
        });
        for &child in children {
            self.set_parent(child, idx);
        }
        idx
    }

    /// Convenience for identifier leaves.
    pub fn push_identifier(&mut self, text: &str, span: Span) -> NodeIndex {
        self.push_node(SyntaxKind::Identifier, span, Some(text), &[])
    }

    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(info) = self.extended.get_mut(child.0 as usize) {
            info.parent = parent;
        }
    }

    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    pub fn kind_of(&self, idx: NodeIndex) -> Option<SyntaxKind> {
        self.get(idx).map(|node| node.kind)
    }

    /// Parent of a node, or `NodeIndex::NONE` at the root.
    pub fn parent_of(&self, idx: NodeIndex) -> NodeIndex {
        if idx.is_none() {
            return NodeIndex::NONE;
        }
        self.extended
            .get(idx.0 as usize)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    pub fn children_of(&self, idx: NodeIndex) -> &[NodeIndex] {
        if idx.is_none() {
            return &[];
        }
        self.extended
            .get(idx.0 as usize)
            .map_or(&[], |info| info.children.as_slice())
    }

    /// First direct child of the given kind.
    pub fn find_first_child(&self, idx: NodeIndex, kind: SyntaxKind) -> Option<NodeIndex> {
        self.children_of(idx)
            .iter()
            .copied()
            .find(|&child| self.kind_of(child) == Some(kind))
    }

    /// The sibling immediately preceding `idx` under its parent, if any.
    pub fn previous_sibling(&self, idx: NodeIndex) -> Option<NodeIndex> {
        let parent = self.parent_of(idx);
        if parent.is_none() {
            return None;
        }
        let siblings = self.children_of(parent);
        let pos = siblings.iter().position(|&sib| sib == idx)?;
        if pos == 0 { None } else { Some(siblings[pos - 1]) }
    }

    /// Identifier text of a node, empty for non-identifiers.
    pub fn identifier_text(&self, idx: NodeIndex) -> &str {
        self.get(idx).and_then(|node| node.text()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_fixed_at_creation() {
        let mut arena = NodeArena::new();
        let a = arena.push_identifier("a", Span::new(0, 1));
        let b = arena.push_identifier("b", Span::new(2, 3));
        let dot = arena.push_node(SyntaxKind::Dot, Span::new(0, 3), None, &[a, b]);

        assert_eq!(arena.parent_of(a), dot);
        assert_eq!(arena.parent_of(b), dot);
        assert!(arena.parent_of(dot).is_none());
        assert_eq!(arena.children_of(dot), &[a, b]);
    }

    #[test]
    fn sibling_and_first_child_lookup() {
        let mut arena = NodeArena::new();
        let recv = arena.push_identifier("other", Span::EMPTY);
        let member = arena.push_identifier("x", Span::EMPTY);
        let dot = arena.push_node(SyntaxKind::Dot, Span::EMPTY, None, &[recv, member]);

        assert_eq!(arena.previous_sibling(member), Some(recv));
        assert_eq!(arena.previous_sibling(recv), None);
        assert_eq!(
            arena.find_first_child(dot, SyntaxKind::Identifier),
            Some(recv)
        );
        assert_eq!(arena.find_first_child(dot, SyntaxKind::Block), None);
    }

    #[test]
    fn none_index_is_inert() {
        let arena = NodeArena::new();
        assert!(arena.get(NodeIndex::NONE).is_none());
        assert!(arena.parent_of(NodeIndex::NONE).is_none());
        assert!(arena.children_of(NodeIndex::NONE).is_empty());
        assert_eq!(arena.identifier_text(NodeIndex::NONE), "");
    }
}
