//! Syntax tree model and traversal driver for the reqthis analyzer.
//!
//! This crate provides the host side of the analysis:
//! - `SyntaxKind` - the recognized node-kind taxonomy
//! - `NodeArena` / `NodeIndex` - arena-backed syntax tree with parent links
//! - `TreeWalker` / `SyntaxVisitor` - depth-first pre/post event delivery,
//!   filtered to the visitor's subscribed token set

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod node;
pub use node::{Node, NodeArena, NodeIndex};

pub mod walker;
pub use walker::{SyntaxVisitor, TreeWalker};
