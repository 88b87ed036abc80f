//! Node-kind taxonomy for the analyzed syntax trees.

use std::fmt;

/// The kinds of syntax nodes the analyzer recognizes.
///
/// The first seven kinds are the ones a check subscribes to and receives
/// enter/leave events for. The remaining kinds only ever appear as parents
/// or siblings when classifying an identifier's syntactic position; the
/// walker descends through them without delivering events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SyntaxKind {
    /// A bare identifier token.
    Identifier,
    /// A local variable or field declaration.
    VariableDef,
    /// A formal parameter declaration.
    ParameterDef,
    /// A class declaration.
    ClassDef,
    /// A method declaration.
    MethodDef,
    /// A constructor declaration.
    CtorDef,
    /// A statement list (method body, or any nested `{ ... }` block).
    Block,

    /// A call expression whose callee is the first child.
    MethodCall,
    /// A dotted access; the member name follows its receiver as a sibling.
    Dot,
    /// A type annotation position.
    TypeRef,
    /// An object-creation expression naming a type.
    New,

    /// The root of a parsed compilation unit.
    Root,
    /// An expression statement wrapper.
    ExprStatement,
    /// An assignment expression.
    Assign,
}

impl SyntaxKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::VariableDef => "VariableDef",
            SyntaxKind::ParameterDef => "ParameterDef",
            SyntaxKind::ClassDef => "ClassDef",
            SyntaxKind::MethodDef => "MethodDef",
            SyntaxKind::CtorDef => "CtorDef",
            SyntaxKind::Block => "Block",
            SyntaxKind::MethodCall => "MethodCall",
            SyntaxKind::Dot => "Dot",
            SyntaxKind::TypeRef => "TypeRef",
            SyntaxKind::New => "New",
            SyntaxKind::Root => "Root",
            SyntaxKind::ExprStatement => "ExprStatement",
            SyntaxKind::Assign => "Assign",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
