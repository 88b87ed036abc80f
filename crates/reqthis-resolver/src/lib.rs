//! Lexical scope-resolution engine for the require-this rule.
//!
//! Detects references to instance members (fields and methods) written
//! without an explicit `this.` qualifier. The engine is a best-effort
//! single-pass scope tracker: a stack of declaration scopes is built while
//! the tree is walked, and every bare identifier occurrence is classified
//! as local, instance member, or unresolved/external. Static members,
//! catch parameters, inherited members, and cross-file resolution are out
//! of scope by design; unresolved names are presumed external.

pub mod scope;
pub use scope::{LexicalScope, Resolution, ScopeKind, ScopeStack};

pub mod error;
pub use error::ResolveError;

pub mod finding;
pub use finding::{Finding, FindingKind, FindingSink, MemberKind};

pub mod config;
pub use config::CheckTargets;

pub mod check;
pub use check::{RequireThisCheck, run_check};
