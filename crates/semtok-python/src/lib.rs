//! Semantic token classification for Python.
//!
//! Given a syntax tree from `semtok-cst` and a [`TypeEvaluator`] answering
//! type and symbol queries for it, [`SemanticTokensWalker`] produces the
//! ordered [`semtok_core::TokenItem`]s an editor uses to color identifiers.
//!
//! # Modules
//!
//! - [`types`]: the closed type model the engine reports
//! - [`evaluator`]: the type engine interface
//! - [`snapshot`]: an in-memory engine built from precomputed tables
//! - [`names`]: naming conventions (constant names)
//! - [`semantic_tokens`]: the classifier

pub mod evaluator;
pub mod names;
pub mod semantic_tokens;
pub mod snapshot;
pub mod types;

pub use evaluator::{DeclaredType, SymbolId, SymbolLookup, TypeEvaluator};
pub use names::is_constant_name;
pub use semantic_tokens::{classify_name, SemanticTokensWalker};
pub use snapshot::{SymbolEntry, TypeSnapshot};
pub use types::{Type, TypeFlags, TypeKind};
