//! Interface to the type engine.
//!
//! Classification never infers types itself. It asks a [`TypeEvaluator`] for
//! the facts it needs, one node at a time, and treats every missing answer
//! as "no opinion".

use serde::{Deserialize, Serialize};

use semtok_cst::{Name, NodeId};

use crate::types::Type;

/// Identity of a symbol (a binding) in the engine's symbol tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u32);

/// Result of resolving a name to the symbol it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolLookup {
    pub symbol: SymbolId,
}

/// The explicitly declared type of a symbol, if it has one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredType {
    pub ty: Option<Type>,
}

/// Type and symbol facts for one analyzed file.
///
/// Implementations may compute answers lazily but must answer synchronously
/// and consistently for the duration of a walk.
pub trait TypeEvaluator {
    /// The inferred type of an expression node, `None` if not evaluated.
    fn type_of(&self, node: NodeId) -> Option<Type>;

    /// Resolve `name` as seen from `node`, searching enclosing scopes.
    ///
    /// With `is_outer_scope`, the lookup starts in the scope enclosing the
    /// node's own scope.
    fn look_up_symbol_recursive(
        &self,
        node: &Name,
        name: &str,
        is_outer_scope: bool,
    ) -> Option<SymbolLookup>;

    /// The declared type of a symbol; `ty` is `None` when the symbol is only
    /// ever inferred.
    fn declared_type_of_symbol(&self, symbol: SymbolId) -> DeclaredType;

    /// Whether the symbol is declared `Final`.
    fn is_final_variable(&self, symbol: SymbolId) -> bool;
}
