//! An in-memory type engine.
//!
//! [`TypeSnapshot`] answers [`TypeEvaluator`] queries from plain tables
//! captured after analysis: the type of each evaluated node, the symbol each
//! name node resolves to, and per-symbol declaration facts. It is what the
//! CLI loads from a document and what tests build by hand.
//!
//! Scope resolution has already happened when a snapshot is taken, so
//! lookups go straight through the node's recorded binding; the requested
//! name must still match the symbol's name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use semtok_cst::{Name, NodeId};

use crate::evaluator::{DeclaredType, SymbolId, SymbolLookup, TypeEvaluator};
use crate::types::Type;

/// Declaration facts for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub name: String,
    /// Explicit annotation, if the symbol has one.
    pub declared_type: Option<Type>,
    #[serde(default)]
    pub is_final: bool,
}

/// Type and symbol tables for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSnapshot {
    /// Inferred type per node.
    #[serde(default)]
    types: BTreeMap<NodeId, Type>,
    /// Symbol each name node resolves to.
    #[serde(default)]
    bindings: BTreeMap<NodeId, SymbolId>,
    /// Symbol table, indexed by [`SymbolId`].
    #[serde(default)]
    symbols: Vec<SymbolEntry>,
}

impl TypeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the inferred type of a node, replacing any previous one.
    pub fn set_type(&mut self, node: NodeId, ty: Type) {
        self.types.insert(node, ty);
    }

    /// Builder form of [`TypeSnapshot::set_type`].
    pub fn with_type(mut self, node: NodeId, ty: Type) -> Self {
        self.set_type(node, ty);
        self
    }

    /// Add a symbol and return its id.
    pub fn add_symbol(
        &mut self,
        name: impl Into<String>,
        declared_type: Option<Type>,
        is_final: bool,
    ) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(SymbolEntry {
            name: name.into(),
            declared_type,
            is_final,
        });
        id
    }

    /// Resolve a name node to a symbol.
    pub fn bind(&mut self, node: NodeId, symbol: SymbolId) {
        self.bindings.insert(node, symbol);
    }

    pub fn symbol(&self, symbol: SymbolId) -> Option<&SymbolEntry> {
        self.symbols.get(symbol.0 as usize)
    }

    /// Number of nodes with a recorded type.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

impl TypeEvaluator for TypeSnapshot {
    fn type_of(&self, node: NodeId) -> Option<Type> {
        self.types.get(&node).cloned()
    }

    fn look_up_symbol_recursive(
        &self,
        node: &Name,
        name: &str,
        _is_outer_scope: bool,
    ) -> Option<SymbolLookup> {
        let symbol = *self.bindings.get(&node.id)?;
        let entry = self.symbol(symbol)?;
        (entry.name == name).then_some(SymbolLookup { symbol })
    }

    fn declared_type_of_symbol(&self, symbol: SymbolId) -> DeclaredType {
        DeclaredType {
            ty: self.symbol(symbol).and_then(|s| s.declared_type.clone()),
        }
    }

    fn is_final_variable(&self, symbol: SymbolId) -> bool {
        self.symbol(symbol).is_some_and(|s| s.is_final)
    }
}
