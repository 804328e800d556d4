// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax tree node shapes.
//!
//! The tree is produced by an upstream parser/binder and is read-only here.
//! Every identifier is a [`Name`] carrying a [`NodeId`] so that facts computed
//! elsewhere (types, symbols) can be keyed by node identity.
//!
//! All nodes deserialize from JSON; enums are tagged by a `"kind"` field in
//! `snake_case`.

mod expression;
mod statement;

pub use expression::*;
pub use statement::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identity and position
// ============================================================================

/// Stable identity of a node within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Generator for assigning sequential [`NodeId`]s.
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    next_id: u32,
}

impl NodeIdGenerator {
    /// Create a new generator starting from NodeId(0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next NodeId.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Get the current count of generated NodeIds.
    pub fn count(&self) -> u32 {
        self.next_id
    }
}

/// Half-open character range `[start, end)` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span. An inverted range is clamped to empty.
    pub fn new(start: u32, end: u32) -> Self {
        Span {
            start,
            end: end.max(start),
        }
    }

    /// Length of the span in characters.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ============================================================================
// Names and the module root
// ============================================================================

/// An identifier occurrence.
///
/// The span of a name is its own text: it starts at `start` and is as long as
/// `value` in characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    pub id: NodeId,
    pub value: String,
    pub start: u32,
}

impl Name {
    pub fn new(id: NodeId, value: impl Into<String>, start: u32) -> Self {
        Name {
            id,
            value: value.into(),
            start,
        }
    }

    /// Length of the identifier in characters.
    pub fn length(&self) -> u32 {
        self.value.chars().count() as u32
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.start + self.length())
    }
}

/// A dotted module path such as `os.path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DottedName {
    pub parts: Vec<Name>,
}

impl DottedName {
    pub fn new(parts: Vec<Name>) -> Self {
        DottedName { parts }
    }

    /// The path joined with dots.
    pub fn dotted(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.value.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Root of a parsed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl Module {
    pub fn new(body: Vec<Statement>) -> Self {
        Module { body }
    }
}
