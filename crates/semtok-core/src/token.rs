//! Semantic token items.
//!
//! A [`TokenItem`] is the unit of classifier output: one token kind, zero or
//! more modifiers, and the span of source text it colors. Kind and modifier
//! names are the fixed, caller-known sets that [`crate::legend::Legend`] maps
//! to wire indices.

use std::fmt;

use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Token kinds
// ============================================================================

/// The closed set of token kinds the classifier emits.
///
/// Declaration order is legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Namespace,
    Class,
    Function,
    Method,
    Variable,
    Keyword,
    Type,
    TypeParameter,
}

impl TokenKind {
    /// All token kinds, in legend order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Namespace,
        TokenKind::Class,
        TokenKind::Function,
        TokenKind::Method,
        TokenKind::Variable,
        TokenKind::Keyword,
        TokenKind::Type,
        TokenKind::TypeParameter,
    ];

    /// Returns the name used on the wire and in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Namespace => "namespace",
            TokenKind::Class => "class",
            TokenKind::Function => "function",
            TokenKind::Method => "method",
            TokenKind::Variable => "variable",
            TokenKind::Keyword => "keyword",
            TokenKind::Type => "type",
            TokenKind::TypeParameter => "typeParameter",
        }
    }

    /// Position of this kind in the standard legend.
    pub fn legend_index(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Modifiers
// ============================================================================

/// A single token modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenModifier {
    Definition,
    Async,
    Readonly,
}

impl TokenModifier {
    /// All modifiers, in legend order.
    pub const ALL: [TokenModifier; 3] = [
        TokenModifier::Definition,
        TokenModifier::Async,
        TokenModifier::Readonly,
    ];

    /// Returns the name used on the wire and in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenModifier::Definition => "definition",
            TokenModifier::Async => "async",
            TokenModifier::Readonly => "readonly",
        }
    }

    fn flag(self) -> ModifierSet {
        match self {
            TokenModifier::Definition => ModifierSet::DEFINITION,
            TokenModifier::Async => ModifierSet::ASYNC,
            TokenModifier::Readonly => ModifierSet::READONLY,
        }
    }
}

impl fmt::Display for TokenModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

bitflags! {
    /// A set of [`TokenModifier`]s.
    ///
    /// Bit `i` corresponds to the `i`-th modifier of the standard legend, so
    /// [`ModifierSet::to_bitset`] is directly usable as a wire bitset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierSet: u32 {
        const DEFINITION = 1 << 0;
        const ASYNC = 1 << 1;
        const READONLY = 1 << 2;
    }
}

impl ModifierSet {
    /// Set containing a single modifier.
    pub fn of(modifier: TokenModifier) -> Self {
        modifier.flag()
    }

    /// Add a modifier; adding one twice is a no-op.
    pub fn insert_modifier(&mut self, modifier: TokenModifier) {
        self.insert(modifier.flag());
    }

    /// Whether `modifier` is in the set.
    pub fn has(&self, modifier: TokenModifier) -> bool {
        self.contains(modifier.flag())
    }

    /// Iterate modifiers in legend order.
    pub fn modifiers(&self) -> impl Iterator<Item = TokenModifier> + '_ {
        TokenModifier::ALL.into_iter().filter(|m| self.has(*m))
    }

    /// The legend bitset for this set.
    pub fn to_bitset(&self) -> u32 {
        self.bits()
    }
}

impl FromIterator<TokenModifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = TokenModifier>>(iter: I) -> Self {
        let mut set = ModifierSet::empty();
        for modifier in iter {
            set.insert_modifier(modifier);
        }
        set
    }
}

impl Serialize for ModifierSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.bits().count_ones() as usize))?;
        for modifier in self.modifiers() {
            seq.serialize_element(&modifier)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ModifierSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ModifierSeq;

        impl<'de> Visitor<'de> for ModifierSeq {
            type Value = ModifierSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of token modifier names")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ModifierSet, A::Error> {
                let mut set = ModifierSet::empty();
                while let Some(modifier) = seq.next_element::<TokenModifier>()? {
                    set.insert_modifier(modifier);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(ModifierSeq)
    }
}

// ============================================================================
// Token items
// ============================================================================

/// One classified span of source text.
///
/// `start` and `length` are character offsets into the source text the tree
/// was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenItem {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub modifiers: ModifierSet,
    pub start: u32,
    pub length: u32,
}

impl TokenItem {
    /// Create a token item.
    pub fn new(start: u32, length: u32, kind: TokenKind, modifiers: ModifierSet) -> Self {
        TokenItem {
            kind,
            modifiers,
            start,
            length,
        }
    }

    /// Offset one past the last character of the token.
    pub fn end(&self) -> u32 {
        self.start + self.length
    }
}
