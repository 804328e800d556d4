//! Legend mapping between token names and wire indices.
//!
//! Editors negotiate a legend once per session: an ordered list of token type
//! names and an ordered list of modifier names. A token is then sent as an
//! index into the first list and a bitset over the second. This module only
//! maps names to indices; positions stay absolute.

use serde::{Deserialize, Serialize};

use crate::token::{TokenItem, TokenKind, TokenModifier};

/// Ordered token type and modifier names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub token_types: Vec<String>,
    pub token_modifiers: Vec<String>,
}

impl Legend {
    /// The legend matching [`TokenKind::legend_index`] and
    /// [`crate::token::ModifierSet::to_bitset`].
    pub fn standard() -> Self {
        Legend {
            token_types: TokenKind::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            token_modifiers: TokenModifier::ALL
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }

    /// Encode a token against this legend.
    ///
    /// Returns `None` if the token's kind or one of its modifiers is not
    /// listed, or a modifier sits past bit 31 of the mask. Both only happen
    /// with a hand-built legend.
    pub fn encode(&self, item: &TokenItem) -> Option<EncodedToken> {
        let token_type = self
            .token_types
            .iter()
            .position(|name| name == item.kind.as_str())? as u32;
        let mut token_modifiers = 0u32;
        for modifier in item.modifiers.modifiers() {
            let bit = self
                .token_modifiers
                .iter()
                .position(|name| name == modifier.as_str())?;
            token_modifiers |= 1u32.checked_shl(u32::try_from(bit).ok()?)?;
        }
        Some(EncodedToken {
            start: item.start,
            length: item.length,
            token_type,
            token_modifiers,
        })
    }

    /// Encode a token sequence, dropping tokens the legend cannot express.
    pub fn encode_all(&self, items: &[TokenItem]) -> Vec<EncodedToken> {
        items.iter().filter_map(|item| self.encode(item)).collect()
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::standard()
    }
}

/// A token with its kind and modifiers replaced by legend indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedToken {
    pub start: u32,
    pub length: u32,
    pub token_type: u32,
    pub token_modifiers: u32,
}
