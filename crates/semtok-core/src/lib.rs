//! Core infrastructure for semtok.
//!
//! This crate provides the language-agnostic pieces shared by the classifier
//! and its front ends:
//! - Token items, kinds and modifier sets
//! - Legend mapping from token names to wire indices
//! - Error types and exit codes
//! - JSON output types for CLI responses

pub mod error;
pub mod legend;
pub mod output;
pub mod token;

pub use error::{OutputErrorCode, SemtokError};
pub use legend::{EncodedToken, Legend};
pub use token::{ModifierSet, TokenItem, TokenKind, TokenModifier};
