//! Semtok: semantic token classification for type-checked Python.
//!
//! Classifies the identifiers of a parsed, type-checked Python file into
//! editor semantic tokens (`namespace`, `class`, `function`, `method`,
//! `variable`, `keyword`, `type`, `typeParameter`, with `definition`,
//! `async` and `readonly` modifiers).

// Core infrastructure - re-exported from semtok-core
pub use semtok_core::error;
pub use semtok_core::legend;
pub use semtok_core::output;
pub use semtok_core::token;

// Syntax tree and classifier
pub use semtok_cst as cst;
pub use semtok_python as python;

// Documents and the CLI front door
pub mod cli;
pub mod document;

pub use document::Document;
