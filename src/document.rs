//! Documents: a syntax tree plus the type facts captured for it.
//!
//! A document is the unit the CLI classifies. It is plain JSON:
//!
//! ```json
//! {
//!   "source": "def run(): pass",
//!   "module": {"body": [{"kind": "function_def", "name": {"id": 0, "value": "run", "start": 4}}]},
//!   "types": {"types": {}, "bindings": {}, "symbols": []}
//! }
//! ```
//!
//! `source` is optional and only used to show token text; `types` may be
//! omitted, in which case no name resolves to a type.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use semtok_core::{SemtokError, TokenItem};
use semtok_cst::Module;
use semtok_python::{SemanticTokensWalker, TypeEvaluator, TypeSnapshot};

/// A parsed, type-checked file ready for classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The source text the tree was parsed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub module: Module,
    #[serde(default)]
    pub types: TypeSnapshot,
}

impl Document {
    pub fn new(module: Module, types: TypeSnapshot) -> Self {
        Document {
            source: None,
            module,
            types,
        }
    }

    /// Decode a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SemtokError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a document from a reader (e.g. stdin).
    pub fn read_from(reader: impl Read) -> Result<Self, SemtokError> {
        Ok(serde_json::from_reader(io::BufReader::new(reader))?)
    }

    /// Load a document from a file.
    pub fn load(path: &Path) -> Result<Self, SemtokError> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SemtokError::file_not_found(path.display().to_string()),
            _ => SemtokError::Io(e),
        })?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "loaded document");
        Self::from_json(&json)
    }

    /// Classify the document's names.
    ///
    /// With `use_types` false the walk runs without a type engine and only
    /// syntactic tokens are produced.
    pub fn classify(&self, use_types: bool) -> Vec<TokenItem> {
        let evaluator: Option<&dyn TypeEvaluator> = if use_types {
            Some(&self.types)
        } else {
            None
        };
        SemanticTokensWalker::collect(&self.module, evaluator)
    }

    /// The source text a token covers, if the document carries its source.
    pub fn token_text(&self, token: &TokenItem) -> Option<String> {
        let source = self.source.as_ref()?;
        let text: String = source
            .chars()
            .skip(token.start as usize)
            .take(token.length as usize)
            .collect();
        (text.chars().count() == token.length as usize).then_some(text)
    }
}
