//! CLI front door.
//!
//! Provides the command implementations behind the `semtok` binary:
//! - `classify` - Classify one document, a directory of documents, or stdin
//! - `legend` - Report the token legend
//!
//! ## Error Handling
//!
//! All functions return `Result<T, SemtokError>`. The caller (typically
//! `main.rs`) turns errors into a JSON error response and exit code.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use walkdir::WalkDir;

use semtok_core::output::{
    BatchResponse, ClassifyResponse, FileTokens, LegendResponse, TokenPayload,
};
use semtok_core::{Legend, SemtokError, TokenItem};

use crate::document::Document;

/// Token representation in classify output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Token kinds and modifiers by name.
    #[default]
    Tokens,
    /// Legend indices and modifier bitsets.
    Encoded,
}

/// Options for the classify command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub format: OutputFormat,
    /// Consult the document's type facts. Without them only declaration
    /// names, imports and the `type` keyword are classified.
    pub use_types: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        ClassifyOptions {
            format: OutputFormat::Tokens,
            use_types: true,
        }
    }
}

/// Result of the classify command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassifyOutput {
    Single(ClassifyResponse),
    Batch(BatchResponse),
}

/// Render tokens in the requested format.
pub fn token_payload(tokens: Vec<TokenItem>, format: OutputFormat) -> TokenPayload {
    match format {
        OutputFormat::Tokens => TokenPayload::Tokens { tokens },
        OutputFormat::Encoded => {
            let legend = Legend::standard();
            let data = legend.encode_all(&tokens);
            TokenPayload::Encoded { legend, data }
        }
    }
}

/// Classify a single document.
pub fn classify_document(doc: &Document, options: &ClassifyOptions) -> TokenPayload {
    token_payload(doc.classify(options.use_types), options.format)
}

/// Classify the document(s) at `path`, or read one from `stdin` when `path`
/// is `None` or `-`.
///
/// A directory is searched recursively for `*.json` documents; results are
/// sorted by path relative to the directory.
pub fn run_classify(
    path: Option<&Path>,
    stdin: impl Read,
    options: &ClassifyOptions,
) -> Result<ClassifyOutput, SemtokError> {
    let path = path.filter(|p| p.as_os_str() != "-");
    let Some(path) = path else {
        let doc = Document::read_from(stdin)?;
        let payload = classify_document(&doc, options);
        return Ok(ClassifyOutput::Single(ClassifyResponse::new(None, payload)));
    };

    if path.is_dir() {
        return run_classify_dir(path, options).map(ClassifyOutput::Batch);
    }

    let doc = Document::load(path)?;
    let payload = classify_document(&doc, options);
    tracing::info!(path = %path.display(), tokens = payload.len(), "classified");
    Ok(ClassifyOutput::Single(ClassifyResponse::new(
        Some(path.display().to_string()),
        payload,
    )))
}

fn run_classify_dir(root: &Path, options: &ClassifyOptions) -> Result<BatchResponse, SemtokError> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let rel_path = match path.strip_prefix(root) {
            Ok(p) => p.to_string_lossy().to_string(),
            Err(_) => continue,
        };
        documents.push((rel_path, path.to_path_buf()));
    }

    // Sort for deterministic output.
    documents.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut files = Vec::with_capacity(documents.len());
    for (rel_path, path) in documents {
        let doc = Document::load(&path).map_err(|e| match e {
            SemtokError::InvalidDocument {
                message,
                line,
                column,
            } => SemtokError::InvalidDocument {
                message: format!("{}: {}", rel_path, message),
                line,
                column,
            },
            other => other,
        })?;
        let payload = classify_document(&doc, options);
        tracing::debug!(path = %rel_path, tokens = payload.len(), "classified");
        files.push(FileTokens {
            path: rel_path,
            payload,
        });
    }
    tracing::info!(root = %root.display(), files = files.len(), "classified directory");
    Ok(BatchResponse::new(files))
}

/// The legend clients use to decode `encoded` output.
pub fn run_legend() -> LegendResponse {
    LegendResponse::new(Legend::standard())
}
