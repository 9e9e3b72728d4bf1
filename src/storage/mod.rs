//! Persistence layer.
//!
//! Loads and saves prediction documents as JSON files. Key order and
//! non-ASCII text are preserved so a write-back only differs where bets
//! were corrected.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Default prediction document path.
pub const DEFAULT_DOCUMENT_FILE: &str = "src/data/allRacesPrediction.json";

/// Load a prediction document from a JSON file.
pub fn load_document(path: Option<&str>) -> Result<Value> {
    let path = path.unwrap_or(DEFAULT_DOCUMENT_FILE);

    let json = std::fs::read_to_string(path)
        .context(format!("Failed to read document from {path}"))?;

    let doc: Value = serde_json::from_str(&json)
        .context(format!("Failed to parse document from {path}"))?;

    info!(path, bytes = json.len(), "Document loaded from disk");
    Ok(doc)
}

/// Save a prediction document as pretty-printed JSON.
pub fn save_document(doc: &Value, path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_DOCUMENT_FILE);
    let json = serde_json::to_string_pretty(doc)
        .context("Failed to serialise document")?;

    std::fs::write(path, &json)
        .context(format!("Failed to write document to {path}"))?;

    debug!(path, bytes = json.len(), "Document saved");
    Ok(())
}

/// Whether a document exists at `path`.
pub fn document_exists(path: Option<&str>) -> bool {
    Path::new(path.unwrap_or(DEFAULT_DOCUMENT_FILE)).exists()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
