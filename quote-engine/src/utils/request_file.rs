//! Quote request files
//!
//! JSON envelopes as archived by the order store. Reading them is the only
//! I/O the quote tool does; the engine itself only sees parsed values.

use anyhow::Context;
use shared::quote::QuoteRequest;
use std::path::Path;

/// Read and parse a request file
pub fn load_request(path: &Path) -> anyhow::Result<QuoteRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let request = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file {}", path.display()))?;
    Ok(request)
}

/// Write a request file (pretty JSON)
pub fn save_request(path: &Path, request: &QuoteRequest) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(request).context("Failed to serialize request")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write request file {}", path.display()))?;
    Ok(())
}
