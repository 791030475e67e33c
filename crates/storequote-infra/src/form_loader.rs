//! JSON loaders for wizard submissions

use std::fs;
use std::path::Path;

use storequote_types::{CallbackRequest, Error, QuoteFormData, Result};

/// Parse a wizard form from JSON text
pub fn parse_form(json: &str) -> Result<QuoteFormData> {
    Ok(serde_json::from_str(json)?)
}

/// Load a wizard form from a JSON file
pub fn load_form(path: &Path) -> Result<QuoteFormData> {
    let content = read(path)?;
    parse_form(&content).map_err(|e| match e {
        Error::Json(inner) => Error::InvalidForm(format!("{}: {}", path.display(), inner)),
        other => other,
    })
}

/// Load and validate a call-back request from a JSON file
pub fn load_callback(path: &Path) -> Result<CallbackRequest> {
    let content = read(path)?;
    let request: CallbackRequest = serde_json::from_str(&content)?;
    Ok(request.validated()?)
}

fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}
