//! Form file scanning and validation

use std::path::{Path, PathBuf};
use storequote_types::{Error, Result};
use walkdir::WalkDir;

/// Check if a path looks like a wizard form export
pub fn is_form_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Validate a form file exists and has a supported extension
pub fn validate_form_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(Error::InvalidForm(format!("{} is not a file", path.display())));
    }

    if !is_form_file(path) {
        return Err(Error::InvalidForm(format!(
            "Unsupported form file: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Scan a directory recursively for form files
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::FileNotFound(dir.display().to_string()));
    }

    if !dir.is_dir() {
        return Err(Error::InvalidForm(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut forms: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_form_file(path))
        .collect();

    // Sort by filename for consistent ordering
    forms.sort_by(|a, b| {
        a.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .cmp(b.file_name().and_then(|n| n.to_str()).unwrap_or(""))
    });

    Ok(forms)
}
