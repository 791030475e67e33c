//! Quote Service - core use case for pricing wizard submissions
//!
//! Loads a form, applies caller overrides, converts it to a typed request
//! and prices it with the active tariff. Batch quoting runs the same flow
//! over every form in a folder and records failures per file.

use std::path::{Path, PathBuf};

use storequote_domain::model::Tariff;
use storequote_domain::service::calculate_quote;
use storequote_infra::load_form;
use storequote_types::{
    BatchEntry, BatchResults, Error, QuoteFormData, QuoteRequest, QuoteResult, Result,
};

use crate::scanner::validate_form_path;

/// Progress callback: (index, total, current file)
pub type ProgressCallback<'a> = &'a dyn Fn(usize, usize, &Path);

/// Options applied to every quoted form
#[derive(Debug, Clone, Default)]
pub struct QuoteOptions {
    /// Replaces the form's `distanceKm`; negative values count as 0
    pub distance_km: Option<f64>,
}

impl QuoteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    fn apply(&self, form: &mut QuoteFormData) {
        if let Some(km) = self.distance_km {
            form.distance_km = Some(if km.is_finite() { km.max(0.0) } else { 0.0 });
        }
    }
}

/// A priced form
#[derive(Debug, Clone)]
pub struct QuotedForm {
    /// The form after overrides were applied
    pub form: QuoteFormData,
    pub request: QuoteRequest,
    /// `None` for callback submissions
    pub quote: Option<QuoteResult>,
}

/// Prices forms with a fixed tariff
pub struct QuoteService {
    tariff: Tariff,
}

impl QuoteService {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Price an in-memory form
    pub fn quote(&self, form: QuoteFormData, options: &QuoteOptions) -> Result<QuotedForm> {
        let mut form = form;
        options.apply(&mut form);
        let request = QuoteRequest::try_from(&form)?;
        let quote = calculate_quote(&self.tariff, &request);
        Ok(QuotedForm {
            form,
            request,
            quote,
        })
    }

    /// Load and price a form file
    pub fn quote_file(&self, path: &Path, options: &QuoteOptions) -> Result<QuotedForm> {
        validate_form_path(path)?;
        let form = load_form(path)?;
        self.quote(form, options)
    }

    /// Price every file, recording failures instead of stopping
    pub fn quote_batch(
        &self,
        paths: &[PathBuf],
        options: &QuoteOptions,
        progress: Option<ProgressCallback<'_>>,
    ) -> BatchResults {
        let started_at = chrono::Utc::now();
        let total = paths.len();

        let entries = paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                if let Some(callback) = progress {
                    callback(index, total, path);
                }
                self.batch_entry(path, options)
            })
            .collect();

        let results = BatchResults::from_entries(entries, started_at);
        log::info!(
            "batch quoted {} forms: {} ok, {} failed",
            results.total_processed,
            results.successful,
            results.failed
        );
        results
    }

    fn batch_entry(&self, path: &Path, options: &QuoteOptions) -> BatchEntry {
        let mut entry = BatchEntry::new(path.display().to_string());
        match self.quote_file(path, options) {
            Ok(quoted) => {
                entry.customer_name = quoted.form.customer_name;
                entry.storage_type = Some(quoted.form.storage_type);
                entry.duration = quoted.request.duration();
                entry.quote = quoted.quote;
            }
            Err(e) => {
                log::warn!("failed to quote {}: {}", path.display(), e);
                entry.error = Some(e.to_string());
            }
        }
        entry
    }
}

/// Save batch results as pretty JSON
pub fn save_results(results: &BatchResults, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load batch results saved by [`save_results`]
pub fn load_results(path: &Path) -> Result<BatchResults> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
