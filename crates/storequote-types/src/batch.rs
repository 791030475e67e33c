//! Batch quoting records

use serde::{Deserialize, Serialize};

use crate::{QuoteResult, StorageDuration, StorageType};

/// One quoted form file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Unique identifier
    pub id: String,
    /// Form file path
    pub form_path: String,
    /// When the form was quoted
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub storage_type: Option<StorageType>,
    #[serde(default)]
    pub duration: Option<StorageDuration>,
    /// None for callback requests and failures
    #[serde(default)]
    pub quote: Option<QuoteResult>,
    /// Failure message when the form could not be quoted
    #[serde(default)]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn new(form_path: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            form_path: form_path.into(),
            timestamp: chrono::Utc::now(),
            customer_name: String::new(),
            storage_type: None,
            duration: None,
            quote: None,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Batch quoting results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResults {
    pub entries: Vec<BatchEntry>,
    /// Total forms processed
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl BatchResults {
    /// Build totals from the collected entries
    pub fn from_entries(
        entries: Vec<BatchEntry>,
        started_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        let successful = entries.iter().filter(|e| e.is_success()).count();
        Self {
            total_processed: entries.len(),
            successful,
            failed: entries.len() - successful,
            entries,
            started_at,
            completed_at: chrono::Utc::now(),
        }
    }

    /// Count of quoted entries per result branch, in first-seen order
    pub fn branch_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for quote in self.entries.iter().filter_map(|e| e.quote.as_ref()) {
            let label = quote.branch_label();
            match counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label, 1)),
            }
        }
        counts
    }
}
