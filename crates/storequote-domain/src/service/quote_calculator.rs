//! Branch dispatch for the quote calculator

use storequote_types::{QuoteError, QuoteFormData, QuoteRequest, QuoteResult, StorageType};

use super::{price_document, price_generic, price_household};
use crate::model::Tariff;

/// Price a request with the given tariff.
///
/// Returns `None` for callback requests, which carry nothing to price.
pub fn calculate_quote(tariff: &Tariff, request: &QuoteRequest) -> Option<QuoteResult> {
    match request {
        QuoteRequest::Household(inventory) => Some(QuoteResult::Household(price_household(
            &tariff.household,
            inventory,
        ))),
        QuoteRequest::Document(document) => Some(QuoteResult::Document(price_document(
            &tariff.document,
            document,
        ))),
        QuoteRequest::Business(inventory) => Some(QuoteResult::Generic(price_generic(
            &tariff.generic,
            StorageType::Business,
            inventory,
        ))),
        QuoteRequest::Callback => {
            log::debug!("callback request, no quote");
            None
        }
    }
}

/// Convert a wizard form and price it
pub fn quote_form(tariff: &Tariff, form: &QuoteFormData) -> Result<Option<QuoteResult>, QuoteError> {
    let request = QuoteRequest::try_from(form)?;
    Ok(calculate_quote(tariff, &request))
}
