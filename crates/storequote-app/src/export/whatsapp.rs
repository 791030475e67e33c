//! WhatsApp share message and link

use storequote_types::{Error, QuoteResult, Result};
use url::Url;

use super::format::format_rupees;

/// Customer-side message summarising the quote
pub fn whatsapp_message(quote: &QuoteResult) -> String {
    match quote {
        QuoteResult::Household(q) => format!(
            "Hi! I got a household storage quote for {} cft. Rental: {} + GST per month. \
             Pickup charges: {} (packing material, transportation and labour). \
             Please contact me for booking.",
            q.total_volume,
            format_rupees(q.rental_charges),
            format_rupees(q.pickup_charges)
        ),
        QuoteResult::Document(q) => {
            let mut message = format!(
                "Hi! I got a document storage quote for {} boxes ({}). Monthly rental: {}.",
                q.box_count,
                q.storage_type,
                format_rupees(q.box_rental)
            );
            if q.box_charges > 0 {
                message.push_str(&format!(" Fresh box charges: {}.", format_rupees(q.box_charges)));
            }
            message.push_str(&format!(
                " Total: {}. Please contact me for booking.",
                format_rupees(q.total_storage_cost)
            ));
            message
        }
        QuoteResult::Generic(q) => format!(
            "Hi! I got a storage quote of {} for {} items ({} cubic feet). \
             Monthly rate: {}. Please contact me for booking.",
            format_rupees(q.total_cost),
            q.total_items,
            q.estimated_volume,
            format_rupees(q.monthly_rate)
        ),
    }
}

/// `https://wa.me/<number>?text=<message>`.
///
/// Non-digits are stripped from the number; without a number the link
/// lets the sender pick a chat.
pub fn whatsapp_link(number: Option<&str>, message: &str) -> Result<Url> {
    let digits: String = number
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let mut url = Url::parse(&format!("https://wa.me/{}", digits))
        .map_err(|e| Error::InvalidForm(format!("invalid WhatsApp link: {}", e)))?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storequote_domain::model::Tariff;
    use storequote_domain::service::calculate_quote;
    use storequote_types::{
        DocumentBoxCount, DocumentBoxRequirement, DocumentRequest, DocumentStorageType,
        InventoryRequest, ItemCounts, QuoteRequest, StorageDuration,
    };

    fn household_quote() -> QuoteResult {
        let request = QuoteRequest::Household(
            InventoryRequest::new(StorageDuration::OneToThreeMonths)
                .with_furniture(ItemCounts::new(1, 0, 0, 0))
                .with_distance_km(10.0),
        );
        calculate_quote(&Tariff::default(), &request).unwrap()
    }

    #[test]
    fn test_household_message() {
        let message = whatsapp_message(&household_quote());
        assert!(message.contains("60 cft"));
        assert!(message.contains("Rental: ₹348 + GST per month"));
        assert!(message.contains("Pickup charges: ₹4,202"));
    }

    #[test]
    fn test_document_message_includes_fresh_boxes() {
        let request = QuoteRequest::Document(DocumentRequest::new(
            StorageDuration::OneToThreeMonths,
            DocumentBoxRequirement::NeedFresh,
            DocumentStorageType::Rack,
            DocumentBoxCount::TenToTwentyFive,
        ));
        let quote = calculate_quote(&Tariff::default(), &request).unwrap();
        let message = whatsapp_message(&quote);
        assert!(message.contains("25 boxes (Rack Storage)"));
        assert!(message.contains("Fresh box charges: ₹2,500"));
        assert!(message.contains("Total: ₹3,625"));
    }

    #[test]
    fn test_link_with_number() {
        let url = whatsapp_link(Some("+91 99000-56394"), "Hi & bye").unwrap();
        assert!(url.as_str().starts_with("https://wa.me/919900056394?text="));
        let text: Vec<_> = url.query_pairs().collect();
        assert_eq!(text.len(), 1);
        assert_eq!(text[0].0, "text");
        assert_eq!(text[0].1, "Hi & bye");
    }

    #[test]
    fn test_link_without_number() {
        let message = whatsapp_message(&household_quote());
        let url = whatsapp_link(None, &message).unwrap();
        assert!(url.as_str().starts_with("https://wa.me/?text="));
        let decoded = url.query_pairs().find(|(k, _)| k == "text").map(|(_, v)| v.into_owned());
        assert_eq!(decoded, Some(message));
    }
}
