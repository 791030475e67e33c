//! Quote results produced by the calculator

use serde::{Deserialize, Serialize};

/// Household quote: monthly rental plus one-time pickup logistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdQuote {
    /// Recurring monthly rental
    pub rental_charges: u64,
    pub packing_material_charges: u64,
    /// Cubic feet
    pub total_volume: u32,
    pub recommended_vehicle: String,
    pub vehicle_cost: u64,
    pub labour_count: u32,
    pub labour_cost: u64,
    /// Packing + labour + vehicle; rental is not included
    pub pickup_charges: u64,

    // Fields kept for renderers written against the generic layout
    pub total_items: u32,
    pub estimated_volume: u32,
    pub monthly_rate: u64,
    pub total_cost: u64,
}

/// Document storage quote priced per box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentQuote {
    /// Display label, e.g. "Rack Storage"
    pub storage_type: String,
    /// Rate-matrix period, e.g. "1-3M"
    pub duration_category: String,
    /// Representative box count of the chosen bucket
    pub box_count: u32,
    /// Per box per month
    pub box_rate: f64,
    pub box_rental: u64,
    /// One-time fresh-box price per box
    pub box_charge_rate: f64,
    /// Zero unless fresh boxes were requested
    pub box_charges: u64,
    pub total_storage_cost: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericBreakdown {
    pub furniture: u64,
    pub appliances: u64,
    pub boxes: u64,
    pub base_rate: u64,
    pub duration_multiplier: f64,
}

/// Volume-additive quote used for business storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericQuote {
    pub total_items: u32,
    pub estimated_volume: u32,
    pub monthly_rate: u64,
    pub total_cost: u64,
    pub breakdown: GenericBreakdown,
}

/// Calculator output; exactly one branch per quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "branch", rename_all = "lowercase")]
pub enum QuoteResult {
    Household(HouseholdQuote),
    Document(DocumentQuote),
    Generic(GenericQuote),
}

impl QuoteResult {
    pub fn branch_label(&self) -> &'static str {
        match self {
            QuoteResult::Household(_) => "household",
            QuoteResult::Document(_) => "document",
            QuoteResult::Generic(_) => "generic",
        }
    }

    /// Recurring monthly amount
    pub fn monthly_rate(&self) -> u64 {
        match self {
            QuoteResult::Household(q) => q.rental_charges,
            QuoteResult::Document(q) => q.box_rental,
            QuoteResult::Generic(q) => q.monthly_rate,
        }
    }

    /// One-time charges billed on top of storage
    pub fn one_time_charges(&self) -> u64 {
        match self {
            QuoteResult::Household(q) => q.pickup_charges,
            QuoteResult::Document(q) => q.box_charges,
            QuoteResult::Generic(_) => 0,
        }
    }

    /// Headline total as presented to the customer
    pub fn total_cost(&self) -> u64 {
        match self {
            QuoteResult::Household(q) => q.total_cost,
            QuoteResult::Document(q) => q.total_storage_cost,
            QuoteResult::Generic(q) => q.total_cost,
        }
    }

    /// Estimated volume in cubic feet, where the branch measures one
    pub fn estimated_volume(&self) -> Option<u32> {
        match self {
            QuoteResult::Household(q) => Some(q.total_volume),
            QuoteResult::Document(_) => None,
            QuoteResult::Generic(q) => Some(q.estimated_volume),
        }
    }

    pub fn as_household(&self) -> Option<&HouseholdQuote> {
        match self {
            QuoteResult::Household(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&DocumentQuote> {
        match self {
            QuoteResult::Document(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_generic(&self) -> Option<&GenericQuote> {
        match self {
            QuoteResult::Generic(q) => Some(q),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_quote() -> QuoteResult {
        QuoteResult::Document(DocumentQuote {
            storage_type: "Rack Storage".to_string(),
            duration_category: "1-3M".to_string(),
            box_count: 25,
            box_rate: 45.0,
            box_rental: 1125,
            box_charge_rate: 100.0,
            box_charges: 2500,
            total_storage_cost: 3625,
        })
    }

    #[test]
    fn test_result_is_tagged_by_branch() {
        let json = serde_json::to_value(document_quote()).unwrap();
        assert_eq!(json["branch"], "document");
        assert_eq!(json["boxRental"], 1125);
        assert_eq!(json["storageType"], "Rack Storage");
    }

    #[test]
    fn test_document_headline_amounts() {
        let quote = document_quote();
        assert_eq!(quote.monthly_rate(), 1125);
        assert_eq!(quote.one_time_charges(), 2500);
        assert_eq!(quote.total_cost(), 3625);
        assert_eq!(quote.estimated_volume(), None);
        assert!(quote.as_household().is_none());
    }
}
