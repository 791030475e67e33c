//! Domain services

pub mod document_pricing;
pub mod generic_pricing;
pub mod household_pricing;
pub mod quote_calculator;

pub use document_pricing::price_document;
pub use generic_pricing::price_generic;
pub use household_pricing::{labour_crew, price_household, select_vehicle_tier};
pub use quote_calculator::{calculate_quote, quote_form};

/// Round a rupee amount half away from zero; negative amounts become 0
pub fn round_money(amount: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    amount.round().min(u64::MAX as f64) as u64
}

/// Round a volume in cubic feet the same way as money
pub fn round_volume(cft: f64) -> u32 {
    if !cft.is_finite() || cft <= 0.0 {
        return 0;
    }
    cft.round().min(u32::MAX as f64) as u32
}
