//! Volume-additive pricing used for business storage.
//!
//! Business rates are provisional; this path stays until a business
//! tariff is published.

use storequote_types::{GenericBreakdown, GenericQuote, InventoryRequest, StorageType};

use super::{round_money, round_volume};
use crate::model::GenericTariff;

pub fn price_generic(
    tariff: &GenericTariff,
    storage_type: StorageType,
    request: &InventoryRequest,
) -> GenericQuote {
    let furniture_volume = tariff.furniture_volume.weighted_sum(&request.furniture);
    let appliance_volume = tariff.appliance_volume.weighted_sum(&request.appliances);
    let box_volume = tariff.box_volume.weighted_sum(&request.boxes);
    let volume = furniture_volume + appliance_volume + box_volume;

    let duration_multiplier = tariff.duration_multipliers.get(request.duration);
    let factor = tariff.base_rate_per_cft
        * duration_multiplier
        * tariff.storage_type_multipliers.get(storage_type);

    let monthly_rate = volume * factor;
    let total_cost = monthly_rate * tariff.months_billed.get(request.duration);

    log::debug!(
        "generic ({}): {:.1} cft, monthly {:.2}, total {:.2}",
        storage_type,
        volume,
        monthly_rate,
        total_cost
    );

    GenericQuote {
        total_items: request
            .furniture
            .total()
            .saturating_add(request.appliances.total())
            .saturating_add(request.boxes.total()),
        estimated_volume: round_volume(volume),
        monthly_rate: round_money(monthly_rate),
        total_cost: round_money(total_cost),
        breakdown: GenericBreakdown {
            furniture: round_money(furniture_volume * factor),
            appliances: round_money(appliance_volume * factor),
            boxes: round_money(box_volume * factor),
            base_rate: round_money(volume * tariff.base_rate_per_cft),
            duration_multiplier,
        },
    }
}
