//! Household pricing: monthly rental plus pickup logistics

use storequote_types::{HouseholdQuote, InventoryRequest};

use super::{round_money, round_volume};
use crate::model::{HouseholdTariff, LabourPolicy, PooledInventory, VehicleTier};

/// First tier whose closed interval contains the volume.
///
/// Falls back to the first tier when nothing matches; `None` only for an
/// empty tier list.
pub fn select_vehicle_tier(tiers: &[VehicleTier], volume_cft: u32) -> Option<&VehicleTier> {
    match tiers.iter().find(|tier| tier.carries(volume_cft)) {
        Some(tier) => Some(tier),
        None => {
            log::warn!("no vehicle tier carries {volume_cft} cft, using the first tier");
            tiers.first()
        }
    }
}

/// Crew size for a load.
///
/// Rules apply in order: volume band, extra-large minimum, bulk bump.
pub fn labour_crew(policy: &LabourPolicy, volume_cft: u32, inventory: &PooledInventory) -> u32 {
    let mut crew = if volume_cft <= policy.small_load_max_volume {
        policy.small_load_crew
    } else if volume_cft <= policy.medium_load_max_volume {
        policy.medium_load_crew
    } else {
        policy.large_load_crew
    };

    if inventory.extra_large > 0 && crew < policy.extra_large_min_crew {
        crew = policy.extra_large_min_crew;
    }

    if inventory.total_items() > policy.bulk_item_threshold && crew < policy.bulk_crew_cap {
        crew += 1;
    }

    crew
}

pub fn price_household(tariff: &HouseholdTariff, request: &InventoryRequest) -> HouseholdQuote {
    let inventory = PooledInventory::from_request(request);

    let rental_charges = round_money(tariff.rental.weighted_sum(&inventory));
    let packing_material_charges = round_money(tariff.packing_material.weighted_sum(&inventory));
    let total_volume = round_volume(tariff.volume.weighted_sum(&inventory));

    let (recommended_vehicle, vehicle_cost) = match select_vehicle_tier(&tariff.vehicles, total_volume) {
        Some(tier) => (
            tier.name.clone(),
            round_money(tier.trip_cost(request.distance_km, tariff.included_km)),
        ),
        None => (String::new(), 0),
    };

    let labour_count = labour_crew(&tariff.labour, total_volume, &inventory);
    let labour_cost = round_money(labour_count as f64 * tariff.labour.rate_per_person);

    let pickup_charges = packing_material_charges
        .saturating_add(labour_cost)
        .saturating_add(vehicle_cost);

    log::debug!(
        "household: {} cft, {}, crew {}, pickup {}",
        total_volume,
        recommended_vehicle,
        labour_count,
        pickup_charges
    );

    HouseholdQuote {
        rental_charges,
        packing_material_charges,
        total_volume,
        recommended_vehicle,
        vehicle_cost,
        labour_count,
        labour_cost,
        pickup_charges,
        total_items: inventory.total_items(),
        estimated_volume: total_volume,
        monthly_rate: rental_charges,
        total_cost: rental_charges,
    }
}
