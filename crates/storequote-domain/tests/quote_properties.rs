use proptest::prelude::*;
use storequote_domain::model::{HouseholdTariff, Tariff};
use storequote_domain::service::{calculate_quote, price_household};
use storequote_types::{
    BoxCounts, DocumentBoxCount, DocumentBoxRequirement, DocumentRequest, DocumentStorageType,
    InventoryRequest, ItemCounts, QuoteRequest, StorageDuration,
};

fn counts() -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (0u32..40, 0u32..40, 0u32..40, 0u32..40)
}

fn inventory(furniture: (u32, u32, u32, u32), boxes: (u32, u32, u32, u32), distance: f64) -> InventoryRequest {
    InventoryRequest::new(StorageDuration::OneToThreeMonths)
        .with_furniture(ItemCounts::new(furniture.0, furniture.1, furniture.2, furniture.3))
        .with_boxes(BoxCounts::new(boxes.0, boxes.1, boxes.2, boxes.3))
        .with_distance_km(distance)
}

#[test]
fn test_canonical_tariff_validates() {
    assert!(Tariff::default().validate().is_ok());
}

#[test]
fn test_document_over_hundred_bucket() {
    let request = QuoteRequest::Document(DocumentRequest::new(
        StorageDuration::ThreeToSixMonths,
        DocumentBoxRequirement::NeedFresh,
        DocumentStorageType::Rack,
        DocumentBoxCount::OverHundred,
    ));
    let result = calculate_quote(&Tariff::default(), &request).unwrap();
    let quote = result.as_document().unwrap();
    assert_eq!(quote.box_count, 500);
    assert_eq!(quote.box_rental, 25 * 500);
    assert_eq!(quote.box_charges, 75 * 500);
}

proptest! {
    #[test]
    fn prop_adding_an_item_never_lowers_rental_packing_or_volume(
        furniture in counts(),
        boxes in counts(),
        distance in 0.0f64..80.0,
        slot in 0usize..8,
    ) {
        let tariff = HouseholdTariff::default();
        let base = inventory(furniture, boxes, distance);
        let mut more = base;
        match slot {
            0 => more.furniture.extra_large += 1,
            1 => more.furniture.large += 1,
            2 => more.furniture.medium += 1,
            3 => more.furniture.small += 1,
            4 => more.boxes.luggage += 1,
            5 => more.boxes.kitchen += 1,
            6 => more.boxes.clothes += 1,
            _ => more.appliances.medium += 1,
        }

        let before = price_household(&tariff, &base);
        let after = price_household(&tariff, &more);
        prop_assert!(after.rental_charges >= before.rental_charges);
        prop_assert!(after.packing_material_charges >= before.packing_material_charges);
        prop_assert!(after.total_volume >= before.total_volume);
        prop_assert!(after.labour_count >= before.labour_count);
    }

    #[test]
    fn prop_pickup_is_packing_labour_and_vehicle(
        furniture in counts(),
        boxes in counts(),
        distance in 0.0f64..200.0,
    ) {
        let quote = price_household(&HouseholdTariff::default(), &inventory(furniture, boxes, distance));
        prop_assert_eq!(
            quote.pickup_charges,
            quote.packing_material_charges + quote.labour_cost + quote.vehicle_cost
        );
        prop_assert_eq!(quote.labour_cost, quote.labour_count as u64 * 800);
        prop_assert!((2..=4).contains(&quote.labour_count));
    }

    #[test]
    fn prop_calculation_is_deterministic(
        furniture in counts(),
        boxes in counts(),
        distance in 0.0f64..200.0,
    ) {
        let tariff = Tariff::default();
        let request = QuoteRequest::Household(inventory(furniture, boxes, distance));
        prop_assert_eq!(calculate_quote(&tariff, &request), calculate_quote(&tariff, &request));
    }

    #[test]
    fn prop_vehicle_cost_grows_with_distance(
        furniture in counts(),
        near in 0.0f64..100.0,
        extra in 0.0f64..100.0,
    ) {
        let tariff = HouseholdTariff::default();
        let close = price_household(&tariff, &inventory(furniture, (0, 0, 0, 0), near));
        let far = price_household(&tariff, &inventory(furniture, (0, 0, 0, 0), near + extra));
        prop_assert!(far.vehicle_cost >= close.vehicle_cost);
    }
}
