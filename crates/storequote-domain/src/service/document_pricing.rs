//! Document storage pricing

use storequote_types::{DocumentBoxRequirement, DocumentQuote, DocumentRequest};

use super::round_money;
use crate::model::{DocumentTariff, RateColumn, StoragePeriod};

pub fn price_document(tariff: &DocumentTariff, request: &DocumentRequest) -> DocumentQuote {
    let period = StoragePeriod::from(request.duration);
    let column = RateColumn::from(request.box_count);

    let box_rate = tariff
        .rates
        .rate(request.storage_type, period, column)
        .unwrap_or_else(|| {
            log::warn!(
                "no document rate for {:?}/{}/{}, using default {}",
                request.storage_type,
                period,
                request.box_count.as_str(),
                tariff.default_box_rate
            );
            tariff.default_box_rate
        });

    let box_count = tariff.representative_counts.get(request.box_count);
    let box_rental = round_money(box_rate * box_count as f64);

    let box_charge_rate = tariff.fresh_box_rates.get(request.box_count);
    let box_charges = match request.box_requirement {
        DocumentBoxRequirement::NeedFresh => round_money(box_charge_rate * box_count as f64),
        DocumentBoxRequirement::ReadyToShip => 0,
    };

    log::debug!(
        "document: {} boxes at {} ({}), fresh boxes {}",
        box_count,
        box_rate,
        period,
        box_charges
    );

    DocumentQuote {
        storage_type: request.storage_type.label().to_string(),
        duration_category: period.label().to_string(),
        box_count,
        box_rate,
        box_rental,
        box_charge_rate,
        box_charges,
        total_storage_cost: box_rental.saturating_add(box_charges),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BucketTable, DocumentRateMatrix};
    use storequote_types::{DocumentBoxCount, DocumentStorageType, StorageDuration};

    fn request(
        duration: StorageDuration,
        requirement: DocumentBoxRequirement,
        storage_type: DocumentStorageType,
        count: DocumentBoxCount,
    ) -> DocumentRequest {
        DocumentRequest::new(duration, requirement, storage_type, count)
    }

    #[test]
    fn test_rack_small_bucket_with_fresh_boxes() {
        let quote = price_document(
            &DocumentTariff::default(),
            &request(
                StorageDuration::OneToThreeMonths,
                DocumentBoxRequirement::NeedFresh,
                DocumentStorageType::Rack,
                DocumentBoxCount::TenToTwentyFive,
            ),
        );
        assert_eq!(quote.storage_type, "Rack Storage");
        assert_eq!(quote.duration_category, "1-3M");
        assert_eq!(quote.box_count, 25);
        assert_eq!(quote.box_rate, 45.0);
        assert_eq!(quote.box_rental, 1125);
        assert_eq!(quote.box_charge_rate, 100.0);
        assert_eq!(quote.box_charges, 2500);
        assert_eq!(quote.total_storage_cost, 3625);
    }

    #[test]
    fn test_over_hundred_is_billed_as_500_boxes() {
        let quote = price_document(
            &DocumentTariff::default(),
            &request(
                StorageDuration::MoreThanTwelveMonths,
                DocumentBoxRequirement::ReadyToShip,
                DocumentStorageType::Pallet,
                DocumentBoxCount::OverHundred,
            ),
        );
        assert_eq!(quote.box_count, 500);
        assert_eq!(quote.box_rate, 15.0);
        assert_eq!(quote.box_rental, 7500);
        assert_eq!(quote.duration_category, ">12M");
    }

    #[test]
    fn test_ready_to_ship_has_no_box_charges() {
        for count in DocumentBoxCount::ALL {
            let quote = price_document(
                &DocumentTariff::default(),
                &request(
                    StorageDuration::ThreeToSixMonths,
                    DocumentBoxRequirement::ReadyToShip,
                    DocumentStorageType::Rack,
                    count,
                ),
            );
            assert_eq!(quote.box_charges, 0);
            assert_eq!(quote.total_storage_cost, quote.box_rental);
        }
    }

    #[test]
    fn test_legacy_durations_map_to_periods() {
        let tariff = DocumentTariff::default();
        let short = price_document(
            &tariff,
            &request(
                StorageDuration::LessThanOneMonth,
                DocumentBoxRequirement::ReadyToShip,
                DocumentStorageType::Rack,
                DocumentBoxCount::TwentySixToFifty,
            ),
        );
        assert_eq!(short.duration_category, "1-3M");
        assert_eq!(short.box_rental, 40 * 50);

        let long = price_document(
            &tariff,
            &request(
                StorageDuration::MoreThanSixMonths,
                DocumentBoxRequirement::ReadyToShip,
                DocumentStorageType::Rack,
                DocumentBoxCount::TwentySixToFifty,
            ),
        );
        assert_eq!(long.duration_category, "6-12M");
        assert_eq!(long.box_rental, 30 * 50);
    }

    #[test]
    fn test_missing_cell_uses_default_rate() {
        let tariff = DocumentTariff {
            rates: DocumentRateMatrix::empty(),
            ..Default::default()
        };
        let quote = price_document(
            &tariff,
            &request(
                StorageDuration::OneToThreeMonths,
                DocumentBoxRequirement::NeedFresh,
                DocumentStorageType::Pallet,
                DocumentBoxCount::FiftyOneToHundred,
            ),
        );
        assert_eq!(quote.box_rate, 100.0);
        assert_eq!(quote.box_rental, 10_000);
        assert_eq!(quote.box_charges, 8500);
        assert_eq!(quote.total_storage_cost, 18_500);
    }

    #[test]
    fn test_huge_rates_saturate_total() {
        let tariff = DocumentTariff {
            rates: DocumentRateMatrix::empty(),
            default_box_rate: 1e300,
            fresh_box_rates: BucketTable::new(1e300, 1e300, 1e300, 1e300),
            ..Default::default()
        };
        let quote = price_document(
            &tariff,
            &request(
                StorageDuration::MoreThanTwelveMonths,
                DocumentBoxRequirement::NeedFresh,
                DocumentStorageType::Rack,
                DocumentBoxCount::OverHundred,
            ),
        );
        assert_eq!(quote.box_rental, u64::MAX);
        assert_eq!(quote.box_charges, u64::MAX);
        assert_eq!(quote.total_storage_cost, u64::MAX);
    }
}
