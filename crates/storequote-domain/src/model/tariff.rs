//! Tariff: every rate and threshold the calculator uses

use serde::{Deserialize, Serialize};
use storequote_types::{BoxCounts, ConfigError, ItemCounts, StorageDuration, StorageType};

use super::document_rates::{BucketTable, DocumentRateMatrix};
use super::inventory::PooledInventory;
use super::vehicle_tier::VehicleTier;

/// Per-item value for each pooled household bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketRates {
    pub extra_large: f64,
    pub large: f64,
    pub medium: f64,
    pub small: f64,
    pub luggage: f64,
    pub boxes: f64,
}

impl BucketRates {
    pub fn new(extra_large: f64, large: f64, medium: f64, small: f64, luggage: f64, boxes: f64) -> Self {
        Self {
            extra_large,
            large,
            medium,
            small,
            luggage,
            boxes,
        }
    }

    /// Sum of count × rate over the six buckets, unrounded
    pub fn weighted_sum(&self, inventory: &PooledInventory) -> f64 {
        inventory.extra_large as f64 * self.extra_large
            + inventory.large as f64 * self.large
            + inventory.medium as f64 * self.medium
            + inventory.small as f64 * self.small
            + inventory.luggage as f64 * self.luggage
            + inventory.boxes as f64 * self.boxes
    }

    fn values(&self) -> [f64; 6] {
        [
            self.extra_large,
            self.large,
            self.medium,
            self.small,
            self.luggage,
            self.boxes,
        ]
    }
}

/// Per-item value for each size class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRates {
    pub extra_large: f64,
    pub large: f64,
    pub medium: f64,
    pub small: f64,
}

impl SizeRates {
    pub fn new(extra_large: f64, large: f64, medium: f64, small: f64) -> Self {
        Self {
            extra_large,
            large,
            medium,
            small,
        }
    }

    pub fn weighted_sum(&self, counts: &ItemCounts) -> f64 {
        counts.extra_large as f64 * self.extra_large
            + counts.large as f64 * self.large
            + counts.medium as f64 * self.medium
            + counts.small as f64 * self.small
    }

    fn values(&self) -> [f64; 4] {
        [self.extra_large, self.large, self.medium, self.small]
    }
}

/// Per-box volume by box sub-category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxVolumeRates {
    pub luggage: f64,
    pub kitchen: f64,
    pub clothes: f64,
    pub books_personal: f64,
}

impl BoxVolumeRates {
    pub fn weighted_sum(&self, boxes: &BoxCounts) -> f64 {
        boxes.luggage as f64 * self.luggage
            + boxes.kitchen as f64 * self.kitchen
            + boxes.clothes as f64 * self.clothes
            + boxes.books_personal as f64 * self.books_personal
    }

    fn values(&self) -> [f64; 4] {
        [self.luggage, self.kitchen, self.clothes, self.books_personal]
    }
}

/// Crew sizing rules for household pickups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabourPolicy {
    /// Charge per crew member
    pub rate_per_person: f64,
    /// Loads up to this volume (cft) get the small crew
    pub small_load_max_volume: u32,
    /// Loads up to this volume (cft) get the medium crew; above it, the large crew
    pub medium_load_max_volume: u32,
    pub small_load_crew: u32,
    pub medium_load_crew: u32,
    pub large_load_crew: u32,
    /// Minimum crew once any extra-large item is present
    pub extra_large_min_crew: u32,
    /// Item count above which one more person is added
    pub bulk_item_threshold: u32,
    /// The bulk rule never raises the crew past this size
    pub bulk_crew_cap: u32,
}

impl Default for LabourPolicy {
    fn default() -> Self {
        Self {
            rate_per_person: 800.0,
            small_load_max_volume: 900,
            medium_load_max_volume: 1400,
            small_load_crew: 2,
            medium_load_crew: 3,
            large_load_crew: 4,
            extra_large_min_crew: 3,
            bulk_item_threshold: 60,
            bulk_crew_cap: 4,
        }
    }
}

/// Household branch tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseholdTariff {
    /// Monthly rental per item
    pub rental: BucketRates,
    /// One-time packing material per item
    pub packing_material: BucketRates,
    /// Cubic feet per item
    pub volume: BucketRates,
    /// Contiguous tiers ordered by volume; the last one is unbounded
    pub vehicles: Vec<VehicleTier>,
    /// Kilometres covered by the base fare
    pub included_km: f64,
    pub labour: LabourPolicy,
}

impl Default for HouseholdTariff {
    fn default() -> Self {
        Self {
            rental: BucketRates::new(348.0, 222.0, 136.0, 46.0, 50.0, 65.0),
            packing_material: BucketRates::new(452.0, 288.0, 177.0, 60.0, 50.0, 85.0),
            volume: BucketRates::new(60.0, 40.0, 20.0, 8.0, 5.0, 3.0),
            vehicles: vec![
                VehicleTier::new("Tata Ace", 0, Some(250), 1200.0, 30.0),
                VehicleTier::new("Bolero Pickup", 251, Some(500), 1800.0, 40.0),
                VehicleTier::new("Eicher 14ft", 501, Some(900), 2800.0, 55.0),
                VehicleTier::new("Eicher 17ft", 901, None, 3600.0, 65.0),
            ],
            included_km: 5.0,
            labour: LabourPolicy::default(),
        }
    }
}

/// Document branch tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentTariff {
    /// Monthly rate per box
    pub rates: DocumentRateMatrix,
    /// Used when the matrix has no cell for a request
    pub default_box_rate: f64,
    /// Box count billed for each bucket
    pub representative_counts: BucketTable<u32>,
    /// One-time price per fresh box
    pub fresh_box_rates: BucketTable<f64>,
}

impl Default for DocumentTariff {
    fn default() -> Self {
        Self {
            rates: DocumentRateMatrix::default(),
            default_box_rate: 100.0,
            representative_counts: BucketTable::new(25, 50, 100, 500),
            fresh_box_rates: BucketTable::new(100.0, 90.0, 85.0, 75.0),
        }
    }
}

/// One value per wizard duration, keyed by wire value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationTable<T> {
    #[serde(rename = "<1month")]
    pub less_than_one_month: T,
    #[serde(rename = "1-3months")]
    pub one_to_three_months: T,
    #[serde(rename = "3-6months")]
    pub three_to_six_months: T,
    #[serde(rename = ">6months")]
    pub more_than_six_months: T,
    #[serde(rename = "6-12months")]
    pub six_to_twelve_months: T,
    #[serde(rename = ">12months")]
    pub more_than_twelve_months: T,
}

impl<T: Copy> DurationTable<T> {
    pub fn get(&self, duration: StorageDuration) -> T {
        match duration {
            StorageDuration::LessThanOneMonth => self.less_than_one_month,
            StorageDuration::OneToThreeMonths => self.one_to_three_months,
            StorageDuration::ThreeToSixMonths => self.three_to_six_months,
            StorageDuration::MoreThanSixMonths => self.more_than_six_months,
            StorageDuration::SixToTwelveMonths => self.six_to_twelve_months,
            StorageDuration::MoreThanTwelveMonths => self.more_than_twelve_months,
        }
    }
}

/// Per-category factor applied by the volume-additive formula.
///
/// Dispatch only sends business inventories here; the household and
/// document factors apply when `price_generic` is called directly for
/// those categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageTypeMultipliers {
    pub household: f64,
    pub business: f64,
    pub document: f64,
}

impl StorageTypeMultipliers {
    /// Callback never reaches pricing; it is treated as neutral
    pub fn get(&self, storage_type: StorageType) -> f64 {
        match storage_type {
            StorageType::Household => self.household,
            StorageType::Business => self.business,
            StorageType::Document => self.document,
            StorageType::Callback => 1.0,
        }
    }
}

/// Volume-additive tariff used for business storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenericTariff {
    /// Cubic feet per furniture item
    pub furniture_volume: SizeRates,
    /// Cubic feet per appliance
    pub appliance_volume: SizeRates,
    /// Cubic feet per box
    pub box_volume: BoxVolumeRates,
    /// Monthly charge per cubic foot
    pub base_rate_per_cft: f64,
    pub duration_multipliers: DurationTable<f64>,
    /// Months billed in the total for each duration
    pub months_billed: DurationTable<f64>,
    pub storage_type_multipliers: StorageTypeMultipliers,
}

impl Default for GenericTariff {
    fn default() -> Self {
        Self {
            furniture_volume: SizeRates::new(8.0, 5.0, 3.0, 1.0),
            appliance_volume: SizeRates::new(12.0, 8.0, 5.0, 2.0),
            box_volume: BoxVolumeRates {
                luggage: 3.0,
                kitchen: 2.0,
                clothes: 2.0,
                books_personal: 2.0,
            },
            base_rate_per_cft: 2.5,
            duration_multipliers: DurationTable {
                less_than_one_month: 1.5,
                one_to_three_months: 1.0,
                three_to_six_months: 0.9,
                more_than_six_months: 0.8,
                six_to_twelve_months: 0.8,
                more_than_twelve_months: 0.75,
            },
            months_billed: DurationTable {
                less_than_one_month: 1.0,
                one_to_three_months: 2.5,
                three_to_six_months: 4.5,
                more_than_six_months: 8.0,
                six_to_twelve_months: 9.0,
                more_than_twelve_months: 15.0,
            },
            storage_type_multipliers: StorageTypeMultipliers {
                household: 1.0,
                business: 1.2,
                document: 0.8,
            },
        }
    }
}

/// Complete pricing configuration.
///
/// `Tariff::default()` is the current published tariff. A tariff file
/// may override any section; omitted sections keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    pub household: HouseholdTariff,
    pub document: DocumentTariff,
    pub generic: GenericTariff,
}

impl Tariff {
    /// Check structural rules the calculator relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_vehicles()?;
        self.validate_rates()
    }

    fn validate_vehicles(&self) -> Result<(), ConfigError> {
        let tiers = &self.household.vehicles;
        let first = tiers
            .first()
            .ok_or_else(|| invalid("at least one vehicle tier is required"))?;
        if first.min_volume != 0 {
            return Err(invalid(format!(
                "first vehicle tier '{}' must start at 0 cft, starts at {}",
                first.name, first.min_volume
            )));
        }

        let last_index = tiers.len() - 1;
        for (index, tier) in tiers.iter().enumerate() {
            match (tier.max_volume, index == last_index) {
                (None, false) => {
                    return Err(invalid(format!(
                        "vehicle tier '{}' is unbounded but is not the last tier",
                        tier.name
                    )))
                }
                (Some(max), true) => {
                    return Err(invalid(format!(
                        "last vehicle tier '{}' must be unbounded, ends at {} cft",
                        tier.name, max
                    )))
                }
                (Some(max), false) if max < tier.min_volume => {
                    return Err(invalid(format!(
                        "vehicle tier '{}' ends before it starts",
                        tier.name
                    )))
                }
                _ => {}
            }
            if tier.base_fare < 0.0 || tier.rate_per_km < 0.0 {
                return Err(invalid(format!("vehicle tier '{}' has a negative fare", tier.name)));
            }
        }

        for pair in tiers.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let expected = prev.max_volume.map(|max| max.saturating_add(1));
            if expected != Some(next.min_volume) {
                return Err(invalid(format!(
                    "vehicle tiers '{}' and '{}' are not contiguous",
                    prev.name, next.name
                )));
            }
        }
        Ok(())
    }

    fn validate_rates(&self) -> Result<(), ConfigError> {
        let household = &self.household;
        check_non_negative("household.rental", &household.rental.values())?;
        check_non_negative("household.packing_material", &household.packing_material.values())?;
        check_non_negative("household.volume", &household.volume.values())?;
        check_non_negative("household.included_km", &[household.included_km])?;
        check_non_negative("household.labour.rate_per_person", &[household.labour.rate_per_person])?;
        if household.labour.medium_load_max_volume < household.labour.small_load_max_volume {
            return Err(invalid("labour volume thresholds are out of order"));
        }

        let document = &self.document;
        check_non_negative("document.default_box_rate", &[document.default_box_rate])?;
        check_non_negative("document.fresh_box_rates", &document.fresh_box_rates.values())?;
        let cells: Vec<f64> = document.rates.cells().map(|(_, _, _, rate)| rate).collect();
        check_non_negative("document.rates", &cells)?;

        let generic = &self.generic;
        check_non_negative("generic.furniture_volume", &generic.furniture_volume.values())?;
        check_non_negative("generic.appliance_volume", &generic.appliance_volume.values())?;
        check_non_negative("generic.box_volume", &generic.box_volume.values())?;
        check_non_negative("generic.base_rate_per_cft", &[generic.base_rate_per_cft])?;
        let durations: Vec<f64> = StorageDuration::ALL
            .iter()
            .flat_map(|d| [generic.duration_multipliers.get(*d), generic.months_billed.get(*d)])
            .collect();
        check_non_negative("generic duration tables", &durations)?;
        let multipliers = &generic.storage_type_multipliers;
        check_non_negative(
            "generic.storage_type_multipliers",
            &[multipliers.household, multipliers.business, multipliers.document],
        )
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidTariff(message.into())
}

fn check_non_negative(section: &str, values: &[f64]) -> Result<(), ConfigError> {
    match values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        Some(value) => Err(invalid(format!("{section} contains invalid rate {value}"))),
        None => Ok(()),
    }
}
