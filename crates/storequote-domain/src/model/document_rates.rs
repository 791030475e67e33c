//! Document storage rate matrix

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use storequote_types::{DocumentBoxCount, DocumentStorageType, StorageDuration};

/// Rate-matrix period derived from the wizard duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StoragePeriod {
    #[serde(rename = "1-3M")]
    UpToThreeMonths,
    #[serde(rename = "3-6M")]
    ThreeToSixMonths,
    #[serde(rename = "6-12M")]
    SixToTwelveMonths,
    #[serde(rename = ">12M")]
    OverTwelveMonths,
}

impl StoragePeriod {
    pub const ALL: [StoragePeriod; 4] = [
        StoragePeriod::UpToThreeMonths,
        StoragePeriod::ThreeToSixMonths,
        StoragePeriod::SixToTwelveMonths,
        StoragePeriod::OverTwelveMonths,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StoragePeriod::UpToThreeMonths => "1-3M",
            StoragePeriod::ThreeToSixMonths => "3-6M",
            StoragePeriod::SixToTwelveMonths => "6-12M",
            StoragePeriod::OverTwelveMonths => ">12M",
        }
    }
}

impl From<StorageDuration> for StoragePeriod {
    fn from(duration: StorageDuration) -> Self {
        match duration {
            // Under a month is billed as the shortest period
            StorageDuration::LessThanOneMonth | StorageDuration::OneToThreeMonths => {
                StoragePeriod::UpToThreeMonths
            }
            StorageDuration::ThreeToSixMonths => StoragePeriod::ThreeToSixMonths,
            StorageDuration::SixToTwelveMonths | StorageDuration::MoreThanSixMonths => {
                StoragePeriod::SixToTwelveMonths
            }
            StorageDuration::MoreThanTwelveMonths => StoragePeriod::OverTwelveMonths,
        }
    }
}

impl std::fmt::Display for StoragePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate-matrix column for a box-count bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RateColumn {
    #[serde(rename = "10-25")]
    UpTo25,
    #[serde(rename = "26-50")]
    UpTo50,
    #[serde(rename = "51-100")]
    UpTo100,
    #[serde(rename = "101+")]
    Over100,
}

impl RateColumn {
    pub const ALL: [RateColumn; 4] = [
        RateColumn::UpTo25,
        RateColumn::UpTo50,
        RateColumn::UpTo100,
        RateColumn::Over100,
    ];
}

impl From<DocumentBoxCount> for RateColumn {
    fn from(bucket: DocumentBoxCount) -> Self {
        match bucket {
            DocumentBoxCount::TenToTwentyFive => RateColumn::UpTo25,
            DocumentBoxCount::TwentySixToFifty => RateColumn::UpTo50,
            DocumentBoxCount::FiftyOneToHundred => RateColumn::UpTo100,
            DocumentBoxCount::OverHundred => RateColumn::Over100,
        }
    }
}

/// One value per box-count bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketTable<T> {
    #[serde(rename = "10-25")]
    pub up_to_25: T,
    #[serde(rename = "26-50")]
    pub up_to_50: T,
    #[serde(rename = "51-100")]
    pub up_to_100: T,
    #[serde(rename = "100+")]
    pub over_100: T,
}

impl<T: Copy> BucketTable<T> {
    pub fn new(up_to_25: T, up_to_50: T, up_to_100: T, over_100: T) -> Self {
        Self {
            up_to_25,
            up_to_50,
            up_to_100,
            over_100,
        }
    }

    pub fn get(&self, bucket: DocumentBoxCount) -> T {
        match bucket {
            DocumentBoxCount::TenToTwentyFive => self.up_to_25,
            DocumentBoxCount::TwentySixToFifty => self.up_to_50,
            DocumentBoxCount::FiftyOneToHundred => self.up_to_100,
            DocumentBoxCount::OverHundred => self.over_100,
        }
    }

    pub fn values(&self) -> [T; 4] {
        [self.up_to_25, self.up_to_50, self.up_to_100, self.over_100]
    }
}

type PeriodRates = BTreeMap<StoragePeriod, BTreeMap<RateColumn, f64>>;

/// Per-box monthly rate by storage type, period and box-count column.
///
/// A file-loaded matrix may be partial; lookups return `None` for
/// missing cells and the caller decides the fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRateMatrix(BTreeMap<DocumentStorageType, PeriodRates>);

impl DocumentRateMatrix {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn rate(
        &self,
        storage_type: DocumentStorageType,
        period: StoragePeriod,
        column: RateColumn,
    ) -> Option<f64> {
        self.0
            .get(&storage_type)
            .and_then(|periods| periods.get(&period))
            .and_then(|columns| columns.get(&column))
            .copied()
    }

    pub fn set(
        &mut self,
        storage_type: DocumentStorageType,
        period: StoragePeriod,
        column: RateColumn,
        rate: f64,
    ) {
        self.0
            .entry(storage_type)
            .or_default()
            .entry(period)
            .or_default()
            .insert(column, rate);
    }

    /// Every cell present in the matrix
    pub fn cells(&self) -> impl Iterator<Item = (DocumentStorageType, StoragePeriod, RateColumn, f64)> + '_ {
        self.0.iter().flat_map(|(storage_type, periods)| {
            periods.iter().flat_map(move |(period, columns)| {
                columns
                    .iter()
                    .map(move |(column, rate)| (*storage_type, *period, *column, *rate))
            })
        })
    }

    fn with_row(mut self, storage_type: DocumentStorageType, period: StoragePeriod, rates: [f64; 4]) -> Self {
        for (column, rate) in RateColumn::ALL.into_iter().zip(rates) {
            self.set(storage_type, period, column, rate);
        }
        self
    }
}

impl Default for DocumentRateMatrix {
    fn default() -> Self {
        use DocumentStorageType::{Pallet, Rack};
        use StoragePeriod::*;

        Self::empty()
            .with_row(Rack, UpToThreeMonths, [45.0, 40.0, 35.0, 30.0])
            .with_row(Rack, ThreeToSixMonths, [40.0, 35.0, 30.0, 25.0])
            .with_row(Rack, SixToTwelveMonths, [35.0, 30.0, 25.0, 22.0])
            .with_row(Rack, OverTwelveMonths, [30.0, 25.0, 22.0, 20.0])
            .with_row(Pallet, UpToThreeMonths, [35.0, 30.0, 25.0, 22.0])
            .with_row(Pallet, ThreeToSixMonths, [30.0, 25.0, 22.0, 20.0])
            .with_row(Pallet, SixToTwelveMonths, [25.0, 22.0, 20.0, 18.0])
            .with_row(Pallet, OverTwelveMonths, [22.0, 20.0, 18.0, 15.0])
    }
}
