//! Wizard form record as submitted by the quote wizard

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::QuoteError;

/// Clamp a wire count to a non-negative integer.
///
/// The wizard floors its counters at zero, but hand-written or imported forms
/// may carry negative, fractional or null values.
fn clamp_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if !value.is_finite() || value <= 0.0 {
        return Ok(0);
    }
    Ok(value.round().min(u32::MAX as f64) as u32)
}

/// Deserialize distance, dropping negative or non-finite values
fn non_negative_distance<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|km| km.is_finite())
        .map(|km| km.max(0.0)))
}

/// Accept both plain dates and full ISO timestamps (JS `Date` JSON)
fn flexible_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| de::Error::custom(format!("invalid pickup date: {raw}")))
}

/// Storage category chosen on the first wizard step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[default]
    Household,
    Business,
    Document,
    Callback,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Household => "household",
            StorageType::Business => "business",
            StorageType::Document => "document",
            StorageType::Callback => "callback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageType::Household => "Household Storage",
            StorageType::Business => "Business Storage",
            StorageType::Document => "Document Storage",
            StorageType::Callback => "Request Call Back",
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage duration bucket.
///
/// `1-3months` through `>12months` is the current set; `<1month` and
/// `>6months` come from the earlier wizard revision and are still accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StorageDuration {
    #[serde(rename = "<1month")]
    LessThanOneMonth,
    #[serde(rename = "1-3months")]
    OneToThreeMonths,
    #[default]
    #[serde(rename = "3-6months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12months")]
    SixToTwelveMonths,
    #[serde(rename = ">12months")]
    MoreThanTwelveMonths,
    #[serde(rename = ">6months")]
    MoreThanSixMonths,
}

impl StorageDuration {
    pub const ALL: [StorageDuration; 6] = [
        StorageDuration::LessThanOneMonth,
        StorageDuration::OneToThreeMonths,
        StorageDuration::ThreeToSixMonths,
        StorageDuration::SixToTwelveMonths,
        StorageDuration::MoreThanTwelveMonths,
        StorageDuration::MoreThanSixMonths,
    ];

    /// Wire value, e.g. `"3-6months"`
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageDuration::LessThanOneMonth => "<1month",
            StorageDuration::OneToThreeMonths => "1-3months",
            StorageDuration::ThreeToSixMonths => "3-6months",
            StorageDuration::SixToTwelveMonths => "6-12months",
            StorageDuration::MoreThanTwelveMonths => ">12months",
            StorageDuration::MoreThanSixMonths => ">6months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageDuration::LessThanOneMonth => "Less than 1 month",
            StorageDuration::OneToThreeMonths => "1-3 months",
            StorageDuration::ThreeToSixMonths => "3-6 months",
            StorageDuration::SixToTwelveMonths => "6-12 months",
            StorageDuration::MoreThanTwelveMonths => "More than 12 months",
            StorageDuration::MoreThanSixMonths => "More than 6 months",
        }
    }
}

impl std::fmt::Display for StorageDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMethod {
    /// Our crew picks the goods up
    #[default]
    Pickup,
    /// Customer arranges third-party logistics
    ThirdParty,
    /// Customer drops the goods off
    SelfDrop,
}

impl DeliveryMethod {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryMethod::Pickup => "Pickup by Us",
            DeliveryMethod::ThirdParty => "Drop by You (third-party logistics)",
            DeliveryMethod::SelfDrop => "Drop by You",
        }
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self, DeliveryMethod::Pickup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentBoxRequirement {
    NeedFresh,
    ReadyToShip,
}

impl DocumentBoxRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentBoxRequirement::NeedFresh => "Need fresh boxes",
            DocumentBoxRequirement::ReadyToShip => "Boxes ready to ship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStorageType {
    Rack,
    Pallet,
}

impl DocumentStorageType {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStorageType::Rack => "Rack Storage",
            DocumentStorageType::Pallet => "Pallet Storage",
        }
    }
}

/// Box-count bucket picked in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentBoxCount {
    #[serde(rename = "10-25")]
    TenToTwentyFive,
    #[serde(rename = "26-50", alias = "25-50")]
    TwentySixToFifty,
    #[serde(rename = "51-100", alias = "50-100")]
    FiftyOneToHundred,
    #[serde(rename = "100+")]
    OverHundred,
}

impl DocumentBoxCount {
    pub const ALL: [DocumentBoxCount; 4] = [
        DocumentBoxCount::TenToTwentyFive,
        DocumentBoxCount::TwentySixToFifty,
        DocumentBoxCount::FiftyOneToHundred,
        DocumentBoxCount::OverHundred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentBoxCount::TenToTwentyFive => "10-25",
            DocumentBoxCount::TwentySixToFifty => "26-50",
            DocumentBoxCount::FiftyOneToHundred => "51-100",
            DocumentBoxCount::OverHundred => "100+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentBoxCount::TenToTwentyFive => "10-25 Boxes",
            DocumentBoxCount::TwentySixToFifty => "26-50 Boxes",
            DocumentBoxCount::FiftyOneToHundred => "51-100 Boxes",
            DocumentBoxCount::OverHundred => "100+ Boxes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessGoodsType {
    New,
    Used,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessGoodsCategory {
    Electronics,
    Fmcg,
    OfficeFurniture,
    KitchenHotel,
    Others,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSpaceSize {
    Compact,
    Standard,
    Large,
    Custom,
}

/// Item counts by size class (furniture or appliances)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCounts {
    /// L-shape sofa, 3-door almirah, king cot / fridge 3+ door, TV 80"+
    #[serde(default, deserialize_with = "clamp_count")]
    pub extra_large: u32,
    /// 3-seater sofa, queen cot / fridge 2 door, TV 65"+
    #[serde(default, deserialize_with = "clamp_count")]
    pub large: u32,
    /// 1-2 seater sofa, single cot, mattress / single-door fridge, AC
    #[serde(default, deserialize_with = "clamp_count")]
    pub medium: u32,
    /// Chairs, side tables / microwave, mixer, gas stove
    #[serde(default, deserialize_with = "clamp_count")]
    pub small: u32,
}

impl ItemCounts {
    pub fn new(extra_large: u32, large: u32, medium: u32, small: u32) -> Self {
        Self {
            extra_large,
            large,
            medium,
            small,
        }
    }

    pub fn total(&self) -> u32 {
        self.extra_large
            .saturating_add(self.large)
            .saturating_add(self.medium)
            .saturating_add(self.small)
    }

    /// Per-class sum with another record
    pub fn pooled_with(&self, other: &ItemCounts) -> ItemCounts {
        ItemCounts {
            extra_large: self.extra_large.saturating_add(other.extra_large),
            large: self.large.saturating_add(other.large),
            medium: self.medium.saturating_add(other.medium),
            small: self.small.saturating_add(other.small),
        }
    }
}

/// Wire shape of the boxes record; older forms split books and personal items
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoxCountsWire {
    #[serde(default, deserialize_with = "clamp_count")]
    luggage: u32,
    #[serde(default, deserialize_with = "clamp_count")]
    kitchen: u32,
    #[serde(default, deserialize_with = "clamp_count")]
    clothes: u32,
    #[serde(default, deserialize_with = "clamp_count")]
    books_personal: u32,
    #[serde(default, deserialize_with = "clamp_count")]
    books: u32,
    #[serde(default, deserialize_with = "clamp_count")]
    personal: u32,
}

/// Box and luggage counts by sub-category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BoxCountsWire")]
pub struct BoxCounts {
    /// Suitcases, travel bags
    pub luggage: u32,
    /// Kitchen utensils, crockery
    pub kitchen: u32,
    /// Clothes, pillows, bedsheets
    pub clothes: u32,
    /// Books, documents, gift articles, shoes, sanitary items
    pub books_personal: u32,
}

impl From<BoxCountsWire> for BoxCounts {
    fn from(wire: BoxCountsWire) -> Self {
        Self {
            luggage: wire.luggage,
            kitchen: wire.kitchen,
            clothes: wire.clothes,
            books_personal: wire
                .books_personal
                .saturating_add(wire.books)
                .saturating_add(wire.personal),
        }
    }
}

impl BoxCounts {
    pub fn new(luggage: u32, kitchen: u32, clothes: u32, books_personal: u32) -> Self {
        Self {
            luggage,
            kitchen,
            clothes,
            books_personal,
        }
    }

    /// Everything except luggage
    pub fn packed_boxes(&self) -> u32 {
        self.kitchen
            .saturating_add(self.clothes)
            .saturating_add(self.books_personal)
    }

    pub fn total(&self) -> u32 {
        self.luggage.saturating_add(self.packed_boxes())
    }
}

/// Flat form record produced by the quote wizard.
///
/// Fields that only make sense for one storage type are optional here;
/// [`crate::QuoteRequest`] is the typed view the calculator works on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteFormData {
    pub storage_type: StorageType,
    pub duration: StorageDuration,
    pub furniture: ItemCounts,
    pub appliances: ItemCounts,
    pub boxes: BoxCounts,
    pub delivery_method: DeliveryMethod,

    /// Road distance from the customer to the warehouse, in km
    #[serde(deserialize_with = "non_negative_distance", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    pub pickup_location: String,
    pub area_pincode: String,
    #[serde(deserialize_with = "flexible_date")]
    pub pickup_date: Option<NaiveDate>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_goods_type: Option<BusinessGoodsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_goods_category: Option<BusinessGoodsCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_space_size: Option<BusinessSpaceSize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_box_requirement: Option<DocumentBoxRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_storage_type: Option<DocumentStorageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_box_count: Option<DocumentBoxCount>,
}

impl QuoteFormData {
    /// Distance with the "absent means zero" rule applied
    pub fn resolved_distance_km(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }

    /// Total number of inventory items across furniture, appliances and boxes
    pub fn total_items(&self) -> u32 {
        self.furniture
            .total()
            .saturating_add(self.appliances.total())
            .saturating_add(self.boxes.total())
    }
}

/// "Request a call back" submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    pub name: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl CallbackRequest {
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            email: None,
            remarks: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Trim every field, drop blank optionals, and require name and mobile
    pub fn validated(self) -> Result<Self, QuoteError> {
        let name = self.name.trim().to_string();
        let mobile = self.mobile.trim().to_string();
        if name.is_empty() {
            return Err(QuoteError::MissingField("name"));
        }
        if mobile.is_empty() {
            return Err(QuoteError::MissingField("mobile"));
        }
        let trimmed = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Ok(Self {
            name,
            mobile,
            email: trimmed(self.email),
            remarks: trimmed(self.remarks),
        })
    }
}
