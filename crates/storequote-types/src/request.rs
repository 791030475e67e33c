//! Typed quote request, one variant per pricing branch

use serde::{Deserialize, Serialize};

use crate::{
    BoxCounts, DeliveryMethod, DocumentBoxCount, DocumentBoxRequirement, DocumentStorageType,
    ItemCounts, QuoteError, QuoteFormData, StorageDuration, StorageType,
};

/// Inventory-based request (household and business storage)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRequest {
    pub duration: StorageDuration,
    pub furniture: ItemCounts,
    pub appliances: ItemCounts,
    pub boxes: BoxCounts,
    pub delivery_method: DeliveryMethod,
    /// Resolved travel distance; 0 when the geolocation step was skipped
    pub distance_km: f64,
}

impl InventoryRequest {
    pub fn new(duration: StorageDuration) -> Self {
        Self {
            duration,
            furniture: ItemCounts::default(),
            appliances: ItemCounts::default(),
            boxes: BoxCounts::default(),
            delivery_method: DeliveryMethod::Pickup,
            distance_km: 0.0,
        }
    }

    pub fn with_furniture(mut self, furniture: ItemCounts) -> Self {
        self.furniture = furniture;
        self
    }

    pub fn with_appliances(mut self, appliances: ItemCounts) -> Self {
        self.appliances = appliances;
        self
    }

    pub fn with_boxes(mut self, boxes: BoxCounts) -> Self {
        self.boxes = boxes;
        self
    }

    pub fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = if distance_km.is_finite() {
            distance_km.max(0.0)
        } else {
            0.0
        };
        self
    }

    pub fn with_delivery_method(mut self, delivery_method: DeliveryMethod) -> Self {
        self.delivery_method = delivery_method;
        self
    }
}

/// Document/record storage request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub duration: StorageDuration,
    pub box_requirement: DocumentBoxRequirement,
    pub storage_type: DocumentStorageType,
    pub box_count: DocumentBoxCount,
    pub delivery_method: DeliveryMethod,
    pub distance_km: f64,
}

impl DocumentRequest {
    pub fn new(
        duration: StorageDuration,
        box_requirement: DocumentBoxRequirement,
        storage_type: DocumentStorageType,
        box_count: DocumentBoxCount,
    ) -> Self {
        Self {
            duration,
            box_requirement,
            storage_type,
            box_count,
            delivery_method: DeliveryMethod::Pickup,
            distance_km: 0.0,
        }
    }
}

/// What the calculator is asked to price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuoteRequest {
    Household(InventoryRequest),
    Business(InventoryRequest),
    Document(DocumentRequest),
    Callback,
}

impl QuoteRequest {
    pub fn storage_type(&self) -> StorageType {
        match self {
            QuoteRequest::Household(_) => StorageType::Household,
            QuoteRequest::Business(_) => StorageType::Business,
            QuoteRequest::Document(_) => StorageType::Document,
            QuoteRequest::Callback => StorageType::Callback,
        }
    }

    pub fn duration(&self) -> Option<StorageDuration> {
        match self {
            QuoteRequest::Household(r) | QuoteRequest::Business(r) => Some(r.duration),
            QuoteRequest::Document(r) => Some(r.duration),
            QuoteRequest::Callback => None,
        }
    }
}

impl TryFrom<&QuoteFormData> for QuoteRequest {
    type Error = QuoteError;

    fn try_from(form: &QuoteFormData) -> Result<Self, Self::Error> {
        let inventory = || InventoryRequest {
            duration: form.duration,
            furniture: form.furniture,
            appliances: form.appliances,
            boxes: form.boxes,
            delivery_method: form.delivery_method,
            distance_km: form.resolved_distance_km(),
        };

        match form.storage_type {
            StorageType::Household => Ok(QuoteRequest::Household(inventory())),
            StorageType::Business => Ok(QuoteRequest::Business(inventory())),
            StorageType::Callback => Ok(QuoteRequest::Callback),
            StorageType::Document => {
                let box_requirement = form
                    .document_box_requirement
                    .ok_or(QuoteError::MissingField("documentBoxRequirement"))?;
                let storage_type = form
                    .document_storage_type
                    .ok_or(QuoteError::MissingField("documentStorageType"))?;
                let box_count = form
                    .document_box_count
                    .ok_or(QuoteError::MissingField("documentBoxCount"))?;
                Ok(QuoteRequest::Document(DocumentRequest {
                    duration: form.duration,
                    box_requirement,
                    storage_type,
                    box_count,
                    delivery_method: form.delivery_method,
                    distance_km: form.resolved_distance_km(),
                }))
            }
        }
    }
}

impl TryFrom<QuoteFormData> for QuoteRequest {
    type Error = QuoteError;

    fn try_from(form: QuoteFormData) -> Result<Self, Self::Error> {
        QuoteRequest::try_from(&form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_form() -> QuoteFormData {
        QuoteFormData {
            storage_type: StorageType::Document,
            duration: StorageDuration::SixToTwelveMonths,
            document_box_requirement: Some(DocumentBoxRequirement::NeedFresh),
            document_storage_type: Some(DocumentStorageType::Pallet),
            document_box_count: Some(DocumentBoxCount::FiftyOneToHundred),
            distance_km: Some(18.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_household_form_maps_to_household_request() {
        let form = QuoteFormData {
            furniture: ItemCounts::new(1, 0, 2, 0),
            distance_km: Some(7.5),
            ..Default::default()
        };
        let request = QuoteRequest::try_from(&form).unwrap();
        match request {
            QuoteRequest::Household(r) => {
                assert_eq!(r.furniture, ItemCounts::new(1, 0, 2, 0));
                assert_eq!(r.distance_km, 7.5);
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_business_form_maps_to_business_request() {
        let form = QuoteFormData {
            storage_type: StorageType::Business,
            ..Default::default()
        };
        let request = QuoteRequest::try_from(&form).unwrap();
        assert_eq!(request.storage_type(), StorageType::Business);
    }

    #[test]
    fn test_document_form_maps_to_document_request() {
        let request = QuoteRequest::try_from(document_form()).unwrap();
        assert_eq!(
            request,
            QuoteRequest::Document(DocumentRequest {
                duration: StorageDuration::SixToTwelveMonths,
                box_requirement: DocumentBoxRequirement::NeedFresh,
                storage_type: DocumentStorageType::Pallet,
                box_count: DocumentBoxCount::FiftyOneToHundred,
                delivery_method: DeliveryMethod::Pickup,
                distance_km: 18.0,
            })
        );
    }

    #[test]
    fn test_document_form_without_storage_type_fails_fast() {
        let form = QuoteFormData {
            document_storage_type: None,
            ..document_form()
        };
        let err = QuoteRequest::try_from(&form).unwrap_err();
        assert_eq!(err, QuoteError::MissingField("documentStorageType"));
    }

    #[test]
    fn test_document_form_without_box_count_fails_fast() {
        let form = QuoteFormData {
            document_box_count: None,
            ..document_form()
        };
        let err = QuoteRequest::try_from(&form).unwrap_err();
        assert_eq!(err, QuoteError::MissingField("documentBoxCount"));
    }

    #[test]
    fn test_callback_form_has_no_duration() {
        let form = QuoteFormData {
            storage_type: StorageType::Callback,
            ..Default::default()
        };
        let request = QuoteRequest::try_from(&form).unwrap();
        assert_eq!(request, QuoteRequest::Callback);
        assert_eq!(request.duration(), None);
    }

    #[test]
    fn test_with_distance_km_rejects_negative() {
        let request = InventoryRequest::new(StorageDuration::OneToThreeMonths).with_distance_km(-4.0);
        assert_eq!(request.distance_km, 0.0);
    }
}
