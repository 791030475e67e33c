//! Plain-text quote summary for download

use std::fmt::Write;

use chrono::NaiveDate;
use storequote_types::{QuoteFormData, QuoteResult};

use super::format::{format_rate, format_rupees};

/// File name offered for the downloaded summary
pub fn summary_file_name(form: &QuoteFormData) -> String {
    let name = form.customer_name.split_whitespace().collect::<Vec<_>>().join("-");
    if name.is_empty() {
        "storage-quote.txt".to_string()
    } else {
        format!("storage-quote-{}.txt", name)
    }
}

/// Render the downloadable quote summary
pub fn render_summary(form: &QuoteFormData, quote: &QuoteResult, generated_on: NaiveDate) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_summary(&mut out, form, quote, generated_on);
    out
}

fn write_summary(
    out: &mut String,
    form: &QuoteFormData,
    quote: &QuoteResult,
    generated_on: NaiveDate,
) -> std::fmt::Result {
    writeln!(out, "STORAGE QUOTE SUMMARY")?;
    writeln!(out, "=====================")?;
    writeln!(out)?;

    writeln!(out, "Customer Information:")?;
    writeln!(out, "Name: {}", form.customer_name)?;
    writeln!(out, "Phone: {}", form.customer_phone)?;
    writeln!(out, "Email: {}", form.customer_email)?;
    writeln!(out)?;

    writeln!(out, "Storage Details:")?;
    writeln!(out, "Type: {}", form.storage_type.label())?;
    writeln!(out, "Duration: {}", form.duration.label())?;
    writeln!(out, "Pickup Location: {}", form.pickup_location)?;
    match form.pickup_date {
        Some(date) => writeln!(out, "Pickup Date: {}", date.format("%-d %B %Y"))?,
        None => writeln!(out, "Pickup Date: Not specified")?,
    }
    writeln!(out, "Delivery Method: {}", form.delivery_method.label())?;
    writeln!(out)?;

    match quote {
        QuoteResult::Document(_) => write_document_details(out, form)?,
        QuoteResult::Household(_) | QuoteResult::Generic(_) => write_items(out, form, quote)?,
    }
    writeln!(out)?;

    writeln!(out, "PRICING:")?;
    match quote {
        QuoteResult::Household(q) => {
            writeln!(out, "Rental: {} + GST per month", format_rupees(q.rental_charges))?;
            writeln!(out, "Packing Material: {}", format_rupees(q.packing_material_charges))?;
            writeln!(out, "Vehicle ({}): {}", q.recommended_vehicle, format_rupees(q.vehicle_cost))?;
            writeln!(out, "Labour ({} persons): {}", q.labour_count, format_rupees(q.labour_cost))?;
            writeln!(out, "Pickup Charges: {}", format_rupees(q.pickup_charges))?;
            writeln!(out, "(Includes Packing Material, Transportation and Labour Charges)")?;
        }
        QuoteResult::Document(q) => {
            writeln!(out, "Box Rate: {} per box per month ({})", format_rate(q.box_rate), q.duration_category)?;
            writeln!(out, "Monthly Box Rental ({} boxes): {}", q.box_count, format_rupees(q.box_rental))?;
            if q.box_charges > 0 {
                writeln!(
                    out,
                    "Fresh Box Charges ({} per box): {}",
                    format_rate(q.box_charge_rate),
                    format_rupees(q.box_charges)
                )?;
            }
            writeln!(out, "Total Storage Cost: {}", format_rupees(q.total_storage_cost))?;
        }
        QuoteResult::Generic(q) => {
            writeln!(out, "Monthly Rate: {}", format_rupees(q.monthly_rate))?;
            writeln!(out, "Total Estimated Cost: {}", format_rupees(q.total_cost))?;
        }
    }
    writeln!(out)?;

    write!(out, "Generated on: {}", generated_on.format("%-d %B %Y"))
}

fn write_items(out: &mut String, form: &QuoteFormData, quote: &QuoteResult) -> std::fmt::Result {
    writeln!(out, "Items Summary:")?;
    writeln!(out, "Total Items: {}", form.total_items())?;
    if let Some(volume) = quote.estimated_volume() {
        writeln!(out, "Estimated Volume: {} cubic feet", volume)?;
    }
    writeln!(out)?;

    for (title, counts) in [("Furniture", &form.furniture), ("Appliances", &form.appliances)] {
        writeln!(out, "{}:", title)?;
        writeln!(out, "- Extra Large: {}", counts.extra_large)?;
        writeln!(out, "- Large: {}", counts.large)?;
        writeln!(out, "- Medium: {}", counts.medium)?;
        writeln!(out, "- Small: {}", counts.small)?;
        writeln!(out)?;
    }

    writeln!(out, "Boxes & Luggage:")?;
    writeln!(out, "- Luggage: {}", form.boxes.luggage)?;
    writeln!(out, "- Kitchen Items: {}", form.boxes.kitchen)?;
    writeln!(out, "- Clothes & Bedding: {}", form.boxes.clothes)?;
    writeln!(out, "- Books & Personal Items: {}", form.boxes.books_personal)
}

fn write_document_details(out: &mut String, form: &QuoteFormData) -> std::fmt::Result {
    writeln!(out, "Document Storage:")?;
    writeln!(
        out,
        "Box Requirement: {}",
        form.document_box_requirement.map_or("-", |r| r.label())
    )?;
    writeln!(
        out,
        "Storage Type: {}",
        form.document_storage_type.map_or("-", |t| t.label())
    )?;
    writeln!(out, "Box Count: {}", form.document_box_count.map_or("-", |c| c.label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storequote_domain::model::Tariff;
    use storequote_domain::service::quote_form;
    use storequote_types::{
        DocumentBoxCount, DocumentBoxRequirement, DocumentStorageType, ItemCounts, StorageType,
    };

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_household_summary() {
        let form = QuoteFormData {
            customer_name: "Priya Nair".to_string(),
            furniture: ItemCounts::new(1, 0, 0, 0),
            distance_km: Some(10.0),
            ..Default::default()
        };
        let quote = quote_form(&Tariff::default(), &form).unwrap().unwrap();
        let text = render_summary(&form, &quote, generated_on());

        assert!(text.starts_with("STORAGE QUOTE SUMMARY"));
        assert!(text.contains("Type: Household Storage"));
        assert!(text.contains("Pickup Date: Not specified"));
        assert!(text.contains("Estimated Volume: 60 cubic feet"));
        assert!(text.contains("Rental: ₹348 + GST per month"));
        assert!(text.contains("Vehicle (Tata Ace): ₹1,350"));
        assert!(text.contains("Pickup Charges: ₹4,202"));
        assert!(text.ends_with("Generated on: 14 March 2025"));
    }

    #[test]
    fn test_document_summary() {
        let form = QuoteFormData {
            storage_type: StorageType::Document,
            pickup_date: NaiveDate::from_ymd_opt(2025, 4, 2),
            document_box_requirement: Some(DocumentBoxRequirement::ReadyToShip),
            document_storage_type: Some(DocumentStorageType::Pallet),
            document_box_count: Some(DocumentBoxCount::OverHundred),
            ..Default::default()
        };
        let quote = quote_form(&Tariff::default(), &form).unwrap().unwrap();
        let text = render_summary(&form, &quote, generated_on());

        assert!(text.contains("Pickup Date: 2 April 2025"));
        assert!(text.contains("Storage Type: Pallet Storage"));
        assert!(text.contains("Monthly Box Rental (500 boxes): ₹10,000"));
        assert!(!text.contains("Fresh Box Charges"));
        assert!(!text.contains("Furniture:"));
    }

    #[test]
    fn test_summary_file_name() {
        let form = QuoteFormData {
            customer_name: " Priya  Nair ".to_string(),
            ..Default::default()
        };
        assert_eq!(summary_file_name(&form), "storage-quote-Priya-Nair.txt");
        assert_eq!(summary_file_name(&QuoteFormData::default()), "storage-quote.txt");
    }
}
