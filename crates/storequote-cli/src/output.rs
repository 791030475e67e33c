//! Output formatting module

use std::fmt::Write;
use std::path::Path;

use storequote_app::app::QuotedForm;
use storequote_app::export::format::format_rate;
use storequote_app::export::{format_rupees, EmailMessage};
use storequote_domain::model::Tariff;
use storequote_types::{BatchResults, OutputFormat, QuoteResult, Result};

pub fn output_quote(output_format: OutputFormat, quoted: &QuotedForm) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&quoted.quote)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nStorage Quote");
    println!("=============");
    println!("Customer:        {}", display_or_dash(&quoted.form.customer_name));
    println!("Storage type:    {}", quoted.form.storage_type.label());
    println!("Duration:        {}", quoted.form.duration.label());
    match &quoted.quote {
        Some(quote) => print!("{}", quote_table(quote)),
        None => println!("\nCall-back request: no quote is produced."),
    }
    Ok(())
}

/// Aligned breakdown of a single quote
pub fn quote_table(quote: &QuoteResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_quote_table(&mut out, quote);
    out
}

fn write_quote_table(out: &mut String, quote: &QuoteResult) -> std::fmt::Result {
    match quote {
        QuoteResult::Household(q) => {
            writeln!(out, "\n--- Storage ---")?;
            writeln!(out, "Volume:          {} cft", q.total_volume)?;
            writeln!(out, "Rental:          {} + GST per month", format_rupees(q.rental_charges))?;
            writeln!(out, "\n--- Pickup ---")?;
            writeln!(out, "Packing:         {}", format_rupees(q.packing_material_charges))?;
            writeln!(out, "Vehicle:         {} ({})", q.recommended_vehicle, format_rupees(q.vehicle_cost))?;
            writeln!(out, "Labour:          {} persons ({})", q.labour_count, format_rupees(q.labour_cost))?;
            writeln!(out, "Pickup charges:  {}", format_rupees(q.pickup_charges))?;
        }
        QuoteResult::Document(q) => {
            writeln!(out, "\n--- Document Storage ---")?;
            writeln!(out, "Storage:         {} ({})", q.storage_type, q.duration_category)?;
            writeln!(out, "Boxes:           {}", q.box_count)?;
            writeln!(out, "Box rate:        {} per box per month", format_rate(q.box_rate))?;
            writeln!(out, "Box rental:      {}", format_rupees(q.box_rental))?;
            if q.box_charges > 0 {
                writeln!(out, "Fresh boxes:     {}", format_rupees(q.box_charges))?;
            }
            writeln!(out, "Total:           {}", format_rupees(q.total_storage_cost))?;
        }
        QuoteResult::Generic(q) => {
            writeln!(out, "\n--- Estimate ---")?;
            writeln!(out, "Items:           {}", q.total_items)?;
            writeln!(out, "Volume:          {} cft", q.estimated_volume)?;
            writeln!(out, "Monthly rate:    {}", format_rupees(q.monthly_rate))?;
            writeln!(out, "Duration factor: {:.2}", q.breakdown.duration_multiplier)?;
            writeln!(out, "Total:           {}", format_rupees(q.total_cost))?;
        }
    }
    Ok(())
}

pub fn output_batch(output_format: OutputFormat, results: &BatchResults) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBatch Results");
    println!("=============");
    println!("Total:      {}", results.total_processed);
    println!("Successful: {}", results.successful);
    println!("Failed:     {}", results.failed);
    for (branch, count) in results.branch_counts() {
        println!("  {:<10} {}", branch, count);
    }

    println!();
    for entry in &results.entries {
        let name = Path::new(&entry.form_path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&entry.form_path);
        match (&entry.quote, &entry.error) {
            (_, Some(error)) => println!("{:<32} ERROR: {}", name, error),
            (Some(quote), None) => println!(
                "{:<32} {:<10} monthly {:>10}  total {:>10}",
                name,
                quote.branch_label(),
                format_rupees(quote.monthly_rate()),
                format_rupees(quote.total_cost())
            ),
            (None, None) => println!("{:<32} callback", name),
        }
    }
    Ok(())
}

pub fn output_email(output_format: OutputFormat, message: &EmailMessage) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(message)?;
        println!("{}", content);
    } else {
        print!("{}", email_text(message));
    }
    Ok(())
}

/// Header block followed by the body
pub fn email_text(message: &EmailMessage) -> String {
    format!(
        "To: {}\nSubject: {}\n\n{}\n",
        message.to, message.subject, message.body
    )
}

pub fn output_tariff(output_format: OutputFormat, tariff: &Tariff, toml: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(tariff)?;
        println!("{}", content);
    } else {
        print!("{}", toml);
    }
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storequote_domain::service::calculate_quote;
    use storequote_types::{InventoryRequest, ItemCounts, QuoteRequest, StorageDuration};

    #[test]
    fn test_household_table() {
        let request = QuoteRequest::Household(
            InventoryRequest::new(StorageDuration::OneToThreeMonths)
                .with_furniture(ItemCounts::new(1, 0, 0, 0))
                .with_distance_km(10.0),
        );
        let quote = calculate_quote(&Tariff::default(), &request).unwrap();
        let table = quote_table(&quote);

        assert!(table.contains("Volume:          60 cft"));
        assert!(table.contains("Vehicle:         Tata Ace (₹1,350)"));
        assert!(table.contains("Labour:          3 persons (₹2,400)"));
        assert!(table.contains("Pickup charges:  ₹4,202"));
    }

    #[test]
    fn test_email_text() {
        let message = EmailMessage {
            to: "info@storagians.com".to_string(),
            subject: "New Callback Request".to_string(),
            body: "Call Sam".to_string(),
        };
        assert_eq!(
            email_text(&message),
            "To: info@storagians.com\nSubject: New Callback Request\n\nCall Sam\n"
        );
    }

    #[test]
    fn test_display_or_dash() {
        assert_eq!(display_or_dash("  "), "-");
        assert_eq!(display_or_dash("Priya"), "Priya");
    }
}
