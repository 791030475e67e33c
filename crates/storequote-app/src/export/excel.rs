//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use storequote_types::{BatchResults, Error, QuoteResult, Result};

/// Export batch results to Excel file
pub fn export_to_excel(results: &BatchResults, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, results)?;

    // Add details sheet
    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, results)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    log::info!("exported {} entries to {}", results.entries.len(), output_path.display());
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, results: &BatchResults) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Storage Quote Batch Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let counts = [
        ("Total Forms:", results.total_processed),
        ("Successful:", results.successful),
        ("Failed:", results.failed),
    ];

    sheet
        .write_string(2, 0, "Quoted At:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, results.started_at.to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    for (offset, (label, value)) in counts.iter().enumerate() {
        let row = 3 + offset as u32;
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *value as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .write_string_with_format(7, 0, "Quotes by Branch", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut row = 8;
    for (branch, count) in results.branch_counts() {
        sheet
            .write_string(row, 0, branch)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    sheet
        .set_column_width(0, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, results: &BatchResults) -> Result<()> {
    sheet
        .set_name("Details")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "File",
        "Customer",
        "Storage Type",
        "Duration",
        "Volume (cft)",
        "Monthly (₹)",
        "One-time (₹)",
        "Total (₹)",
        "Vehicle",
        "Labour",
        "Error",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, entry) in results.entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        let filename = Path::new(&entry.form_path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&entry.form_path);
        sheet
            .write_string(row, 0, filename)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 1, &entry.customer_name)
            .map_err(|e| Error::Excel(e.to_string()))?;

        if let Some(storage_type) = entry.storage_type {
            sheet
                .write_string(row, 2, storage_type.label())
                .map_err(|e| Error::Excel(e.to_string()))?;
        }

        if let Some(duration) = entry.duration {
            sheet
                .write_string(row, 3, duration.label())
                .map_err(|e| Error::Excel(e.to_string()))?;
        }

        if let Some(quote) = &entry.quote {
            write_quote_columns(sheet, row, quote)?;
        }

        if let Some(error) = &entry.error {
            sheet
                .write_string(row, 10, error)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    // Approximate column widths
    let widths = [30, 20, 18, 18, 12, 12, 12, 12, 16, 8, 40];
    for (col, width) in widths.iter().enumerate() {
        sheet
            .set_column_width(col as u16, *width)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_quote_columns(sheet: &mut Worksheet, row: u32, quote: &QuoteResult) -> Result<()> {
    if let Some(volume) = quote.estimated_volume() {
        sheet
            .write_number(row, 4, volume as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }
    sheet
        .write_number(row, 5, quote.monthly_rate() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(row, 6, quote.one_time_charges() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(row, 7, quote.total_cost() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    if let Some(household) = quote.as_household() {
        sheet
            .write_string(row, 8, &household.recommended_vehicle)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 9, household.labour_count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }
    Ok(())
}
