//! Quote and callback notification emails.
//!
//! Messages are rendered only; delivery belongs to whatever mail
//! transport the caller uses.

use std::fmt::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use storequote_types::{CallbackRequest, QuoteFormData, QuoteResult};

use super::format::{format_rate, format_rupees};
use super::Branding;

const ACCENT: &str = "#FF8C38";

/// Which quote email to render
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    #[default]
    NewQuote,
    BookingConfirmation,
}

/// A rendered email ready to hand to a mail transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    /// HTML for quote emails, plain text for callback notifications
    pub body: String,
}

/// Escape text for interpolation into HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Notification to the office about a new quote or booking
pub fn company_email(
    kind: EmailKind,
    form: &QuoteFormData,
    quote: &QuoteResult,
    branding: &Branding,
) -> EmailMessage {
    let subject = match kind {
        EmailKind::NewQuote => format!("New Storage Quote Request - {}", form.customer_name),
        EmailKind::BookingConfirmation => {
            format!("Storage Booking Confirmation - {}", form.customer_name)
        }
    };
    EmailMessage {
        to: branding.office_email.clone(),
        subject,
        body: company_html(kind, form, quote),
    }
}

/// Copy of the quote sent to the customer
pub fn customer_email(
    kind: EmailKind,
    form: &QuoteFormData,
    quote: &QuoteResult,
    branding: &Branding,
) -> EmailMessage {
    let subject = match kind {
        EmailKind::NewQuote => format!("Your Storage Quote - {}", branding.company_name),
        EmailKind::BookingConfirmation => {
            format!("Storage Booking Confirmation - {}", branding.company_name)
        }
    };
    EmailMessage {
        to: form.customer_email.clone(),
        subject,
        body: customer_html(kind, form, quote, branding),
    }
}

/// Plain-text notification for a "request a call back" submission
pub fn callback_notification(request: &CallbackRequest, branding: &Branding) -> EmailMessage {
    let mut body = String::new();
    let _ = write!(
        body,
        "New callback request received from the {} website:\n\n\
         Customer Details:\n\
         - Name: {}\n\
         - Mobile: {}\n\
         - Email: {}\n\
         - Remarks: {}\n\n\
         Please contact this customer as soon as possible.\n",
        branding.company_name,
        request.name,
        request.mobile,
        request.email.as_deref().unwrap_or("Not provided"),
        request.remarks.as_deref().unwrap_or("None"),
    );
    EmailMessage {
        to: branding.office_email.clone(),
        subject: format!("New Callback Request - {}", request.name),
        body,
    }
}

fn company_html(kind: EmailKind, form: &QuoteFormData, quote: &QuoteResult) -> String {
    let (headline, action) = match kind {
        EmailKind::NewQuote => (
            "New Storage Quote Request",
            "<strong>Action Required:</strong> Please contact the customer within 24 hours to confirm requirements and schedule pickup.",
        ),
        EmailKind::BookingConfirmation => (
            "Storage Booking Confirmation - URGENT",
            "<strong>BOOKING CONFIRMED:</strong> Customer is ready to proceed. Contact immediately to schedule pickup.",
        ),
    };

    let mut html = String::new();
    let _ = write_company_html(&mut html, headline, action, form, quote);
    html
}

fn write_company_html(
    html: &mut String,
    headline: &str,
    action: &str,
    form: &QuoteFormData,
    quote: &QuoteResult,
) -> std::fmt::Result {
    open_layout(html, headline, None)?;

    section_heading(html, "Customer Information")?;
    field(html, "Name", &form.customer_name)?;
    field(html, "Phone", &form.customer_phone)?;
    field(html, "Email", &form.customer_email)?;

    section_heading(html, "Quote Details")?;
    field(html, "Storage Type", form.storage_type.label())?;
    field(html, "Duration", form.duration.label())?;
    field(html, "Pickup Location", &form.pickup_location)?;
    let pickup_date = form
        .pickup_date
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| "Not specified".to_string());
    field(html, "Pickup Date", &pickup_date)?;
    field(html, "Delivery Method", form.delivery_method.label())?;

    quote_block(html, quote)?;

    match quote {
        QuoteResult::Document(_) => {
            writeln!(html, "<h3 style=\"color: #333;\">Document Storage Details</h3>")?;
            let requirement = form.document_box_requirement.map_or("-", |r| r.label());
            let storage = form.document_storage_type.map_or("-", |t| t.label());
            let count = form.document_box_count.map_or("-", |c| c.label());
            field(html, "Box Requirement", requirement)?;
            field(html, "Storage Type", storage)?;
            field(html, "Box Count", count)?;
        }
        QuoteResult::Household(_) | QuoteResult::Generic(_) => items_breakdown(html, form)?,
    }

    writeln!(
        html,
        "<div style=\"background: #fff; padding: 15px; margin-top: 20px; border-left: 4px solid {ACCENT};\">\
         <p style=\"margin: 0;\">{action}</p></div>"
    )?;
    close_layout(html)
}

fn customer_html(
    kind: EmailKind,
    form: &QuoteFormData,
    quote: &QuoteResult,
    branding: &Branding,
) -> String {
    let (headline, intro) = match kind {
        EmailKind::NewQuote => (
            "Your Storage Quote",
            "Thank you for your interest in our storage services. Below is your personalized quote:",
        ),
        EmailKind::BookingConfirmation => (
            "Booking Confirmation",
            "Your storage booking has been confirmed! Our team will connect with you shortly to finalize the details.",
        ),
    };

    let mut html = String::new();
    let _ = write_customer_html(&mut html, headline, intro, form, quote, branding);
    html
}

fn write_customer_html(
    html: &mut String,
    headline: &str,
    intro: &str,
    form: &QuoteFormData,
    quote: &QuoteResult,
    branding: &Branding,
) -> std::fmt::Result {
    let brand = escape_html(&branding.company_name);
    let tagline = format!("Thank you for choosing {}!", brand);
    open_layout(html, headline, Some(&tagline))?;

    writeln!(html, "<p>Dear {},</p>", escape_html(&form.customer_name))?;
    writeln!(html, "<p>{}</p>", intro)?;

    quote_block(html, quote)?;

    writeln!(
        html,
        "<div style=\"background: #e8f5e8; padding: 15px; border-radius: 8px; margin: 20px 0;\">\
         <h4 style=\"color: #2d5016; margin-top: 0;\">What's Next?</h4>\
         <p style=\"color: #2d5016; margin-bottom: 0;\">Our team will contact you within 24 hours to confirm your requirements and schedule the pickup.</p></div>"
    )?;
    writeln!(
        html,
        "<div style=\"background: #fff3e0; padding: 15px; border-radius: 8px; margin: 20px 0; text-align: center;\">\
         <h4 style=\"color: {ACCENT}; margin-top: 0;\">Need immediate assistance?</h4>\
         <p style=\"font-size: 18px; font-weight: bold; color: {ACCENT};\">Call us: {}</p></div>",
        escape_html(&branding.company_phone)
    )?;
    writeln!(
        html,
        "<div style=\"text-align: center; margin-top: 30px; border-top: 1px solid #e0e0e0;\">\
         <p style=\"color: #666; font-size: 14px;\">This quote is valid for {} days. Final pricing may vary based on actual volume and requirements.</p>\
         <p style=\"color: #666; font-size: 14px;\">Thank you for choosing {} - Your trusted storage partner!</p></div>",
        branding.quote_validity_days, brand
    )?;
    close_layout(html)
}

fn open_layout(html: &mut String, headline: &str, tagline: Option<&str>) -> std::fmt::Result {
    writeln!(
        html,
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;\">"
    )?;
    writeln!(
        html,
        "<div style=\"background: linear-gradient(135deg, {ACCENT}, #FFB84D); padding: 20px; border-radius: 10px 10px 0 0; text-align: center;\">"
    )?;
    writeln!(html, "<h1 style=\"color: white; margin: 0;\">{}</h1>", headline)?;
    if let Some(tagline) = tagline {
        writeln!(html, "<p style=\"color: white; margin: 10px 0 0 0;\">{}</p>", tagline)?;
    }
    writeln!(html, "</div>")?;
    writeln!(
        html,
        "<div style=\"background: #f9f9f9; padding: 20px; border-radius: 0 0 10px 10px;\">"
    )
}

fn close_layout(html: &mut String) -> std::fmt::Result {
    writeln!(html, "</div>")?;
    writeln!(html, "</div>")
}

fn section_heading(html: &mut String, title: &str) -> std::fmt::Result {
    writeln!(
        html,
        "<h2 style=\"color: #333; border-bottom: 2px solid {ACCENT}; padding-bottom: 10px;\">{}</h2>",
        title
    )
}

fn field(html: &mut String, label: &str, value: &str) -> std::fmt::Result {
    writeln!(html, "<p><strong>{}:</strong> {}</p>", label, escape_html(value))
}

fn row(html: &mut String, label: &str, value: &str) -> std::fmt::Result {
    writeln!(
        html,
        "<div style=\"display: flex; justify-content: space-between; margin-bottom: 10px;\">\
         <span>{}:</span><strong>{}</strong></div>",
        label, value
    )
}

fn total_row(html: &mut String, label: &str, value: &str) -> std::fmt::Result {
    writeln!(html, "<hr style=\"border: 1px solid #e0e0e0; margin: 15px 0;\">")?;
    writeln!(
        html,
        "<div style=\"display: flex; justify-content: space-between; font-size: 18px;\">\
         <span>{}:</span><strong style=\"color: {ACCENT};\">{}</strong></div>",
        label, value
    )
}

fn quote_block(html: &mut String, quote: &QuoteResult) -> std::fmt::Result {
    writeln!(
        html,
        "<div style=\"background: white; padding: 20px; border-radius: 8px; margin: 20px 0; border: 1px solid #e0e0e0;\">"
    )?;
    match quote {
        QuoteResult::Household(q) => {
            writeln!(html, "<h3 style=\"color: {ACCENT}; margin-top: 0;\">Quote Summary</h3>")?;
            row(html, "Total Volume", &format!("{} cft", q.total_volume))?;
            row(html, "Rental", &format!("{} + GST", format_rupees(q.rental_charges)))?;
            row(html, "Recommended Vehicle", &escape_html(&q.recommended_vehicle))?;
            total_row(html, "Pickup Charges", &format_rupees(q.pickup_charges))?;
            writeln!(
                html,
                "<p style=\"color: #666; font-size: 14px; margin-top: 10px;\">\
                 (Includes Packing Material, Transportation and Labour Charges)</p>"
            )?;
        }
        QuoteResult::Document(q) => {
            writeln!(html, "<h3 style=\"color: {ACCENT}; margin-top: 0;\">Document Storage Quote</h3>")?;
            row(html, "Storage", &escape_html(&q.storage_type))?;
            row(html, "Boxes", &q.box_count.to_string())?;
            row(
                html,
                "Box Rate",
                &format!("{} per box per month ({})", format_rate(q.box_rate), q.duration_category),
            )?;
            row(html, "Monthly Rental", &format_rupees(q.box_rental))?;
            if q.box_charges > 0 {
                row(html, "Fresh Box Charges", &format_rupees(q.box_charges))?;
            }
            total_row(html, "Total Cost", &format_rupees(q.total_storage_cost))?;
        }
        QuoteResult::Generic(q) => {
            writeln!(html, "<h3 style=\"color: {ACCENT}; margin-top: 0;\">Quote Summary</h3>")?;
            row(html, "Total Items", &q.total_items.to_string())?;
            row(html, "Estimated Volume", &format!("{} cft", q.estimated_volume))?;
            row(html, "Monthly Rate", &format_rupees(q.monthly_rate))?;
            total_row(html, "Total Cost", &format_rupees(q.total_cost))?;
        }
    }
    writeln!(html, "</div>")
}

fn items_breakdown(html: &mut String, form: &QuoteFormData) -> std::fmt::Result {
    writeln!(html, "<h3 style=\"color: #333; margin-top: 20px;\">Items Breakdown</h3>")?;
    writeln!(
        html,
        "<div style=\"display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 15px;\">"
    )?;
    for (title, counts) in [("Furniture", &form.furniture), ("Appliances", &form.appliances)] {
        writeln!(
            html,
            "<div><h4>{}:</h4><p>Extra Large: {}</p><p>Large: {}</p><p>Medium: {}</p><p>Small: {}</p></div>",
            title, counts.extra_large, counts.large, counts.medium, counts.small
        )?;
    }
    let boxes = &form.boxes;
    writeln!(
        html,
        "<div><h4>Boxes &amp; Luggage:</h4><p>Luggage: {}</p><p>Kitchen: {}</p><p>Clothes: {}</p><p>Books/Personal: {}</p></div>",
        boxes.luggage, boxes.kitchen, boxes.clothes, boxes.books_personal
    )?;
    writeln!(html, "</div>")
}
