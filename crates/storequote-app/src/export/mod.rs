//! Quote rendering and batch export

pub mod email;
pub mod excel;
pub mod format;
pub mod summary;
pub mod whatsapp;

pub use email::{callback_notification, company_email, customer_email, EmailKind, EmailMessage};
pub use excel::export_to_excel;
pub use format::{format_rupees, group_indian};
pub use summary::{render_summary, summary_file_name};
pub use whatsapp::{whatsapp_link, whatsapp_message};

use crate::config::Config;

/// Company details printed on rendered quotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub company_name: String,
    pub company_phone: String,
    pub office_email: String,
    pub whatsapp_number: Option<String>,
    pub quote_validity_days: u32,
}

impl From<&Config> for Branding {
    fn from(config: &Config) -> Self {
        Self {
            company_name: config.company_name.clone(),
            company_phone: config.company_phone.clone(),
            office_email: config.office_email.clone(),
            whatsapp_number: config.whatsapp_number.clone(),
            quote_validity_days: config.quote_validity_days,
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Branding::from(&Config::default())
    }
}
