//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storequote_app::export::EmailKind;
use storequote_types::OutputFormat;

#[derive(Parser)]
#[command(name = "storequote")]
#[command(version, about = "Storage rental quote calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Tariff TOML file (overrides the configured tariff)
    #[arg(long, global = true)]
    pub tariff: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote a single wizard form (JSON)
    Quote {
        /// Path to the form file
        form: PathBuf,

        /// Pickup distance in km (replaces the form's distanceKm)
        #[arg(long, allow_negative_numbers = true)]
        distance_km: Option<f64>,

        /// Render the quote instead of printing the breakdown
        #[arg(long, value_enum)]
        render: Option<RenderTarget>,

        /// Email variant for --render company-email / customer-email
        #[arg(long, value_enum, default_value_t = EmailKind::NewQuote)]
        kind: EmailKind,

        /// Write the rendered output to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Quote every form in a folder
    Batch {
        /// Folder containing form files
        folder: PathBuf,

        /// Results JSON path (default: <folder>/quote-results.json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Pickup distance in km applied to every form
        #[arg(long, allow_negative_numbers = true)]
        distance_km: Option<f64>,
    },

    /// Export batch results to Excel
    Export {
        /// Path to results JSON file
        results: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Inspect or create tariff files
    Tariff {
        #[command(subcommand)]
        action: TariffAction,
    },

    /// Render the office notification for a call-back request
    Callback {
        /// Callback request JSON file (instead of the flags below)
        #[arg(long, conflicts_with_all = ["name", "mobile", "email", "remarks"])]
        file: Option<PathBuf>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        mobile: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        remarks: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the tariff TOML file
        #[arg(long, conflicts_with = "clear_tariff")]
        set_tariff: Option<PathBuf>,

        /// Go back to the built-in tariff
        #[arg(long)]
        clear_tariff: bool,

        /// Set the company name
        #[arg(long)]
        set_company: Option<String>,

        /// Set the company phone
        #[arg(long)]
        set_phone: Option<String>,

        /// Set the office email
        #[arg(long)]
        set_office_email: Option<String>,

        /// Set the WhatsApp number used in share links
        #[arg(long)]
        set_whatsapp: Option<String>,

        /// Set quote validity in days
        #[arg(long)]
        set_validity: Option<u32>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum TariffAction {
    /// Print the active tariff
    Show,

    /// Write the built-in tariff to a TOML file for editing
    Init {
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a tariff TOML file
    Check { path: PathBuf },
}

/// What `quote --render` produces
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderTarget {
    /// Downloadable plain-text summary
    Summary,
    /// WhatsApp message and share link
    Whatsapp,
    /// Office notification email
    CompanyEmail,
    /// Customer copy of the quote email
    CustomerEmail,
}
