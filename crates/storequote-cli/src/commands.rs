//! Command implementations

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use storequote_app::app::{load_results, save_results, QuoteOptions, QuoteService};
use storequote_app::config::Config;
use storequote_app::export::{
    callback_notification, company_email, customer_email, export_to_excel, render_summary,
    summary_file_name, whatsapp_link, whatsapp_message, Branding, EmailKind,
};
use storequote_app::repository::{load_tariff, open_tariff_repo};
use storequote_app::scanner::scan_directory;
use storequote_domain::model::Tariff;
use storequote_infra::{load_callback, TariffLoader};
use storequote_types::{
    CallbackRequest, ConfigError, Error, OutputFormat, QuoteError, Result,
};

use crate::cli::{Cli, Commands, RenderTarget, TariffAction};
use crate::output::{email_text, output_batch, output_email, output_quote, output_tariff};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    let tariff_override = cli.tariff.as_deref();

    match &cli.command {
        Commands::Quote {
            form,
            distance_km,
            render,
            kind,
            output,
        } => {
            let tariff = load_tariff(&config, tariff_override)?;
            cmd_quote(
                &config,
                tariff,
                form,
                *distance_km,
                *render,
                *kind,
                output.as_deref(),
                output_format,
            )
        }
        Commands::Batch {
            folder,
            output,
            distance_km,
        } => {
            let tariff = load_tariff(&config, tariff_override)?;
            cmd_batch(tariff, folder, output.clone(), *distance_km, output_format)
        }
        Commands::Export { results, output } => cmd_export(results.clone(), output.clone()),
        Commands::Tariff { action } => cmd_tariff(&config, tariff_override, action, output_format),
        Commands::Callback {
            file,
            name,
            mobile,
            email,
            remarks,
        } => {
            let request = match file {
                Some(path) => load_callback(path)?,
                None => callback_from_flags(
                    name.clone(),
                    mobile.clone(),
                    email.clone(),
                    remarks.clone(),
                )?,
            };
            cmd_callback(&config, &request, output_format)
        }
        Commands::Config {
            show,
            set_output,
            set_tariff,
            clear_tariff,
            set_company,
            set_phone,
            set_office_email,
            set_whatsapp,
            set_validity,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            set_tariff.clone(),
            *clear_tariff,
            set_company.clone(),
            set_phone.clone(),
            set_office_email.clone(),
            set_whatsapp.clone(),
            *set_validity,
            *reset,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_quote(
    config: &Config,
    tariff: Tariff,
    form_path: &Path,
    distance_km: Option<f64>,
    render: Option<RenderTarget>,
    kind: EmailKind,
    output: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    let service = QuoteService::new(tariff);
    let mut options = QuoteOptions::new();
    if let Some(km) = distance_km {
        options = options.with_distance_km(km);
    }

    let quoted = service.quote_file(form_path, &options)?;

    let Some(target) = render else {
        return match output {
            Some(path) => {
                std::fs::write(path, serde_json::to_string_pretty(&quoted.quote)?)?;
                println!("Saved to: {}", path.display());
                Ok(())
            }
            None => output_quote(output_format, &quoted),
        };
    };

    let quote = quoted
        .quote
        .as_ref()
        .ok_or(Error::Quote(QuoteError::CallbackHasNoQuote))?;
    let branding = Branding::from(config);

    let rendered = match target {
        RenderTarget::Summary => {
            let today = chrono::Local::now().date_naive();
            render_summary(&quoted.form, quote, today)
        }
        RenderTarget::Whatsapp => {
            let message = whatsapp_message(quote);
            let link = whatsapp_link(branding.whatsapp_number.as_deref(), &message)?;
            if output_format == OutputFormat::Json && output.is_none() {
                let value = serde_json::json!({
                    "message": message,
                    "link": link.as_str(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }
            format!("{}\n\n{}", message, link)
        }
        RenderTarget::CompanyEmail | RenderTarget::CustomerEmail => {
            let message = if target == RenderTarget::CompanyEmail {
                company_email(kind, &quoted.form, quote, &branding)
            } else {
                customer_email(kind, &quoted.form, quote, &branding)
            };
            if output.is_none() {
                return output_email(output_format, &message);
            }
            email_text(&message)
        }
    };

    match output {
        Some(path) => {
            // A directory receives the summary under its download name
            let path = if path.is_dir() {
                path.join(summary_file_name(&quoted.form))
            } else {
                path.to_path_buf()
            };
            std::fs::write(&path, rendered)?;
            println!("Saved to: {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn cmd_batch(
    tariff: Tariff,
    folder: &Path,
    output: Option<PathBuf>,
    distance_km: Option<f64>,
    output_format: OutputFormat,
) -> Result<()> {
    let paths = scan_directory(folder)?;
    if paths.is_empty() {
        println!("No form files found in {}", folder.display());
        return Ok(());
    }

    let service = QuoteService::new(tariff);
    let mut options = QuoteOptions::new();
    if let Some(km) = distance_km {
        options = options.with_distance_km(km);
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(progress_style());

    let progress = |index: usize, _total: usize, path: &Path| {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            pb.set_message(name.to_string());
        }
        pb.set_position(index as u64);
    };

    let results = service.quote_batch(&paths, &options, Some(&progress));
    pb.set_position(paths.len() as u64);
    pb.finish_with_message("Complete");

    let output_path = output.unwrap_or_else(|| folder.join("quote-results.json"));
    save_results(&results, &output_path)?;

    output_batch(output_format, &results)?;
    if output_format == OutputFormat::Table {
        println!("\nResults saved to: {}", output_path.display());
    }
    Ok(())
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn cmd_export(results_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    // Load results
    let results = load_results(&results_path)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let stem = results_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("results");
        results_path.with_file_name(format!("{}.xlsx", stem))
    });

    export_to_excel(&results, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_tariff(
    config: &Config,
    tariff_override: Option<&Path>,
    action: &TariffAction,
    output_format: OutputFormat,
) -> Result<()> {
    match action {
        TariffAction::Show => {
            let repo = open_tariff_repo(config, tariff_override)?;
            let tariff = repo.load()?;
            let toml = TariffLoader::to_toml_string(&tariff)?;
            if output_format == OutputFormat::Table {
                println!("# Tariff source: {}\n", repo.source());
            }
            output_tariff(output_format, &tariff, &toml)
        }
        TariffAction::Init { path, force } => {
            if path.exists() && !force {
                return Err(ConfigError::SaveError(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }
            let toml = TariffLoader::to_toml_string(&Tariff::default())?;
            std::fs::write(path, toml)?;
            println!("Tariff written to: {}", path.display());
            Ok(())
        }
        TariffAction::Check { path } => {
            let loader = TariffLoader::load_from_file(path)?;
            let tariff = loader.tariff();
            println!("Tariff OK: {}", path.display());
            println!("  Vehicle tiers:       {}", tariff.household.vehicles.len());
            println!("  Document rate cells: {}", tariff.document.rates.cells().count());
            Ok(())
        }
    }
}

fn callback_from_flags(
    name: Option<String>,
    mobile: Option<String>,
    email: Option<String>,
    remarks: Option<String>,
) -> Result<CallbackRequest> {
    let mut request = CallbackRequest::new(name.unwrap_or_default(), mobile.unwrap_or_default());
    if let Some(email) = email {
        request = request.with_email(email);
    }
    if let Some(remarks) = remarks {
        request = request.with_remarks(remarks);
    }
    Ok(request.validated()?)
}

fn cmd_callback(config: &Config, request: &CallbackRequest, output_format: OutputFormat) -> Result<()> {
    let message = callback_notification(request, &Branding::from(config));
    output_email(output_format, &message)
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_tariff: Option<PathBuf>,
    clear_tariff: bool,
    set_company: Option<String>,
    set_phone: Option<String>,
    set_office_email: Option<String>,
    set_whatsapp: Option<String>,
    set_validity: Option<u32>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_tariff {
        // Reject a broken tariff before it becomes the default
        TariffLoader::load_from_file(&path)?;
        config.tariff_path = Some(path);
        modified = true;
    }

    if clear_tariff {
        config.tariff_path = None;
        modified = true;
    }

    if let Some(name) = set_company {
        config.company_name = name;
        modified = true;
    }

    if let Some(phone) = set_phone {
        config.company_phone = phone;
        modified = true;
    }

    if let Some(email) = set_office_email {
        config.office_email = email;
        modified = true;
    }

    if let Some(number) = set_whatsapp {
        config.whatsapp_number = Some(number).filter(|n| !n.trim().is_empty());
        modified = true;
    }

    if let Some(days) = set_validity {
        config.quote_validity_days = days;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_from_flags_trims() {
        let request = callback_from_flags(
            Some("  Sam ".to_string()),
            Some("99000 56394".to_string()),
            Some("   ".to_string()),
            Some("after 6pm".to_string()),
        )
        .unwrap();
        assert_eq!(request.name, "Sam");
        assert_eq!(request.email, None);
        assert_eq!(request.remarks.as_deref(), Some("after 6pm"));
    }

    #[test]
    fn test_callback_from_flags_requires_mobile() {
        let err = callback_from_flags(Some("Sam".to_string()), None, None, None).unwrap_err();
        assert!(matches!(err, Error::Quote(QuoteError::MissingField("mobile"))));
    }
}
