//! lead-capture CLI
//!
//! Command-line front end for validating, rendering, and submitting lead
//! records.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use lead_forms::{
    DISPLAY_ORDER, ErrorMap, Field, FormRecord, FormView, RuleSet, SolutionType, Strictness,
    ZipcodeFormat, render_form,
};
use lead_intake::config::{ENDPOINT_VAR, TIMEOUT_VAR};
use lead_intake::{
    ConfigError, FormController, HttpSubmissionService, IntakeConfig, SubmitOutcome,
};

/// Validate and submit lead enquiries.
#[derive(Parser)]
#[command(name = "lead-capture")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Intake endpoint receiving submitted leads.
    #[arg(short, long, env = ENDPOINT_VAR)]
    endpoint: Option<String>,

    /// Request timeout in seconds (waits indefinitely if not set).
    #[arg(long, env = TIMEOUT_VAR, value_name = "SECS")]
    timeout_secs: Option<String>,

    /// Accepted zipcode shape.
    #[arg(long, value_enum, default_value_t = ZipcodeArg::SixDigit)]
    zipcode_format: ZipcodeArg,

    /// Only format-check free-text fields; allow them to be empty.
    #[arg(long)]
    format_only: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ZipcodeArg {
    /// Exactly six digits.
    SixDigit,
    /// Three to ten letters or digits.
    Alphanumeric,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON lead record and print the errors.
    Validate {
        /// Path to the JSON record.
        file: PathBuf,
    },

    /// Submit a lead record to the intake endpoint.
    Submit {
        /// Path to a JSON record to start from.
        file: Option<PathBuf>,

        /// Field values applied on top of the file, as name=value.
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// Print the form view as HTML.
    Render {
        /// Path to a JSON record to fill the form with.
        file: Option<PathBuf>,

        /// Show validation errors inline.
        #[arg(long)]
        with_errors: bool,
    },

    /// List the form fields and when they are required.
    Fields,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for command output.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let rules = build_rules(cli.zipcode_format, cli.format_only);

    match cli.command {
        Commands::Validate { file } => {
            let record = load_record(Some(&file))?;
            let errors = rules.validate(&record);
            println!("{}", serde_json::to_string_pretty(&errors)?);

            if errors.is_empty() {
                info!("Record is valid.");
                Ok(ExitCode::SUCCESS)
            } else {
                warn!("Record has {} invalid field(s).", errors.len());
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Submit { file, set } => {
            let config = intake_config(cli.endpoint, cli.timeout_secs)
                .context("Invalid intake configuration; see --endpoint and --timeout-secs")?;

            let service = HttpSubmissionService::new(&config)?;
            let mut controller = FormController::with_rules(service, rules);

            let record = load_record(file.as_deref())?;
            for field in Field::ALL {
                controller.set_field(field, record.get(field));
            }
            for pair in &set {
                let (name, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow!("Expected NAME=VALUE, got: {pair}"))?;
                controller.on_field_change(name.trim(), value)?;
            }

            debug!(endpoint = %config.endpoint, "Submitting lead");
            let outcome = controller.submit().await;

            match outcome {
                SubmitOutcome::Succeeded => {
                    info!("Lead submitted successfully.");
                    Ok(ExitCode::SUCCESS)
                }
                _ => {
                    if !controller.errors().is_empty() {
                        println!("{}", serde_json::to_string_pretty(controller.errors())?);
                    }
                    report_failure(controller.global_error())
                }
            }
        }

        Commands::Render { file, with_errors } => {
            let record = load_record(file.as_deref())?;
            let errors = if with_errors {
                rules.validate(&record)
            } else {
                ErrorMap::new()
            };
            let global_error = (!errors.is_empty()).then_some(lead_intake::INVALID_ENTRY);

            println!(
                "{}",
                render_form(&FormView {
                    rules: &rules,
                    record: &record,
                    errors: &errors,
                    global_error,
                    submitting: false,
                })
            );
            Ok(ExitCode::SUCCESS)
        }

        Commands::Fields => {
            println!("\n{:<20} {:<44} Required", "Field", "Label");
            println!("{:-<80}", "");
            for field in DISPLAY_ORDER {
                println!(
                    "{:<20} {:<44} {}",
                    field.as_str(),
                    field.label(),
                    requirement(&rules, field)
                );
            }
            println!();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_rules(zipcode: ZipcodeArg, format_only: bool) -> RuleSet {
    let zipcode = match zipcode {
        ZipcodeArg::SixDigit => ZipcodeFormat::SixDigit,
        ZipcodeArg::Alphanumeric => ZipcodeFormat::Alphanumeric,
    };
    let strictness = if format_only {
        Strictness::FormatOnly
    } else {
        Strictness::Required
    };
    RuleSet::builder()
        .zipcode_format(zipcode)
        .strictness(strictness)
        .build()
}

/// Reads a JSON record, or starts from an empty one.
fn load_record(path: Option<&Path>) -> anyhow::Result<FormRecord> {
    let Some(path) = path else {
        return Ok(FormRecord::new());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    FormRecord::from_json(&json)
        .with_context(|| format!("Invalid lead record in {}", path.display()))
}

/// Builds the intake configuration from the resolved flag values.
///
/// Clap has already applied the environment fallback, so the lookup only
/// sees what was given on the command line or in the environment.
fn intake_config(
    endpoint: Option<String>,
    timeout_secs: Option<String>,
) -> Result<IntakeConfig, ConfigError> {
    IntakeConfig::from_lookup(|key| match key {
        ENDPOINT_VAR => endpoint.clone(),
        TIMEOUT_VAR => timeout_secs.clone(),
        _ => None,
    })
}

/// Describes when a field must be filled in.
fn requirement(rules: &RuleSet, field: Field) -> String {
    let required = rules.rule(field).is_some_and(|r| r.required.is_some());
    match (SolutionType::governing(field), required) {
        (Some(branch), _) => format!("when {branch}"),
        (None, true) => "yes".to_string(),
        (None, false) => "no".to_string(),
    }
}

fn report_failure(message: Option<&str>) -> anyhow::Result<ExitCode> {
    eprintln!("{}", message.unwrap_or("Submission failed."));
    Ok(ExitCode::FAILURE)
}
