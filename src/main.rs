//! CLI entry point for the acadcalc tool.
//!
//! Provides subcommands for computing a semester average from a subjects CSV,
//! a cumulative average from a semesters CSV, and an interactive terminal
//! form.

mod interactive;

use acadcalc::analyzers::cgpa::aggregate_cgpa;
use acadcalc::analyzers::classify::classify;
use acadcalc::analyzers::sgpa::aggregate_sgpa;
use acadcalc::analyzers::utility::format_points;
use acadcalc::input::{load_semester_rows, load_subject_rows};
use acadcalc::output::{CalcReport, append_record, print_json, print_pretty};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "acadcalc")]
#[command(about = "A calculator for semester and cumulative grade-point averages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a semester GPA from a subjects CSV (name,grade,credits)
    Sgpa {
        /// Path to the subjects CSV file
        #[arg(value_name = "FILE")]
        source: String,

        /// CSV file to append the result report to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the result report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute a cumulative GPA from a semesters CSV (semester,sgpa,credits)
    Cgpa {
        /// Path to the semesters CSV file
        #[arg(value_name = "FILE")]
        source: String,

        /// CSV file to append the result report to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the result report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Edit subject and semester rows in an interactive terminal form
    Interactive {
        /// Milliseconds to linger on the "Calculating..." state (0 disables)
        #[arg(long, default_value_t = 600)]
        delay_ms: u64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/acadcalc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("acadcalc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sgpa {
            source,
            output,
            json,
        } => {
            let rows = load_subject_rows(&source)?;
            let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();

            match aggregate_sgpa(&entries) {
                Some(value) => {
                    let level = classify(value);
                    info!(rows = rows.len(), sgpa = %format_points(value), level = %level, "SGPA calculated");
                    println!("SGPA: {} ({})", format_points(value), level);

                    let report = CalcReport::sgpa(value);
                    print_pretty(&report);
                    if json {
                        print_json(&report)?;
                    }
                    if let Some(path) = output {
                        append_record(&path, &report)?;
                    }
                }
                None => {
                    warn!(rows = rows.len(), "No subject carries a grade, nothing to calculate");
                    println!("No subject carries a grade, nothing to calculate");
                }
            }
        }
        Commands::Cgpa {
            source,
            output,
            json,
        } => {
            let rows = load_semester_rows(&source)?;
            let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();

            let aggregate = aggregate_cgpa(&entries)?;
            let level = classify(aggregate.value);
            info!(
                rows = rows.len(),
                cgpa = %format_points(aggregate.value),
                calculation_type = %aggregate.calculation_type,
                level = %level,
                "CGPA calculated"
            );
            println!(
                "CGPA: {} ({}, {})",
                format_points(aggregate.value),
                level,
                aggregate.calculation_type
            );

            let report = CalcReport::cgpa(&aggregate);
            print_pretty(&report);
            if json {
                print_json(&report)?;
            }
            if let Some(path) = output {
                append_record(&path, &report)?;
            }
        }
        Commands::Interactive { delay_ms } => {
            let delay = (delay_ms > 0).then(|| Duration::from_millis(delay_ms));
            interactive::run(delay)?;
        }
    }

    Ok(())
}
