//! CLI entry point for the traffic survey analyser.
//!
//! Runs an interactive session by default, prompting for a survey date and
//! repeating on request, or a single non-interactive report.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use traffic_analyser::config::AnalyserConfig;
use traffic_analyser::session::{RunOptions, SurveyDate, run_interactive, run_report};

#[derive(Parser)]
#[command(name = "traffic_analyser")]
#[command(about = "Summarise a day of junction traffic survey data", long_about = None)]
struct Cli {
    /// JSON config file; defaults are used when omitted
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for survey dates and report on each (the default)
    Interactive,
    /// Report on one survey date without prompting
    Report {
        /// Survey date, e.g. 2024-06-15
        #[arg(short, long)]
        date: NaiveDate,

        /// Survey CSV to read instead of the one named after the date
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also print the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Skip writing the histogram
        #[arg(long, default_value_t = false)]
        no_chart: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/traffic_analyser.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("traffic_analyser.log"));

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
    let config = AnalyserConfig::load_or_default(cli.config.as_deref())?;
    info!(
        data_dir = %config.data_dir.display(),
        results = %config.results_path.display(),
        "Configuration loaded"
    );

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            run_interactive(&config, &mut input, &mut output)?;
        }
        Commands::Report {
            date,
            file,
            json,
            no_chart,
        } => {
            let date = SurveyDate::try_from(date)?;
            let options = RunOptions {
                file,
                json,
                chart: !no_chart,
            };
            let mut output = std::io::stdout();
            run_report(&config, &date, &options, &mut output)?;
        }
    }

    Ok(())
}
