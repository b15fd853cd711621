use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nightjet_checker::booking::{BookingClient, BookingConfig, DEFAULT_BASE_URL, DEFAULT_LANG};
use nightjet_checker::cache::{CacheConfig, CachedBookingApi};
use nightjet_checker::domain::Traveler;
use nightjet_checker::journey::{JourneySpec, run_journeys};
use nightjet_checker::report::{render_text, write_html};

/// Log filter used when RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "nightjet_checker=info";

/// Night train connection and offer checker
#[derive(Parser)]
#[command(name = "nightjet-checker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Journeys as ORIGIN|DESTINATION|DATE[|COUNT[|RETURN_DATE]]
    ///
    /// Dates are YYYY-MM-DD or +N for N days from today. COUNT defaults to 3.
    /// Example: "München|Mailand|2025-10-18|6|2025-10-27"
    #[arg(required = true, value_name = "JOURNEY")]
    journeys: Vec<String>,

    /// Traveler as GENDER:YEAR_OF_BIRTH, repeatable (default: male:1980)
    #[arg(short, long = "traveler", value_name = "GENDER:YEAR")]
    travelers: Vec<Traveler>,

    /// Also write the report as HTML to this file
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Booking backend base URL
    #[arg(long, env = "NIGHTJET_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request language
    #[arg(long, env = "NIGHTJET_LANG", default_value = DEFAULT_LANG)]
    lang: String,

    /// Request timeout in seconds
    #[arg(long, env = "NIGHTJET_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    let specs = match cli
        .journeys
        .iter()
        .map(|j| JourneySpec::parse(j, today))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(specs) => specs,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let config = BookingConfig::new()
        .with_base_url(cli.base_url)
        .with_lang(cli.lang)
        .with_timeout(cli.timeout_secs);

    let client = match BookingClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "failed to create booking client");
            return ExitCode::FAILURE;
        }
    };
    let api = CachedBookingApi::new(client, &CacheConfig::default());

    info!(journeys = specs.len(), travelers = cli.travelers.len(), "checking journeys");
    let reports = run_journeys(&api, specs, &cli.travelers).await;

    print!("{}", render_text(&reports, today));

    if let Some(path) = &cli.html {
        if let Err(err) = write_html(path, &reports, today) {
            error!(error = %err, "failed to write HTML report");
            return ExitCode::FAILURE;
        }
        info!(path = %path.display(), "HTML report written");
    }

    if reports.iter().any(|r| r.is_failure()) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
