// Standard library imports
use std::path::PathBuf;
use std::sync::Arc;

// External crate imports
use anyhow::Result;
use dotenv::dotenv;
use log::{error, info, LevelFilter};

// Internal crate imports
use lnm_smoke::config_loader::AppConfig;
use lnm_smoke::domain::constants::{DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE};
use lnm_smoke::domain::traits::FuturesApi;
use lnm_smoke::infrastructure::exchange::lnmarkets::{LnMarketsRest, LnmParser};
use lnm_smoke::infrastructure::logging::init_logging;
use lnm_smoke::strategies::smoke_test::SmokeRunner;

#[tokio::main]
async fn main() -> Result<()> {
    // .env values act as fallback for credentials missing from the config file
    dotenv().ok();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    // The log file location lives in the config, so read it before the logger exists
    let loaded = AppConfig::from_file(&config_path);
    let log_file = loaded
        .as_ref()
        .map(|config| config.smoke.log_file.clone())
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE));
    init_logging(&log_file, LevelFilter::Debug)?;
    info!("Logger initialized, writing to {}", log_file.display());

    let config = match loaded {
        Ok(config) => config,
        Err(e) => fatal(&format!("Failed to load {}: {}", config_path.display(), e)),
    };

    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => fatal(&format!("API credentials missing: {}", e)),
    };

    let network = match config.network() {
        Ok(network) => network,
        Err(e) => fatal(&e.to_string()),
    };

    let client = match LnMarketsRest::new(credentials, network) {
        Ok(client) => client,
        Err(e) => fatal(&format!("Failed to initialize LN Markets client: {}", e)),
    };

    match client.get_ticker().await {
        Ok(response) => info!(
            "Connected to LN Markets {:?}. Ticker: {}",
            network,
            LnmParser::parse_response(response)
        ),
        Err(e) => fatal(&format!("Failed to initialize LN Markets client: {:#}", e)),
    }

    let runner = SmokeRunner::new(Arc::new(client), config.smoke.clone());
    match runner.run().await {
        Ok(report) => info!("Smoke test finished: {:?}", report),
        Err(e) => error!("Smoke test stopped: {}", e),
    }

    Ok(())
}

/// Startup failures end the process with a non-zero status
fn fatal(message: &str) -> ! {
    error!("{}", message);
    log::logger().flush();
    std::process::exit(1);
}
