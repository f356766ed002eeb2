use clap::Parser;
use workitem_status::core::runner::BANNER;
use workitem_status::utils::{loader, logger};
use workitem_status::{AppError, CliConfig, Settings, StatusRunner, WebDriverPortal};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = logger::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("failed to open log file: {}", e);
        std::process::exit(2);
    }

    tracing::info!("{}", BANNER);
    tracing::info!(">>> Starting Work Item Status Confirmation");
    tracing::info!("{}", BANNER);

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    // The input file is checked before any browser session exists; a missing
    // file aborts with exit code 1.
    let mvas = match loader::load_mvas(&settings.input_file) {
        Ok(mvas) => mvas,
        Err(e @ AppError::InputFileMissing { .. }) => {
            tracing::error!(
                "Could not find the CSV file. Please make sure {} exists.",
                settings.input_file.display()
            );
            tracing::error!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Failed to load MVAs: {}", e);
            std::process::exit(2);
        }
    };
    tracing::info!("Loaded {} MVAs from {}", mvas.len(), settings.input_file.display());

    let portal = match WebDriverPortal::connect(&settings.portal).await {
        Ok(portal) => portal,
        Err(e) => {
            tracing::error!("Failed to create WebDriver session: {}", e);
            std::process::exit(2);
        }
    };
    tracing::info!("Driver initialized.");

    let runner = StatusRunner::new(portal, settings.delay);
    match runner.run(&settings.credentials, &mvas).await {
        Ok(summary) => {
            tracing::info!(
                "Run complete: {} closed, {} open, {} unknown, {} skipped.",
                summary.closed(),
                summary.open(),
                summary.unknown(),
                summary.skipped()
            );
        }
        Err(e) => {
            // Per-identifier failures never reach here; this is the run-level
            // catch. The session was already torn down by the runner, so the
            // process still exits normally.
            tracing::error!("An error occurred: {}", e);
        }
    }
}
