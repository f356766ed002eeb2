use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "workitem-status")]
#[command(about = "Confirm PM work item status for a list of MVAs")]
pub struct CliConfig {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// CSV file of MVA identifiers, one per record (overrides run.input_file)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// WebDriver server URL (overrides webdriver.url)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Seconds to pause after typing an identifier (overrides run.delay_seconds)
    #[arg(long)]
    pub delay: Option<u64>,

    /// Run the browser headless
    #[arg(long)]
    pub headless: bool,

    /// Append log lines to this file in addition to stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
