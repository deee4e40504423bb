// Command-line interface definitions and parsing for editlinks

use clap::Parser;

use crate::config::CliConfig;
use crate::core::constants::output_formats;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory of the markdown documentation tree
    #[arg(value_name = "DOCS_DIR")]
    pub docs_dir: String,

    /// JSON file containing the ordered edit-rule table
    #[arg(long, value_name = "FILE")]
    pub rules: String,

    // Core Options
    /// Entries probed per batch (default: 5)
    #[arg(short = 'b', long, value_name = "COUNT", help_heading = "Core Options")]
    pub batch_size: Option<usize>,

    /// Per-request timeout in milliseconds (default: 5000)
    #[arg(short = 't', long, value_name = "MS", help_heading = "Core Options")]
    pub timeout: Option<u64>,

    /// Pause after each batch's probes in milliseconds (default: 1000)
    #[arg(long, value_name = "MS", help_heading = "Core Options")]
    pub batch_delay: Option<u64>,

    /// Overall run deadline in seconds (no deadline when omitted)
    #[arg(long, value_name = "SECONDS", help_heading = "Core Options")]
    pub deadline: Option<u64>,

    // Filtering
    /// File-path suffix to skip (repeatable; replaces the built-in list)
    #[arg(long = "ignore", value_name = "SUFFIX", help_heading = "Filtering")]
    pub ignore: Vec<String>,

    // Output & Verbosity
    /// Suppress all output except the report
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into the CliConfig overlay
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        batch_size: cli.batch_size,
        timeout: cli.timeout,
        batch_delay: cli.batch_delay,
        deadline: cli.deadline,
        ignore: if cli.ignore.is_empty() {
            None
        } else {
            Some(cli.ignore.clone())
        },
        user_agent: cli.user_agent.clone(),
        output_format: cli.format.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
