use clap::Parser;
use editlinks::config::{CliConfig, Config};
use editlinks::core::constants::output_formats;
use editlinks::reporting::logging;
use editlinks::ui::{Cli, DisplayMetadata, cli_to_config, output};
use editlinks::validation::{CheckEditLinks, LinkChecker};
use editlinks::{Result, collect_entries, load_edit_rules};

use std::path::Path;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Failed to check edit links: {e}");
            std::process::exit(2);
        }
    }
}

/// Main checking pipeline extracted from main() for testing
async fn run(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);
    let mut config = load_and_merge_config(&cli_config)?;

    // Environment overrides win last and are read only here, at the
    // process boundary; the library itself never touches the environment.
    config.apply_env_overrides()?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let rules = load_edit_rules(&cli.rules)?;

    let docs_root = Path::new(&cli.docs_dir);
    let entries = collect_entries(docs_root, &rules)?;

    let ignore_suffixes = config.ignore_suffixes();
    let files_scanned = entries.len();
    let with_edit_links = entries.iter().filter(|e| e.has_edit_link()).count();
    let ignored = entries
        .iter()
        .filter(|e| e.has_edit_link() && e.is_ignored(&ignore_suffixes))
        .count();

    logging::log_discovery_info(files_scanned, with_edit_links);
    logging::log_check_start(files_scanned, files_scanned.div_ceil(config.batch_size()));

    let started = Instant::now();
    let checker = LinkChecker::default();
    let report = checker.check_edit_links(entries, &config).await?;
    logging::log_check_complete(
        report.broken_count(),
        report.unreachable.len(),
        started.elapsed().as_millis(),
    );

    let metadata = DisplayMetadata {
        files_scanned,
        with_edit_links,
        ignored,
    };
    let format = config
        .output_format
        .clone()
        .unwrap_or_else(|| output_formats::DEFAULT.to_string());
    output::display_report(&report, &metadata, &format);

    Ok(if report.is_clean() { 0 } else { 1 })
}

/// Load configuration from file or standard locations and merge with CLI config
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI arguments take precedence over file configuration
    config.merge_with_cli(cli_config);
    Ok(config)
}
