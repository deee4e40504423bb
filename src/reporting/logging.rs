use log::{debug, error, info, warn};

use crate::config::Config;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let batch_size = config.batch_size();
    let timeout = config.timeout_duration().as_millis();
    let batch_delay = config.batch_delay_duration().as_millis();

    info!("Configuration: batch_size={batch_size}, timeout={timeout}ms, batch_delay={batch_delay}ms");
    match config.deadline {
        Some(deadline) => info!("Deadline: {deadline}s"),
        None => info!("Deadline: none"),
    }
    info!("Ignore suffixes: {}", config.ignore_suffixes().len());
}

/// Log discovery information
pub fn log_discovery_info(total_entries: usize, with_links: usize) {
    info!(
        "Discovered {total_entries} markdown file(s), {with_links} with a resolvable edit link"
    );
    if total_entries > with_links {
        debug!("{} file(s) matched no edit rule", total_entries - with_links);
    }
}

/// Log check start
pub fn log_check_start(entry_count: usize, batch_count: usize) {
    info!("Starting URL checks: {entry_count} entries in {batch_count} batch(es)");
}

/// Log check completion
pub fn log_check_complete(broken: usize, unreachable: usize, duration_ms: u128) {
    if broken == 0 && unreachable == 0 {
        info!("✅ Check complete: all edit links valid ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Check complete: {broken} broken, {unreachable} unreachable ({duration_ms}ms)"
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
