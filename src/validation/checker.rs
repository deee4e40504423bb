use async_trait::async_trait;
use futures::future::join_all;
use log::debug;
use serde::Serialize;
use tokio::time::{sleep, timeout};

use crate::config::Config;
use crate::core::constants::http_status;
use crate::core::error::{EditLinksError, Result};
use crate::core::types::PathEntry;

/// An entry whose probe failed at the transport level (timeout, DNS
/// failure, connection reset). Recorded alongside broken links instead of
/// failing the run, so one unreachable host cannot sink a whole check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnreachableEntry {
    pub entry: PathEntry,
    pub reason: String,
}

/// Aggregated outcome of one checker run. Held in memory for the duration
/// of the run only; nothing is persisted.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CheckReport {
    /// Entries whose edit link answered HTTP 404
    pub broken: Vec<PathEntry>,
    /// Entries whose probe never produced a status
    pub unreachable: Vec<UnreachableEntry>,
}

impl CheckReport {
    /// A clean run: every probed link resolved to something other than 404
    /// and every host answered.
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty() && self.unreachable.is_empty()
    }

    pub fn broken_count(&self) -> usize {
        self.broken.len()
    }
}

#[derive(Debug)]
enum ProbeOutcome {
    /// Link answered with a non-404 status
    Valid,
    /// Entry had no edit link or matched an ignore suffix
    Skipped,
    Broken(PathEntry),
    Unreachable(UnreachableEntry),
}

#[async_trait]
pub trait CheckEditLinks {
    async fn check_edit_links(
        &self,
        entries: Vec<PathEntry>,
        config: &Config,
    ) -> Result<CheckReport>;
}

/// Probes edit links over HTTP HEAD, in concurrently-running batches with
/// per-batch pacing.
#[derive(Default, Debug)]
pub struct LinkChecker {}

impl LinkChecker {
    /// Split entries into batches of `batch_size` in input order. The last
    /// batch may be short; every entry lands in exactly one batch.
    pub fn partition_batches(entries: Vec<PathEntry>, batch_size: usize) -> Vec<Vec<PathEntry>> {
        let batch_size = batch_size.max(1);
        entries
            .chunks(batch_size)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    fn build_client(config: &Config) -> Result<reqwest::Client> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        // No client-level timeout: each probe carries its own, so one slow
        // host cannot starve unrelated requests of budget.
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(client)
    }

    /// Probe a single entry. Timeouts and transport errors become
    /// `Unreachable` outcomes; only an HTTP 404 marks the entry broken.
    async fn probe(
        client: &reqwest::Client,
        entry: PathEntry,
        config: &Config,
        ignore_suffixes: &[String],
    ) -> ProbeOutcome {
        let Some(link) = entry.edit_link.clone() else {
            debug!("- {} -> skipped (no edit link)", entry.file_path.display());
            return ProbeOutcome::Skipped;
        };

        if entry.is_ignored(ignore_suffixes) {
            debug!("- {} -> skipped (ignored)", entry.file_path.display());
            return ProbeOutcome::Skipped;
        }

        let request = client.head(&link).timeout(config.timeout_duration());

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("- {link} -> {status}");
                if status == http_status::NOT_FOUND {
                    ProbeOutcome::Broken(entry)
                } else {
                    ProbeOutcome::Valid
                }
            }
            Err(err) => {
                let reason = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                debug!("- {link} -> {reason}");
                ProbeOutcome::Unreachable(UnreachableEntry { entry, reason })
            }
        }
    }

    /// Probe all entries of one batch concurrently, then pause before the
    /// batch task yields its results. The pause is deliberate pacing
    /// against the remote edit-host's abuse protection; it is per batch,
    /// not a global serialization, since batches run concurrently with
    /// each other.
    async fn process_batch(
        client: &reqwest::Client,
        batch: Vec<PathEntry>,
        config: &Config,
        ignore_suffixes: &[String],
    ) -> Vec<ProbeOutcome> {
        let probes = batch
            .into_iter()
            .map(|entry| Self::probe(client, entry, config, ignore_suffixes));

        let outcomes = join_all(probes).await;

        let delay = config.batch_delay_duration();
        if !delay.is_zero() {
            sleep(delay).await;
        }

        outcomes
    }
}

#[async_trait]
impl CheckEditLinks for LinkChecker {
    async fn check_edit_links(
        &self,
        entries: Vec<PathEntry>,
        config: &Config,
    ) -> Result<CheckReport> {
        let client = Self::build_client(config)?;
        let ignore_suffixes = config.ignore_suffixes();
        let batches = Self::partition_batches(entries, config.batch_size());

        debug!("Processing {} batches concurrently", batches.len());

        let run = async {
            let batch_futures = batches
                .into_iter()
                .map(|batch| Self::process_batch(&client, batch, config, &ignore_suffixes));

            join_all(batch_futures).await
        };

        // The run-level deadline drops every in-flight probe on expiry;
        // dropped futures abort their requests.
        let batch_outcomes = match config.deadline_duration() {
            Some(deadline) => timeout(deadline, run).await.map_err(|_| {
                EditLinksError::DeadlineExceeded(config.deadline.unwrap_or_default())
            })?,
            None => run.await,
        };

        let mut report = CheckReport::default();
        for outcome in batch_outcomes.into_iter().flatten() {
            match outcome {
                ProbeOutcome::Valid | ProbeOutcome::Skipped => {}
                ProbeOutcome::Broken(entry) => report.broken.push(entry),
                ProbeOutcome::Unreachable(entry) => report.unreachable.push(entry),
            }
        }

        Ok(report)
    }
}
