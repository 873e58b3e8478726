//! Ordered, concurrent metadata collection for one directory.
//!
//! The collector lists a directory once, starts one metadata query per
//! entry without waiting on any other, then waits for every query to
//! finish. Each query is bound to its listing index at dispatch time, so
//! the returned sequence always follows listing order no matter which
//! query completes first.

use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{DirectoryEntry, EntryMetadata, EntryResult};
use crate::error::{CollectError, MetadataQueryFailed};
use crate::infra::fs::{FsClient, join_entry_path};

type QueryOutcome = Result<EntryMetadata, MetadataQueryFailed>;

/// Collects per-entry metadata for a directory with fan-out/fan-in
/// concurrency.
pub struct MetadataCollector {
    fs: Arc<dyn FsClient>,
    max_in_flight: Option<NonZeroUsize>,
}

impl MetadataCollector {
    /// Creates a collector that runs every entry query at once.
    pub fn new(fs: Arc<dyn FsClient>) -> Self {
        Self {
            fs,
            max_in_flight: None,
        }
    }

    /// Caps how many queries may run simultaneously. `None` keeps the
    /// unbounded fan-out.
    #[must_use]
    pub fn with_max_in_flight(mut self, max_in_flight: Option<NonZeroUsize>) -> Self {
        self.max_in_flight = max_in_flight;

        self
    }

    /// Lists `dir` and returns one [`EntryResult`] per listed entry, in
    /// listing order.
    ///
    /// Individual query failures are recorded in their entry's result and
    /// never abort the batch.
    ///
    /// # Errors
    /// Returns [`CollectError::ListingFailed`] when `dir` cannot be listed.
    /// No entry query is dispatched in that case.
    pub async fn collect(&self, dir: &Path) -> Result<Vec<EntryResult>, CollectError> {
        let started_at = Instant::now();
        let names = self
            .fs
            .list(dir.to_path_buf())
            .await
            .map_err(|source| CollectError::ListingFailed {
                path: dir.to_path_buf(),
                source,
            })?;
        debug!(path = %dir.display(), entries = names.len(), "Listed directory");

        let limiter = self
            .max_in_flight
            .map(|limit| Arc::new(Semaphore::new(limit.get())));
        let pending: Vec<(PathBuf, JoinHandle<QueryOutcome>)> = names
            .iter()
            .map(|name| {
                let path = join_entry_path(dir, name);
                let handle = self.dispatch(path.clone(), limiter.clone());

                (path, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(pending.len());
        for (name, (path, handle)) in names.into_iter().zip(pending) {
            let outcome = handle
                .await
                .unwrap_or_else(|join_error| Err(task_failure(path, &join_error)));
            if let Err(failure) = &outcome {
                warn!(
                    path = %failure.path.display(),
                    error = %failure,
                    "Metadata query failed"
                );
            }

            results.push(EntryResult {
                entry: DirectoryEntry::new(name),
                outcome,
            });
        }

        debug!(
            path = %dir.display(),
            entries = results.len(),
            failures = results.iter().filter(|result| result.is_failed()).count(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "Collected entry metadata"
        );

        Ok(results)
    }

    /// Starts the query for `path` on its own task.
    fn dispatch(
        &self,
        path: PathBuf,
        limiter: Option<Arc<Semaphore>>,
    ) -> JoinHandle<QueryOutcome> {
        let query = self.fs.query(path.clone());

        tokio::spawn(async move {
            // The semaphore is never closed, so a failed acquire only drops
            // the bound for this one query.
            let _permit = match limiter {
                Some(semaphore) => semaphore.acquire_owned().await.ok(),
                None => None,
            };

            query
                .await
                .map_err(|error| MetadataQueryFailed::from_io(path, &error))
        })
    }
}

fn task_failure(path: PathBuf, join_error: &tokio::task::JoinError) -> MetadataQueryFailed {
    MetadataQueryFailed {
        path,
        kind: io::ErrorKind::Other,
        message: format!("metadata query task failed: {join_error}"),
    }
}
