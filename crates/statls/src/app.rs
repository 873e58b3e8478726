//! Wiring of configuration, collection, and presentation for one run.

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use crate::collector::MetadataCollector;
use crate::config::{Config, OutputFormat};
use crate::error::AppError;
use crate::infra::fs::FsClient;
use crate::ui::presenter::{JsonPresenter, Presenter, TextPresenter};
use crate::ui::style::{HighlightStyle, PlainStyle};

/// Counts reported after a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub failures: usize,
}

/// Picks the presenter and style strategy that `config` asks for.
pub fn presenter_for(config: &Config) -> Box<dyn Presenter> {
    match config.format {
        OutputFormat::Json => Box::new(JsonPresenter),
        OutputFormat::Text if config.highlight => {
            Box::new(TextPresenter::new(Box::new(HighlightStyle)))
        }
        OutputFormat::Text => Box::new(TextPresenter::new(Box::new(PlainStyle))),
    }
}

/// Collects `config.directory` through `fs` and renders it into `out`.
///
/// Nothing is written when the directory cannot be listed.
///
/// # Errors
/// Returns an error when listing fails or output cannot be written.
pub async fn run(
    config: &Config,
    fs: Arc<dyn FsClient>,
    out: &mut dyn Write,
) -> Result<RunSummary, AppError> {
    let collector = MetadataCollector::new(fs).with_max_in_flight(config.max_in_flight);
    let results = collector.collect(&config.directory).await?;

    presenter_for(config).render(&results, out)?;

    let summary = RunSummary {
        entries: results.len(),
        failures: results.iter().filter(|result| result.is_failed()).count(),
    };
    info!(
        path = %config.directory.display(),
        entries = summary.entries,
        failures = summary.failures,
        "Listing complete"
    );

    Ok(summary)
}
