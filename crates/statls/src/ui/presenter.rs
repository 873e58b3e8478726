use std::borrow::Cow;
use std::io::{self, Write};

use serde::Serialize;

use super::style::EntryStyle;
use crate::domain::EntryResult;

/// Renders an ordered sequence of collected entries.
///
/// Presenters never reorder or drop results; every failed entry is
/// rendered explicitly.
pub trait Presenter: Send + Sync {
    /// Writes `results` to `out` in the order given.
    ///
    /// # Errors
    /// Returns an error when writing to `out` fails.
    fn render(&self, results: &[EntryResult], out: &mut dyn Write) -> io::Result<()>;
}

/// One line per entry, decorated by an [`EntryStyle`].
pub struct TextPresenter {
    style: Box<dyn EntryStyle>,
}

impl TextPresenter {
    pub fn new(style: Box<dyn EntryStyle>) -> Self {
        Self { style }
    }

    fn line(&self, result: &EntryResult) -> String {
        let name = result.entry.display_name();

        match &result.outcome {
            Ok(metadata) if metadata.is_file() => self.style.file(&name),
            Ok(_) => self.style.non_file(&name),
            Err(failure) => self.style.failed(&name, failure),
        }
    }
}

impl Presenter for TextPresenter {
    fn render(&self, results: &[EntryResult], out: &mut dyn Write) -> io::Result<()> {
        for result in results {
            writeln!(out, "{}", self.line(result))?;
        }

        out.flush()
    }
}

/// A single JSON array with one object per entry.
pub struct JsonPresenter;

#[derive(Serialize)]
struct EntryRecord<'a> {
    name: Cow<'a, str>,
    status: &'static str,
    kind: Option<&'static str>,
    is_file: Option<bool>,
    error: Option<&'a str>,
}

impl<'a> From<&'a EntryResult> for EntryRecord<'a> {
    fn from(result: &'a EntryResult) -> Self {
        let name = result.entry.display_name();

        match &result.outcome {
            Ok(metadata) => Self {
                name,
                status: "ok",
                kind: Some(metadata.kind().as_str()),
                is_file: Some(metadata.is_file()),
                error: None,
            },
            Err(failure) => Self {
                name,
                status: "error",
                kind: None,
                is_file: None,
                error: Some(failure.message.as_str()),
            },
        }
    }
}

impl Presenter for JsonPresenter {
    fn render(&self, results: &[EntryResult], out: &mut dyn Write) -> io::Result<()> {
        let records: Vec<EntryRecord<'_>> = results.iter().map(EntryRecord::from).collect();
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;

        out.flush()
    }
}
