use crate::core::{aggregate, parser, report, DataSource};
use crate::utils::error::{Result, RosterError};

/// Drives one read-and-aggregate cycle against a roster source.
///
/// Holds no mutable state; every call re-reads the source, so concurrent
/// cycles against the same file are independent.
pub struct RosterPipeline<S: DataSource> {
    source: S,
}

impl<S: DataSource> RosterPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads the source, aggregates the roster, and renders the report.
    ///
    /// A source that cannot be read, or that yields zero usable rows,
    /// fails; malformed individual rows are dropped silently upstream.
    pub async fn count_students(&self) -> Result<String> {
        let raw = self.source.read().await?;
        render_from_raw(&raw)
    }
}

/// Synchronous counterpart of [`RosterPipeline::count_students`] for
/// one-shot command-line use.
pub fn count_students_from_path(path: &str) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    render_from_raw(&raw)
}

fn render_from_raw(raw: &str) -> Result<String> {
    let roster = parser::parse_roster(raw)?;
    tracing::debug!("Parsed {} student records", roster.len());

    let summary = aggregate::summarize(&roster);
    if summary.total_students == 0 {
        return Err(RosterError::EmptyDatabaseError);
    }

    tracing::debug!(
        "Aggregated {} students across {} fields",
        summary.total_students,
        summary.fields.len()
    );
    Ok(report::render_report(&summary))
}
