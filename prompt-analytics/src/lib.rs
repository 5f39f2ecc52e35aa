//! Analytics over a directory of prompt records.
//!
//! [`PromptCorpus`] loads every JSON document below a directory once and is
//! then queried read-only. Loading is best-effort: files that cannot be read
//! or parsed are skipped, and individual records that lack a field are left
//! out of whichever statistic needs it.

#![warn(missing_docs, clippy::pedantic)]

mod category;
mod compare;
mod corpus;
mod coverage;
mod error;
#[cfg(test)]
mod fixtures;
mod ranking;
mod report;
mod repository;

pub use category::CategoryStats;
pub use compare::{CategoryTally, ModelComparison};
pub use corpus::{CorpusEntry, PromptCorpus, UNKNOWN_CATEGORY};
pub use coverage::{CoverageReport, ModelCoverage};
pub use error::{ReportError, ReportResult};
pub use prompt_primitives::{DEFAULT_METRIC, DEFAULT_TOP_LIMIT};
pub use ranking::TopPrompt;
pub use report::Report;
pub use repository::RepositoryStats;

/// Rounds `value` to `places` decimal places, resolving exact halves to the
/// even neighbour.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}
