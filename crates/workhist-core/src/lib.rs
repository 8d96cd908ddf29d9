//! Core library for Workhist.
//!
//! This crate collects commit records from the configured repositories,
//! merges them into one timeline and renders the activity report.

mod collector;
mod error;
mod report;
mod timeline;
mod wrap;

pub use collector::{Collector, GitLogSource, LogSource};
pub use error::{CoreError, CoreResult};
pub use report::{ColumnWidths, RenderOptions, Report};
pub use timeline::Timeline;
pub use wrap::wrap;
