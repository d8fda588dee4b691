//! Use cases exposed to the HTTP boundary

pub mod batch;
pub mod summarize;

pub use summarize::SummaryService;
