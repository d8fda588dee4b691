//! Summary Maker - an HTTP service that turns free text into a summary plus
//! suggested calls-to-action using an LLM completion provider.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP surface
//! - reqwest + openai-api-rs message types for the completion provider
//! - an in-memory repository shared by all requests
//! - Tokio tasks to fan a batch out across concurrent provider calls
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use summary_maker::ai::LlmClient;
//! use summary_maker::core::config::AppConfig;
//! use summary_maker::features::SummaryService;
//! use summary_maker::store::InMemorySummaryRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     summary_maker::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let service = SummaryService::new(
//!         Arc::new(LlmClient::new(&config)?),
//!         Arc::new(InMemorySummaryRepository::new()),
//!     );
//!
//!     let summary = service
//!         .summarize("Met with Jordan about the Phoenix deliverables and next steps.")
//!         .await?;
//!     println!("{}: {}", summary.id, summary.summary);
//!     for cta in &summary.ctas {
//!         println!("  - {cta}");
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod store;

pub use errors::SummaryError;

/// Configure structured JSON logging.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless.
///
/// # Example
///
/// ```
/// summary_maker::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
