//! Batch orchestration: fan out one task per input, fan back in by index.

use tokio::task::JoinSet;
use tracing::{error, info, warn};

use super::SummaryService;
use crate::core::models::{BatchItem, BatchResponse};

/// Reported for a slot whose task died without producing a result.
pub const ABORTED_ITEM_MESSAGE: &str = "Summary processing aborted unexpectedly.";

impl SummaryService {
    /// Summarizes every text concurrently.
    ///
    /// All tasks are launched before any is awaited. `items[i]` always
    /// corresponds to `texts[i]`; a failing item never affects its siblings.
    /// Dropping the returned future aborts tasks still in flight.
    pub async fn summarize_batch(&self, texts: Vec<String>) -> BatchResponse {
        if texts.is_empty() {
            return BatchResponse::default();
        }

        let total = texts.len();
        info!(items = total, "Starting batch summarization");

        let mut tasks = JoinSet::new();
        for (index, text) in texts.into_iter().enumerate() {
            let service = self.clone();
            tasks.spawn(async move { (index, service.summarize(&text).await) });
        }

        let mut slots: Vec<Option<BatchItem>> = vec![None; total];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(summary))) => {
                    slots[index] = Some(BatchItem::Summary(summary));
                }
                Ok((index, Err(e))) => {
                    warn!(index, error = %e, "Batch item failed");
                    slots[index] = Some(BatchItem::Error(e.detail()));
                }
                Err(e) => {
                    // the slot is filled below
                    error!(error = %e, "Batch task did not complete");
                }
            }
        }

        let items: Vec<BatchItem> = slots
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| BatchItem::Error(ABORTED_ITEM_MESSAGE.to_string())))
            .collect();

        let failed = items.iter().filter(|item| item.error().is_some()).count();
        info!(items = total, failed, "Batch summarization finished");

        BatchResponse { items }
    }
}
