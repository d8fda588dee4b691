//! Summary Store: process-lifetime keyed storage of finalized summaries

pub mod in_memory;

pub use in_memory::InMemorySummaryRepository;

use crate::core::models::Summary;

/// Storage contract for summaries. Implementations must be safe to call from
/// many in-flight requests at once.
pub trait SummaryRepository: Send + Sync {
    /// Inserts or overwrites the summary under its identifier.
    fn save(&self, summary: Summary);

    /// Returns a copy of the stored summary, or `None` for an unknown id.
    fn get_by_id(&self, id: &str) -> Option<Summary>;

    /// All known identifiers.
    fn list_ids(&self) -> Vec<String>;

    fn len(&self) -> usize {
        self.list_ids().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
