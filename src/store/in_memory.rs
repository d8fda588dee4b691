use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use super::SummaryRepository;
use crate::core::models::Summary;

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<String, Summary>,
    // insertion order of first save, for deterministic listing
    order: Vec<String>,
}

/// In-memory repository. Map and order list share one lock so a reader never
/// observes an id without its entity.
#[derive(Debug, Default)]
pub struct InMemorySummaryRepository {
    inner: RwLock<Inner>,
}

impl InMemorySummaryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SummaryRepository for InMemorySummaryRepository {
    fn save(&self, summary: Summary) {
        let mut inner = self.inner.write();
        let id = summary.id.clone();
        if inner.by_id.insert(id.clone(), summary).is_none() {
            inner.order.push(id.clone());
        }
        debug!(summary_id = %id, stored = inner.order.len(), "Summary saved");
    }

    fn get_by_id(&self, id: &str) -> Option<Summary> {
        self.inner.read().by_id.get(id).cloned()
    }

    fn list_ids(&self) -> Vec<String> {
        self.inner.read().order.clone()
    }

    fn len(&self) -> usize {
        self.inner.read().order.len()
    }
}
