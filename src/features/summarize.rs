use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::ai::CompletionProvider;
use crate::ai::prompt_builder::{SYSTEM_PROMPT, build_user_prompt};
use crate::core::config::DEFAULT_TIMEOUT_SECS;
use crate::core::models::{CompletionOutput, Summary, SummaryResponse};
use crate::errors::SummaryError;
use crate::store::SummaryRepository;

/// Summary pipeline: provider call, identifier assignment, persistence.
///
/// Cheap to clone; clones share the provider and repository.
#[derive(Clone)]
pub struct SummaryService {
    provider: Arc<dyn CompletionProvider>,
    repository: Arc<dyn SummaryRepository>,
    completion_timeout: Duration,
}

impl SummaryService {
    #[must_use]
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        repository: Arc<dyn SummaryRepository>,
    ) -> Self {
        Self {
            provider,
            repository,
            completion_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Bounds every provider call; an elapsed call counts as a provider outage.
    #[must_use]
    pub fn with_timeout(mut self, completion_timeout: Duration) -> Self {
        self.completion_timeout = completion_timeout;
        self
    }

    #[must_use]
    pub fn repository(&self) -> &Arc<dyn SummaryRepository> {
        &self.repository
    }

    pub(crate) async fn complete(&self, text: &str) -> Result<CompletionOutput, SummaryError> {
        let user_prompt = build_user_prompt(text);
        tokio::time::timeout(
            self.completion_timeout,
            self.provider.complete(SYSTEM_PROMPT, &user_prompt),
        )
        .await
        .unwrap_or_else(|_| {
            Err(SummaryError::ProviderUnavailable(format!(
                "{} did not answer within {:?}",
                self.provider.name(),
                self.completion_timeout
            )))
        })
    }

    /// Summarizes one text and stores the result.
    ///
    /// Nothing is saved when the provider call fails.
    ///
    /// # Errors
    ///
    /// Propagates the provider error unchanged.
    pub async fn summarize(&self, text: &str) -> Result<SummaryResponse, SummaryError> {
        let output = self.complete(text).await?;
        let summary = Summary::new(output.content, output.ctas);
        let response = SummaryResponse::from(&summary);
        self.repository.save(summary);

        info!(summary_id = %response.id, ctas = response.ctas.len(), "Summary created");
        Ok(response)
    }

    /// # Errors
    ///
    /// `SummaryError::NotFound` when no summary has this identifier.
    pub fn get_by_id(&self, id: &str) -> Result<SummaryResponse, SummaryError> {
        self.repository
            .get_by_id(id)
            .map(SummaryResponse::from)
            .ok_or_else(|| SummaryError::NotFound(id.to_string()))
    }

    #[must_use]
    pub fn list_ids(&self) -> Vec<String> {
        self.repository.list_ids()
    }
}
