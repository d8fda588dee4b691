//! Provider contract used by the summary service.

use async_trait::async_trait;

use crate::core::models::CompletionOutput;
use crate::errors::SummaryError;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Runs one completion and returns the validated structured output.
    ///
    /// # Errors
    ///
    /// `ProviderAuth`, `ProviderRequest` or `ProviderUnavailable` depending on
    /// how the provider failed.
    async fn complete(
        &self,
        instructions: &str,
        user_text: &str,
    ) -> Result<CompletionOutput, SummaryError>;

    /// Blocking form of [`CompletionProvider::complete`] for callers that are
    /// not running inside an async runtime.
    ///
    /// # Errors
    ///
    /// Same as `complete`, plus `Config` when called from inside a tokio
    /// runtime and `ProviderUnavailable` if the private runtime cannot be
    /// started.
    fn complete_blocking(
        &self,
        instructions: &str,
        user_text: &str,
    ) -> Result<CompletionOutput, SummaryError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(SummaryError::Config(
                "complete_blocking called from inside an async runtime; await complete instead"
                    .to_string(),
            ));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                SummaryError::ProviderUnavailable(format!("failed to start runtime: {e}"))
            })?;
        runtime.block_on(self.complete(instructions, user_text))
    }
}
