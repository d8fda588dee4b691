#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use summary_maker::ai::CompletionProvider;
use summary_maker::core::models::CompletionOutput;
use summary_maker::errors::SummaryError;
use summary_maker::features::SummaryService;
use summary_maker::store::InMemorySummaryRepository;

pub const SESSION_NOTES: &str = "Hi Coach, I just finished a session with Jordan. \
    Jordan feels like they are hitting a wall with the Project Phoenix deliverables.";

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Auth,
    BadRequest,
    Unavailable,
    Panic,
}

#[derive(Debug, Clone)]
enum Rule {
    Fail(String, Failure),
    Delay(String, Duration),
}

/// Scripted completion provider. Replies echo the user text so tests can
/// match outputs to inputs.
#[derive(Default)]
pub struct MockProvider {
    rules: Mutex<Vec<Rule>>,
    ctas: Vec<String>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ctas(mut self, ctas: &[&str]) -> Self {
        self.ctas = ctas.iter().map(ToString::to_string).collect();
        self
    }

    /// Fail any call whose user text contains `marker`.
    pub fn fail_when(self, marker: &str, failure: Failure) -> Self {
        self.rules
            .lock()
            .unwrap()
            .push(Rule::Fail(marker.to_string(), failure));
        self
    }

    /// Delay any call whose user text contains `marker`.
    pub fn delay_when(self, marker: &str, delay: Duration) -> Self {
        self.rules
            .lock()
            .unwrap()
            .push(Rule::Delay(marker.to_string(), delay));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn matching_rules(&self, user_text: &str) -> (Option<Duration>, Option<Failure>) {
        let rules = self.rules.lock().unwrap();
        let mut delay = None;
        let mut failure = None;
        for rule in rules.iter() {
            match rule {
                Rule::Delay(marker, d) if user_text.contains(marker.as_str()) => delay = Some(*d),
                Rule::Fail(marker, f) if user_text.contains(marker.as_str()) => failure = Some(*f),
                _ => {}
            }
        }
        (delay, failure)
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(
        &self,
        _instructions: &str,
        user_text: &str,
    ) -> Result<CompletionOutput, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let (delay, failure) = self.matching_rules(user_text);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match failure {
            Some(Failure::Auth) => Err(SummaryError::ProviderAuth("status 401".to_string())),
            Some(Failure::BadRequest) => {
                Err(SummaryError::ProviderRequest("status 400".to_string()))
            }
            Some(Failure::Unavailable) => {
                Err(SummaryError::ProviderUnavailable("status 503".to_string()))
            }
            Some(Failure::Panic) => panic!("mock provider crashed"),
            None => Ok(CompletionOutput {
                content: format!("Summary of: {user_text}"),
                ctas: self.ctas.clone(),
            }),
        }
    }
}

pub fn service_with(
    provider: MockProvider,
) -> (SummaryService, Arc<MockProvider>, Arc<InMemorySummaryRepository>) {
    let provider = Arc::new(provider);
    let repository = Arc::new(InMemorySummaryRepository::new());
    let service = SummaryService::new(provider.clone(), repository.clone());
    (service, provider, repository)
}

pub fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
