mod common;

use std::time::Duration;

use common::{Failure, MockProvider, SESSION_NOTES, service_with};
use summary_maker::ai::CompletionProvider;
use summary_maker::errors::SummaryError;
use summary_maker::store::SummaryRepository;

#[tokio::test]
async fn test_summarize_returns_provider_ctas_and_fresh_id() {
    let (service, provider, repository) =
        service_with(MockProvider::new().with_ctas(&["Review budget", "Meet Tuesday"]));

    let response = service.summarize(SESSION_NOTES).await.unwrap();

    assert!(!response.id.is_empty());
    assert_eq!(response.ctas, vec!["Review budget", "Meet Tuesday"]);
    assert!(response.summary.contains(SESSION_NOTES));
    assert_eq!(provider.calls(), 1);

    let stored = repository.get_by_id(&response.id).unwrap();
    assert_eq!(stored.content, response.summary);
    assert_eq!(stored.ctas, response.ctas);
}

#[tokio::test]
async fn test_provider_failure_saves_nothing() {
    for failure in [Failure::Auth, Failure::BadRequest, Failure::Unavailable] {
        let (service, _provider, repository) =
            service_with(MockProvider::new().fail_when("Jordan", failure));

        let err = service.summarize(SESSION_NOTES).await.unwrap_err();
        assert!(err.is_provider_error());
        assert!(repository.is_empty(), "nothing saved after {failure:?}");
    }
}

#[tokio::test]
async fn test_provider_error_kinds_propagate_unchanged() {
    let (service, _, _) = service_with(MockProvider::new().fail_when("Jordan", Failure::Auth));
    assert!(matches!(
        service.summarize(SESSION_NOTES).await,
        Err(SummaryError::ProviderAuth(_))
    ));

    let (service, _, _) =
        service_with(MockProvider::new().fail_when("Jordan", Failure::BadRequest));
    assert!(matches!(
        service.summarize(SESSION_NOTES).await,
        Err(SummaryError::ProviderRequest(_))
    ));
}

#[tokio::test]
async fn test_slow_provider_times_out_as_unavailable() {
    let (service, _, repository) = service_with(
        MockProvider::new().delay_when("Jordan", Duration::from_secs(5)),
    );
    let service = service.with_timeout(Duration::from_millis(50));

    let err = service.summarize(SESSION_NOTES).await.unwrap_err();

    assert!(matches!(err, SummaryError::ProviderUnavailable(_)));
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_get_by_id_round_trip_and_not_found() {
    let (service, _, _) = service_with(MockProvider::new().with_ctas(&["Book certification"]));

    let created = service.summarize(SESSION_NOTES).await.unwrap();
    let fetched = service.get_by_id(&created.id).unwrap();
    assert_eq!(fetched, created);

    assert!(matches!(
        service.get_by_id("does-not-exist"),
        Err(SummaryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_concurrent_single_calls_get_distinct_ids() {
    let (service, _, _) = service_with(MockProvider::new());

    let (first, second) = tokio::join!(
        service.summarize("First session notes about delegation."),
        service.summarize("Second session notes about the timeline."),
    );
    let first = first.unwrap();
    let second = second.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(service.get_by_id(&first.id).unwrap(), first);
    assert_eq!(service.get_by_id(&second.id).unwrap(), second);

    let ids = service.list_ids();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
}

#[test]
fn test_blocking_completion_outside_runtime() {
    let provider = MockProvider::new().with_ctas(&["Follow up"]);

    let output = provider
        .complete_blocking("instructions", "some user text")
        .unwrap();

    assert_eq!(output.ctas, vec!["Follow up"]);
    assert!(output.content.contains("some user text"));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_blocking_form_refuses_inside_runtime() {
    let provider = MockProvider::new();

    let result = provider.complete_blocking("instructions", "some user text");

    assert!(matches!(result, Err(SummaryError::Config(_))));
    assert_eq!(provider.calls(), 0);
}
