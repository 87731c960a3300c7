/*!
 * Tests for the batch enrichment orchestrator
 */

use std::sync::Arc;

use hotbrief::app_config::AiConfig;
use hotbrief::enrichment::BatchOrchestrator;
use hotbrief::prompts::PromptManager;

use crate::common::mock_providers::{MockCompletionClient, MockReply};
use crate::common::{covering_response, items_with_titles};

fn ai_config(max_batch_items: usize, max_batch_chars: usize) -> AiConfig {
    AiConfig {
        max_batch_items,
        max_batch_chars,
        ..AiConfig::default()
    }
}

fn orchestrator_with(
    client: Arc<MockCompletionClient>,
    config: AiConfig,
) -> BatchOrchestrator {
    crate::common::init_logging();
    BatchOrchestrator::new(client, PromptManager::new(), config)
}

#[tokio::test]
async fn test_process_withCoveredBatch_shouldWriteFieldsWithoutRetry() {
    let client = Arc::new(MockCompletionClient::new(vec![MockReply::Text(
        covering_response(2),
    )]));
    let orchestrator = orchestrator_with(client.clone(), ai_config(5, 10_000));

    let items = items_with_titles(&["First headline", "Second headline"]);
    let items = orchestrator.process(items, true, true).await;

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.is_enriched()));
    assert_eq!(items[0].translated_title, "译文1");
    assert_eq!(items[0].summary, "摘要1");
    assert_eq!(items[1].translated_title, "译文2");
    assert_eq!(items[1].summary, "摘要2");

    // Fully covered: no degrade pass
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_process_withTransportError_shouldRetryEachItemOnce() {
    // Every call fails: the batch of 3 degrades into exactly 3 single-item
    // retries and nothing below that
    let client = Arc::new(MockCompletionClient::always_failing());
    let orchestrator = orchestrator_with(client.clone(), ai_config(3, 10_000));

    let items = items_with_titles(&["one", "two", "three"]);
    let items = orchestrator.process(items, true, true).await;

    assert_eq!(client.call_count(), 4); // 1 batch call + 3 singles

    // Items come back unenriched but otherwise intact, in order
    assert_eq!(items.len(), 3);
    for (item, title) in items.iter().zip(["one", "two", "three"]) {
        assert_eq!(item.title, title);
        assert!(!item.is_enriched());
    }

    // The retries are singles: each user prompt lists exactly one title
    for call in &client.calls()[1..] {
        let user = call.messages.last().unwrap();
        assert!(user.content.contains("1. "));
        assert!(!user.content.contains("2. "));
    }
}

#[tokio::test]
async fn test_process_withPartialCoverage_shouldDegradeAndSalvage() {
    // First call only covers item 1; the degrade pass then succeeds for
    // both singles
    let client = Arc::new(MockCompletionClient::new(vec![
        MockReply::Text(r#"[{"index":1,"translated":"批量","summary":"第一"}]"#.to_string()),
        MockReply::Text(r#"[{"index":1,"translated":"单独一","summary":"重试一"}]"#.to_string()),
        MockReply::Text(r#"[{"index":1,"translated":"单独二","summary":"重试二"}]"#.to_string()),
    ]));
    let orchestrator = orchestrator_with(client.clone(), ai_config(2, 10_000));

    let items = items_with_titles(&["alpha", "beta"]);
    let items = orchestrator.process(items, true, true).await;

    assert_eq!(client.call_count(), 3);
    // The retry result overwrites the earlier batch result for item 1
    assert_eq!(items[0].translated_title, "单独一");
    assert_eq!(items[1].translated_title, "单独二");
}

#[tokio::test]
async fn test_process_withFailedSingle_shouldLeaveItemUnenriched() {
    let client = Arc::new(MockCompletionClient::new(vec![
        MockReply::Fail,
        MockReply::Text(r#"[{"index":1,"translated":"好","summary":"行"}]"#.to_string()),
        MockReply::Fail,
    ]));
    let orchestrator = orchestrator_with(client.clone(), ai_config(2, 10_000));

    let items = items_with_titles(&["works", "broken"]);
    let items = orchestrator.process(items, true, true).await;

    assert_eq!(client.call_count(), 3);
    assert_eq!(items[0].translated_title, "好");
    assert!(items[1].translated_title.is_empty());
    assert!(items[1].summary.is_empty());
}

#[tokio::test]
async fn test_process_withMultipleBatches_shouldAdvanceByPlannedSize() {
    // max_batch_items 2 over 5 items: batches of 2, 2, 1
    let client = Arc::new(MockCompletionClient::new(vec![
        MockReply::Text(covering_response(2)),
        MockReply::Text(covering_response(2)),
        MockReply::Text(covering_response(1)),
    ]));
    let orchestrator = orchestrator_with(client.clone(), ai_config(2, 10_000));

    let items = items_with_titles(&["a", "b", "c", "d", "e"]);
    let items = orchestrator.process(items, true, true).await;

    assert_eq!(client.call_count(), 3);
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|item| !item.translated_title.is_empty()));
}

#[tokio::test]
async fn test_process_shouldPreserveMetadataAndOrder() {
    let client = Arc::new(MockCompletionClient::new(vec![MockReply::Text(
        covering_response(3),
    )]));
    let orchestrator = orchestrator_with(client.clone(), ai_config(5, 10_000));

    let original = items_with_titles(&["x", "y", "z"]);
    let enriched = orchestrator.process(original.clone(), true, true).await;

    assert_eq!(enriched.len(), original.len());
    for (before, after) in original.iter().zip(&enriched) {
        assert_eq!(after.title, before.title);
        assert_eq!(after.url, before.url);
        assert_eq!(after.source, before.source);
        assert_eq!(after.category, before.category);
        assert_eq!(after.published_at, before.published_at);
        assert_eq!(after.extra, before.extra);
    }
}

#[tokio::test]
async fn test_process_withTasksDisabled_shouldMakeNoCalls() {
    let client = Arc::new(MockCompletionClient::always_failing());
    let orchestrator = orchestrator_with(client.clone(), ai_config(5, 10_000));

    let items = items_with_titles(&["untouched"]);
    let items = orchestrator.process(items, false, false).await;

    assert_eq!(client.call_count(), 0);
    assert!(items[0].translated_title.is_empty());
}

#[tokio::test]
async fn test_process_withUnknownTask_shouldReturnItemsUnmodified() {
    let client = Arc::new(MockCompletionClient::always_failing());
    // A catalog without the enrichment task is a configuration error:
    // no calls, items pass through untouched
    let orchestrator =
        BatchOrchestrator::new(client.clone(), PromptManager::empty(), ai_config(5, 10_000));

    let original = items_with_titles(&["a", "b"]);
    let items = orchestrator.process(original.clone(), true, true).await;

    assert_eq!(client.call_count(), 0);
    assert_eq!(items, original);
}

#[tokio::test]
async fn test_process_withEmptyItems_shouldMakeNoCalls() {
    let client = Arc::new(MockCompletionClient::always_failing());
    let orchestrator = orchestrator_with(client.clone(), ai_config(5, 10_000));

    let items = orchestrator.process(Vec::new(), true, true).await;

    assert!(items.is_empty());
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_process_shouldSendNumberedTitlesInPrompt() {
    let client = Arc::new(MockCompletionClient::new(vec![MockReply::Text(
        covering_response(2),
    )]));
    let orchestrator = orchestrator_with(client.clone(), ai_config(5, 10_000));

    let items = items_with_titles(&["First story", "Second story"]);
    orchestrator.process(items, true, true).await;

    let calls = client.calls();
    let user = calls[0].messages.last().unwrap();
    assert_eq!(user.role, "user");
    assert!(user.content.contains("1. First story"));
    assert!(user.content.contains("2. Second story"));

    // System message rides along in front
    assert_eq!(calls[0].messages.first().unwrap().role, "system");
}
