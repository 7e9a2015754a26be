/*!
 * End-to-end tests for the digest pipeline
 *
 * These tests drive the controller with mock collaborators: a scripted
 * caption source and a deterministic summarizer, so the whole pipeline
 * runs without network access.
 */

use std::fs;
use std::sync::Arc;

use crate::common::{TEST_VIDEO_ID, create_temp_dir, test_config};
use ytdigest::app_controller::Controller;
use ytdigest::captions::mock::MockCaptionSource;
use ytdigest::errors::{FetchError, InputError};
use ytdigest::providers::mock::MockSummarizer;

/// Test the full pipeline from fragments to written artifacts
#[tokio::test]
async fn test_pipeline_withMockCollaborators_shouldProduceStableDigest() {
    let temp_dir = create_temp_dir().unwrap();
    let captions = Arc::new(MockCaptionSource::with_texts(&[
        "Hello.", "World.", "Goodbye.",
    ]));
    let summarizer = Arc::new(MockSummarizer::truncating(10));

    let controller = Controller::with_collaborators(test_config(), captions, summarizer);
    let outcome = controller.run(TEST_VIDEO_ID, temp_dir.path()).await.unwrap();

    // The truncating mock is stable across both passes
    assert_eq!(outcome.video_id, TEST_VIDEO_ID);
    assert_eq!(outcome.summary, "Hello. Wor");
    assert_eq!(outcome.highlighted, "**Hello**. **Wor**");

    let written = fs::read_to_string(&outcome.text_path).unwrap();
    assert_eq!(written, outcome.highlighted);
    assert!(fs::read(&outcome.pdf_path).unwrap().starts_with(b"%PDF"));
}

/// Test that a full watch URL resolves to the same digest as a bare id
#[tokio::test]
async fn test_pipeline_withWatchUrl_shouldResolveVideoId() {
    let temp_dir = create_temp_dir().unwrap();
    let captions = Arc::new(MockCaptionSource::with_texts(&["Just one line."]));
    let summarizer = Arc::new(MockSummarizer::echoing());

    let controller = Controller::with_collaborators(test_config(), captions, summarizer);
    let url = format!("https://www.youtube.com/watch?v={}", TEST_VIDEO_ID);
    let outcome = controller.run(&url, temp_dir.path()).await.unwrap();

    assert_eq!(outcome.video_id, TEST_VIDEO_ID);
    assert_eq!(outcome.summary, "Just one line.");
}

/// Test that malformed references fail before any fetch happens
#[tokio::test]
async fn test_pipeline_withInvalidReference_shouldFailBeforeFetching() {
    let temp_dir = create_temp_dir().unwrap();
    let captions = Arc::new(MockCaptionSource::with_texts(&["Never seen."]));
    let fetch_counter = captions.fetch_counter();
    let summarizer = Arc::new(MockSummarizer::echoing());

    let controller = Controller::with_collaborators(test_config(), captions, summarizer);
    let result = controller.run("not-a-real-id!!", temp_dir.path()).await;

    let error = result.unwrap_err();
    assert!(error.downcast_ref::<InputError>().is_some());
    assert_eq!(fetch_counter.load(std::sync::atomic::Ordering::SeqCst), 0);
}

/// Test that caption fetch failures surface unchanged
#[tokio::test]
async fn test_pipeline_withMissingCaptions_shouldSurfaceFetchError() {
    let temp_dir = create_temp_dir().unwrap();
    let captions = Arc::new(MockCaptionSource::no_captions());
    let summarizer = Arc::new(MockSummarizer::echoing());

    let controller = Controller::with_collaborators(test_config(), captions, summarizer);
    let result = controller.run(TEST_VIDEO_ID, temp_dir.path()).await;

    let error = result.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<FetchError>(),
        Some(FetchError::NoCaptions { .. })
    ));
}

/// Test that a second run of the same video hits the transcript cache
#[tokio::test]
async fn test_pipeline_withRepeatedVideo_shouldFetchOnlyOnce() {
    let temp_dir = create_temp_dir().unwrap();
    let captions = Arc::new(MockCaptionSource::with_texts(&["Cached content."]));
    let fetch_counter = captions.fetch_counter();
    let summarizer = Arc::new(MockSummarizer::echoing());

    let controller = Controller::with_collaborators(test_config(), captions, summarizer);
    controller.run(TEST_VIDEO_ID, temp_dir.path()).await.unwrap();
    controller.run(TEST_VIDEO_ID, temp_dir.path()).await.unwrap();

    assert_eq!(fetch_counter.load(std::sync::atomic::Ordering::SeqCst), 1);

    let (hits, misses, _) = controller.transcript_cache().stats();
    assert_eq!(hits, 1);
    assert_eq!(misses, 1);
}

/// Test that a transcript reduced to nothing still exports an empty digest
#[tokio::test]
async fn test_pipeline_withNoiseOnlyTranscript_shouldExportEmptyDigest() {
    let temp_dir = create_temp_dir().unwrap();
    let captions = Arc::new(MockCaptionSource::with_texts(&["[Music]", "[Applause]"]));
    let summarizer = Arc::new(MockSummarizer::echoing());
    let summarizer_counter = summarizer.request_counter();

    let controller = Controller::with_collaborators(test_config(), captions, summarizer);
    let outcome = controller.run(TEST_VIDEO_ID, temp_dir.path()).await.unwrap();

    assert!(outcome.summary.is_empty());
    assert!(outcome.keywords.is_empty());
    // The provider is never called for an empty transcript
    assert_eq!(
        summarizer_counter.load(std::sync::atomic::Ordering::SeqCst),
        0
    );
    assert!(outcome.text_path.exists());
    assert!(outcome.pdf_path.exists());
}

/// Test that provider failures abort the run without writing artifacts
#[tokio::test]
async fn test_pipeline_withFailingSummarizer_shouldWriteNothing() {
    let temp_dir = create_temp_dir().unwrap();
    let captions = Arc::new(MockCaptionSource::with_texts(&["Some spoken words."]));
    let summarizer = Arc::new(MockSummarizer::failing());

    let controller = Controller::with_collaborators(test_config(), captions, summarizer);
    let result = controller.run(TEST_VIDEO_ID, temp_dir.path()).await;

    assert!(result.is_err());
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}
