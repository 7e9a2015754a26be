/*!
 * Core summarization driver.
 *
 * This module contains the SummarizationService, which runs the
 * double-pass protocol: one provider call per chunk, a merge of the
 * partial summaries, and a final condensation pass over the merged
 * text. An optional quality gate compares two differently-budgeted
 * final passes and keeps the better candidate.
 */

use indicatif::ProgressBar;
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::SummarizerConfig;
use crate::errors::SummarizationError;
use crate::providers::{SummarizeRequest, Summarizer};
use crate::summarization::chunker::Chunk;
use crate::summarization::similarity::similarity;

/// Summarization driver over an external summarization provider
pub struct SummarizationService {
    /// The summarization provider
    summarizer: Arc<dyn Summarizer>,

    /// Summarizer settings (length bounds, quality gate)
    config: SummarizerConfig,
}

impl SummarizationService {
    /// Create a new summarization service
    pub fn new(summarizer: Arc<dyn Summarizer>, config: SummarizerConfig) -> Self {
        Self { summarizer, config }
    }

    /// Summarize ordered chunks into one final summary.
    ///
    /// Any provider failure aborts the run; no partial summary is
    /// produced or cached. An empty chunk list yields an empty summary
    /// without calling the provider.
    pub async fn summarize_chunks(&self, chunks: &[Chunk]) -> Result<String, SummarizationError> {
        self.summarize_chunks_with_progress(chunks, None).await
    }

    /// Summarize ordered chunks, ticking the given progress bar once
    /// per completed chunk pass.
    pub async fn summarize_chunks_with_progress(
        &self,
        chunks: &[Chunk],
        progress: Option<&ProgressBar>,
    ) -> Result<String, SummarizationError> {
        if chunks.is_empty() {
            debug!("No chunks to summarize, returning empty summary");
            return Ok(String::new());
        }

        // First pass: one summary per chunk, order preserved
        let mut partials: Vec<String> = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            debug!(
                "Summarizing chunk {}/{} ({} sentences)",
                index + 1,
                chunks.len(),
                chunk.sentences.len()
            );

            let request = SummarizeRequest::new(
                chunk.text(),
                self.config.chunk_min_length,
                self.config.chunk_max_length,
            );
            let partial = self.summarizer.summarize(request).await?;
            partials.push(partial);

            if let Some(bar) = progress {
                bar.inc(1);
            }
        }

        let combined = partials.join(" ");

        // Second pass: condense the merged partial summaries
        let final_summary = if self.config.quality_gate {
            self.condense_gated(&combined).await?
        } else {
            self.condense(&combined).await?
        };

        info!(
            "Summarized {} chunks into {} chars",
            chunks.len(),
            final_summary.chars().count()
        );

        Ok(final_summary)
    }

    async fn condense(&self, combined: &str) -> Result<String, SummarizationError> {
        let request = SummarizeRequest::new(
            combined,
            self.config.final_min_length,
            self.config.final_max_length,
        );
        Ok(self.summarizer.summarize(request).await?)
    }

    // Quality gate: run a long-budget and a short-budget final pass over
    // the same combined text. Divergent outputs favor the longer one
    // (content preservation); agreeing outputs favor the shorter.
    async fn condense_gated(&self, combined: &str) -> Result<String, SummarizationError> {
        let longer_request = SummarizeRequest::new(
            combined,
            self.config.final_min_length,
            self.config.final_max_length,
        );
        let shorter_max = (self.config.final_max_length / 2).max(1);
        let shorter_request = SummarizeRequest::new(
            combined,
            self.config.final_min_length.min(shorter_max),
            shorter_max,
        );

        let longer = self.summarizer.summarize(longer_request).await?;
        let shorter = self.summarizer.summarize(shorter_request).await?;

        let score = similarity(&longer, &shorter);
        debug!(
            "Quality gate similarity {:.3} (threshold {:.3})",
            score, self.config.similarity_threshold
        );

        if score < self.config.similarity_threshold {
            let winner = if longer.chars().count() >= shorter.chars().count() {
                longer
            } else {
                shorter
            };
            Ok(winner)
        } else {
            let winner = if shorter.chars().count() <= longer.chars().count() {
                shorter
            } else {
                longer
            };
            Ok(winner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockSummarizer;
    use crate::summarization::chunker::{ChunkSizing, Chunker};

    fn service(summarizer: MockSummarizer, config: SummarizerConfig) -> SummarizationService {
        SummarizationService::new(Arc::new(summarizer), config)
    }

    #[tokio::test]
    async fn test_summarizeChunks_withEmptyInput_shouldSkipProvider() {
        let mock = MockSummarizer::echoing();
        let counter = mock.request_counter();
        let driver = service(mock, SummarizerConfig::default());

        let summary = driver.summarize_chunks(&[]).await.unwrap();

        assert!(summary.is_empty());
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_summarizeChunks_withSingleChunk_shouldDoublePass() {
        let mock = MockSummarizer::echoing();
        let counter = mock.request_counter();
        let driver = service(mock, SummarizerConfig::default());

        let chunks = Chunker::new(100, ChunkSizing::Chars).split("Hello. World. Goodbye.");
        let summary = driver.summarize_chunks(&chunks).await.unwrap();

        assert_eq!(summary, "Hello. World. Goodbye.");
        // One chunk pass plus one final pass
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_summarizeChunks_withTruncatingMock_shouldBeStableAcrossPasses() {
        let driver = service(MockSummarizer::truncating(10), SummarizerConfig::default());

        let chunks = Chunker::new(100, ChunkSizing::Chars).split("Hello. World. Goodbye.");
        assert_eq!(chunks.len(), 1);

        let summary = driver.summarize_chunks(&chunks).await.unwrap();
        assert_eq!(summary, "Hello. Wor");
    }

    #[tokio::test]
    async fn test_summarizeChunks_withMultipleChunks_shouldMergeInOrder() {
        let mock = MockSummarizer::echoing();
        let driver = service(mock, SummarizerConfig::default());

        let chunker = Chunker::new(4, ChunkSizing::Words);
        let chunks = chunker.split("First part here. Second part here. Third part here.");
        assert!(chunks.len() > 1);

        let summary = driver.summarize_chunks(&chunks).await.unwrap();
        assert_eq!(summary, "First part here. Second part here. Third part here.");
    }

    #[tokio::test]
    async fn test_summarizeChunks_withFailingProvider_shouldSurfaceError() {
        let driver = service(MockSummarizer::failing(), SummarizerConfig::default());

        let chunks = Chunker::new(100, ChunkSizing::Chars).split("Hello. World.");
        let result = driver.summarize_chunks(&chunks).await;

        assert!(matches!(result, Err(SummarizationError::Provider(_))));
    }

    #[tokio::test]
    async fn test_qualityGate_withAgreeingPasses_shouldPreferShorter() {
        // Echoing mock returns the same text for both budgets, so
        // similarity is 1.0 and the (equal-length) shorter pick wins.
        let mut config = SummarizerConfig::default();
        config.quality_gate = true;
        let driver = service(MockSummarizer::echoing(), config);

        let chunks = Chunker::new(100, ChunkSizing::Chars).split("Hello. World.");
        let summary = driver.summarize_chunks(&chunks).await.unwrap();
        assert_eq!(summary, "Hello. World.");
    }

    #[tokio::test]
    async fn test_qualityGate_withDivergentPasses_shouldPreferLonger() {
        // Custom responses keyed off the max budget: the long-budget pass
        // returns an expanded text, the short-budget pass a different one.
        let mock = MockSummarizer::echoing().with_custom_response(|req| {
            if req.max_length >= 150 {
                "A long and thorough digest of the whole video content.".to_string()
            } else {
                "Totally different text.".to_string()
            }
        });

        let mut config = SummarizerConfig::default();
        config.quality_gate = true;
        config.similarity_threshold = 0.85;
        let driver = service(mock, config);

        let chunks = Chunker::new(1000, ChunkSizing::Chars).split("Hello. World.");
        let summary = driver.summarize_chunks(&chunks).await.unwrap();
        assert_eq!(
            summary,
            "A long and thorough digest of the whole video content."
        );
    }
}
