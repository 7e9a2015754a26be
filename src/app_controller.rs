/*!
 * Application controller wiring the digest pipeline together.
 *
 * The controller owns the collaborators (caption source, summarization
 * provider, transcript cache) and drives one video reference from
 * parsing through export. Collaborators sit behind traits so tests can
 * inject mocks.
 */

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::Config;
use crate::captions::{CaptionSource, join_fragments};
use crate::captions::timedtext::TimedTextClient;
use crate::export::Exporter;
use crate::keywords::{Keyword, KeywordExtractor};
use crate::providers::{Summarizer, shared_summarizer};
use crate::summarization::{
    Chunker, ChunkSizing, SummarizationService, TextNormalizer, TranscriptCache,
};
use crate::video_utils::extract_video_id;

/// The result of one completed digest run
#[derive(Debug)]
pub struct RunOutcome {
    /// The parsed 11-character video id
    pub video_id: String,

    /// The final condensed summary
    pub summary: String,

    /// The summary with keyword occurrences marked in bold
    pub highlighted: String,

    /// The ranked keywords
    pub keywords: Vec<Keyword>,

    /// Path of the written text artifact
    pub text_path: PathBuf,

    /// Path of the written PDF artifact
    pub pdf_path: PathBuf,
}

/// Main application controller for video digestion
pub struct Controller {
    /// App configuration
    config: Config,

    /// Caption source
    captions: Arc<dyn CaptionSource>,

    /// Summarization provider
    summarizer: Arc<dyn Summarizer>,

    /// Process-wide transcript cache
    transcript_cache: TranscriptCache,
}

impl Controller {
    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let captions = Arc::new(TimedTextClient::new(
            config.captions.endpoint.as_str(),
            config.captions.timeout_secs,
        ));
        let summarizer = shared_summarizer(&config.summarizer);
        let transcript_cache = TranscriptCache::new(config.captions.cache_enabled);

        Ok(Self {
            config,
            captions,
            summarizer,
            transcript_cache,
        })
    }

    /// Create a controller with injected collaborators
    pub fn with_collaborators(
        config: Config,
        captions: Arc<dyn CaptionSource>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        let transcript_cache = TranscriptCache::new(config.captions.cache_enabled);
        Self {
            config,
            captions,
            summarizer,
            transcript_cache,
        }
    }

    /// Run the full digest pipeline for one video reference.
    ///
    /// The reference is validated before anything is fetched; malformed
    /// input never reaches the caption source.
    pub async fn run(&self, video_input: &str, output_dir: &Path) -> Result<RunOutcome> {
        let start_time = std::time::Instant::now();

        let video_id = extract_video_id(video_input)?;
        let language = &self.config.captions.language;

        info!("Digesting video '{}' ({})", video_id, language);

        let transcript = match self.transcript_cache.get(&video_id, language) {
            Some(cached) => cached,
            None => {
                let fragments = self.captions.fetch(&video_id, language).await?;
                debug!("Fetched {} caption fragments", fragments.len());

                let joined = join_fragments(&fragments);
                self.transcript_cache.store(&video_id, language, &joined);
                joined
            }
        };

        let fetch_elapsed = start_time.elapsed();

        let normalized = TextNormalizer::normalize(&transcript);
        if normalized.is_empty() {
            warn!(
                "Transcript of '{}' is empty after normalization, exporting an empty digest",
                video_id
            );
        }

        let chunker = Chunker::new(
            self.config.summarizer.max_chars_per_chunk,
            ChunkSizing::Chars,
        )
        .with_overlap(self.config.summarizer.chunk_overlap_chars);
        let chunks = chunker.split(&normalized);

        info!(
            "Normalized transcript: {} chars in {} chunks",
            normalized.chars().count(),
            chunks.len()
        );

        let progress_bar = ProgressBar::new(chunks.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        let service =
            SummarizationService::new(self.summarizer.clone(), self.config.summarizer.clone());
        let summary = service
            .summarize_chunks_with_progress(&chunks, Some(&progress_bar))
            .await?;
        progress_bar.finish_and_clear();

        let summarize_elapsed = start_time.elapsed().checked_sub(fetch_elapsed).unwrap_or_default();

        let extractor = KeywordExtractor::new(self.config.keywords.count)
            .with_extra_stopwords(&self.config.keywords.extra_stopwords);
        let keywords = extractor.extract(&summary);
        let highlighted = KeywordExtractor::highlight(&summary, &keywords);

        debug!(
            "Extracted keywords: {}",
            keywords
                .iter()
                .map(|k| k.term.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let exporter = Exporter::new(self.config.export.line_width);
        let text_artifact = exporter.to_text(&highlighted, &video_id);
        let pdf_artifact = exporter.to_pdf(&highlighted, &video_id)?;

        let text_path = exporter.write(&text_artifact, output_dir)?;
        let pdf_path = exporter.write(&pdf_artifact, output_dir)?;

        info!(
            "Digest complete. Fetch: {} - Summarization: {}",
            Self::format_duration(fetch_elapsed),
            Self::format_duration(summarize_elapsed)
        );

        Ok(RunOutcome {
            video_id,
            summary,
            highlighted,
            keywords,
            text_path,
            pdf_path,
        })
    }

    /// Access the transcript cache (hit/miss statistics, clearing)
    pub fn transcript_cache(&self) -> &TranscriptCache {
        &self.transcript_cache
    }

    /// Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatDuration_shouldRenderHoursMinutesSeconds() {
        let duration = std::time::Duration::from_secs(3 * 3600 + 25 * 60 + 7);
        assert_eq!(Controller::format_duration(duration), "03:25:07");
    }

    #[test]
    fn test_withConfig_shouldBuildController() {
        let controller = Controller::with_config(Config::default()).unwrap();
        assert!(controller.transcript_cache().is_enabled());
    }
}
