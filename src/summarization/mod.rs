/*!
 * Transcript summarization pipeline.
 *
 * The pipeline turns a raw transcript into a condensed summary:
 * - `normalize`: transcript cleanup rules
 * - `chunker`: sentence-aligned bounded chunking
 * - `core`: the double-pass summarization driver
 * - `similarity`: string similarity for the quality gate
 * - `cache`: process-wide transcript cache
 */

pub mod cache;
pub mod chunker;
pub mod core;
pub mod normalize;
pub mod similarity;

pub use cache::TranscriptCache;
pub use chunker::{Chunk, ChunkSizing, Chunker};
pub use core::SummarizationService;
pub use normalize::TextNormalizer;
