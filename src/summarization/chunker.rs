// @module: Sentence-aligned bounded chunking

/// How chunk sizes are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkSizing {
    /// Count characters (joining spaces included)
    #[default]
    Chars,
    /// Count whitespace-separated words
    Words,
}

/// A contiguous, sentence-aligned span of normalized text.
///
/// The first `overlap_count` sentences are carried over from the
/// previous chunk for context continuity; the rest are new.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Sentences making up this chunk, overlap first
    pub sentences: Vec<String>,

    /// How many leading sentences repeat the previous chunk's tail
    pub overlap_count: usize,
}

impl Chunk {
    /// The chunk text submitted to the summarization capability
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }

    /// Sentences first introduced by this chunk
    pub fn new_sentences(&self) -> &[String] {
        &self.sentences[self.overlap_count..]
    }
}

/// Splits normalized text into bounded chunks aligned to sentence
/// boundaries, optionally seeding each chunk with trailing context
/// from its predecessor.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Maximum chunk size
    max_size: usize,
    /// Minimum cumulative size of the overlap window (0 disables overlap)
    overlap: usize,
    /// Size measure
    sizing: ChunkSizing,
}

impl Chunker {
    /// Create a chunker with the given bound and no overlap
    pub fn new(max_size: usize, sizing: ChunkSizing) -> Self {
        Self {
            max_size,
            overlap: 0,
            sizing,
        }
    }

    /// Set the overlap window size
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Split text into sentences on `. `, `! ` and `? ` boundaries.
    ///
    /// The terminator stays attached to its sentence. Text without any
    /// terminator is a single sentence.
    pub fn split_sentences(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if matches!(ch, '.' | '!' | '?') {
                let at_boundary = match chars.peek() {
                    Some((_, next)) => next.is_whitespace(),
                    None => true,
                };
                if at_boundary {
                    let end = idx + ch.len_utf8();
                    let sentence = text[start..end].trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    start = end;
                }
            }
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }

    /// Split normalized text into ordered chunks.
    ///
    /// Greedy accumulation: sentences join the current chunk while the
    /// running size stays within the bound. A chunk closes only after
    /// it has gained at least one non-overlap sentence, so a single
    /// sentence longer than the bound becomes its own oversized chunk
    /// instead of being truncated. The overlap seed is shrunk, or
    /// dropped entirely, whenever seed plus first new sentence would
    /// exceed the bound; only single-sentence chunks may ever do that.
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        let sentences = Self::split_sentences(text);
        if sentences.is_empty() {
            return Vec::new();
        }

        let mut chunks: Vec<Chunk> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_size = 0usize;
        let mut overlap_count = 0usize;

        for sentence in sentences {
            let size = self.measure(&sentence);
            let joined_size = if current.is_empty() { size } else { size + 1 };

            let has_new_content = current.len() > overlap_count;
            if has_new_content && current_size + joined_size > self.max_size {
                let (mut seed, mut seed_size) = self.overlap_window(&current);

                // Drop leading seed sentences until the seed plus the
                // incoming sentence fits within the bound
                while !seed.is_empty() && seed_size + size + 1 > self.max_size {
                    let removed = seed.remove(0);
                    seed_size -= self.measure(&removed);
                    if !seed.is_empty() {
                        seed_size -= 1;
                    }
                }

                chunks.push(Chunk {
                    sentences: std::mem::take(&mut current),
                    overlap_count,
                });
                overlap_count = seed.len();
                current_size = seed_size;
                current = seed;
            }

            current_size += if current.is_empty() { size } else { size + 1 };
            current.push(sentence);
        }

        if current.len() > overlap_count {
            chunks.push(Chunk {
                sentences: current,
                overlap_count,
            });
        }

        chunks
    }

    fn measure(&self, sentence: &str) -> usize {
        match self.sizing {
            ChunkSizing::Chars => sentence.chars().count(),
            ChunkSizing::Words => sentence.split_whitespace().count(),
        }
    }

    // Trailing window of sentences whose cumulative size reaches the
    // overlap parameter. Empty when overlap is disabled.
    fn overlap_window(&self, sentences: &[String]) -> (Vec<String>, usize) {
        if self.overlap == 0 {
            return (Vec::new(), 0);
        }

        let mut window: Vec<String> = Vec::new();
        let mut window_size = 0usize;

        for sentence in sentences.iter().rev() {
            if window_size >= self.overlap {
                break;
            }
            window_size += self.measure(sentence) + if window.is_empty() { 0 } else { 1 };
            window.push(sentence.clone());
        }

        window.reverse();
        (window, window_size)
    }
}
