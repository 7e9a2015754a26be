/*!
 * Keyword extraction and highlighting.
 *
 * Ranks summary terms by frequency (stopwords and short tokens
 * excluded) and marks the top-N terms in the summary text with bold
 * markers. Highlighting runs as a single forward scan over
 * non-overlapping match spans, so a term is never wrapped twice.
 */

use regex::Regex;
use std::collections::{HashMap, HashSet};
use stop_words::{LANGUAGE, get};

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// The lowercase term
    pub term: String,

    /// Number of occurrences in the summary
    pub count: usize,
}

/// Frequency-based keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// Lowercase stopword set
    stopwords: HashSet<String>,

    /// How many keywords to return
    count: usize,
}

impl KeywordExtractor {
    /// Create an extractor with the built-in English stopword list
    pub fn new(count: usize) -> Self {
        let stopwords: HashSet<String> = get(LANGUAGE::English)
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self { stopwords, count }
    }

    /// Merge extra stopwords into the filter
    pub fn with_extra_stopwords(mut self, extra: &[String]) -> Self {
        for word in extra {
            self.stopwords.insert(word.to_lowercase());
        }
        self
    }

    /// Extract the top-N keywords, ordered by descending frequency with
    /// ties broken by first occurrence.
    pub fn extract(&self, text: &str) -> Vec<Keyword> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for raw_token in text.split_whitespace() {
            let token: String = raw_token
                .chars()
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
                .to_lowercase();

            if token.chars().count() <= 2 || self.stopwords.contains(&token) {
                continue;
            }

            let entry = counts.entry(token.clone()).or_insert(0);
            if *entry == 0 {
                first_seen.push(token);
            }
            *entry += 1;
        }

        let mut ranked: Vec<Keyword> = first_seen
            .into_iter()
            .map(|term| {
                let count = counts[&term];
                Keyword { term, count }
            })
            .collect();

        // Stable sort keeps first-occurrence order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(self.count);
        ranked
    }

    /// Wrap every case-insensitive whole-word occurrence of the given
    /// keywords in `**` markers.
    ///
    /// A single alternation pattern (keyword insertion order) is scanned
    /// forward once; match spans never overlap, so no substring is
    /// wrapped more than once.
    pub fn highlight(text: &str, keywords: &[Keyword]) -> String {
        if keywords.is_empty() || text.is_empty() {
            return text.to_string();
        }

        let alternation = keywords
            .iter()
            .map(|keyword| regex::escape(&keyword.term))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?i)\b(?:{})\b", alternation);

        // Escaped literal alternation of validated tokens always compiles
        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(_) => return text.to_string(),
        };

        regex
            .replace_all(text, |caps: &regex::Captures| format!("**{}**", &caps[0]))
            .into_owned()
    }
}
