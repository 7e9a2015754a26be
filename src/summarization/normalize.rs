use once_cell::sync::Lazy;
use regex::Regex;

// @module: Transcript text cleanup

// @const: Bracketed annotations, e.g. "[Music]" or "[00:12]"
static BRACKETED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]]*\]").unwrap()
});

// @const: Bare timestamp tokens (MM:SS or HH:MM:SS)
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,2}:\d{2}(?::\d{2})?\b").unwrap()
});

// @const: ALL-CAPS speaker labels and ">>" cue marks, e.g. ">> JOHN DOE:"
static SPEAKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:>>\s*)?\b[A-Z][A-Z']+(?:\s[A-Z][A-Z']+)?:\s").unwrap()
});

// @const: Filler words, whole-word and case-insensitive
static FILLER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:you know|um+|uh+|like|actually|basically)\b").unwrap()
});

// @const: Control characters that survive caption decoding
static CONTROL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x1F\x7F]").unwrap()
});

// @const: Whitespace runs, including newlines
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

// @const: Sentence-ending punctuation glued to the next word
static MISSING_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.!?])([A-Za-z])").unwrap()
});

/// Transcript text normalizer.
///
/// Applies the cleanup rules in a fixed order over the whole string.
/// Pure and total: never fails, and an empty input yields an empty
/// output. Normalization is idempotent.
pub struct TextNormalizer;

impl TextNormalizer {
    /// Normalize raw transcript text
    pub fn normalize(text: &str) -> String {
        // 1. Bracketed annotations (also covers bracketed timestamps)
        let text = BRACKETED_REGEX.replace_all(text, " ");

        // 2. Bare timestamps and speaker-label prefixes
        let text = TIMESTAMP_REGEX.replace_all(&text, " ");
        let text = SPEAKER_REGEX.replace_all(&text, " ");

        // 3. Filler words
        let text = FILLER_REGEX.replace_all(&text, " ");

        // 4. Immediate word repetition
        let text = Self::collapse_repeated_words(&text);

        // 5. Control characters, then whitespace runs
        let text = CONTROL_REGEX.replace_all(&text, " ");
        let text = WHITESPACE_REGEX.replace_all(&text, " ");

        // 6. Missing space after sentence-ending punctuation
        let text = MISSING_SPACE_REGEX.replace_all(&text, "$1 $2");

        // 7. Trim
        text.trim().to_string()
    }

    // The regex crate has no backreferences, so adjacent duplicates are
    // collapsed with a token scan. Comparison is case-insensitive and
    // exact per token, so "word word." keeps both tokens.
    fn collapse_repeated_words(text: &str) -> String {
        let mut kept: Vec<&str> = Vec::new();
        for token in text.split_whitespace() {
            if let Some(last) = kept.last() {
                if last.eq_ignore_ascii_case(token) {
                    continue;
                }
            }
            kept.push(token);
        }
        kept.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_withBracketedAnnotations_shouldRemoveThem() {
        let result = TextNormalizer::normalize("Hello [Music] world [Applause].");
        assert_eq!(result, "Hello world .");
    }

    #[test]
    fn test_normalize_withBracketedTimestamp_shouldRemoveIt() {
        let result = TextNormalizer::normalize("[00:12] Welcome back everyone.");
        assert_eq!(result, "Welcome back everyone.");
    }

    #[test]
    fn test_normalize_withBareTimestamp_shouldRemoveIt() {
        let result = TextNormalizer::normalize("At 12:34 we begin.");
        assert_eq!(result, "At we begin.");
    }

    #[test]
    fn test_normalize_withSpeakerLabel_shouldRemoveIt() {
        let result = TextNormalizer::normalize(">> HOST: Welcome to the show.");
        assert_eq!(result, "Welcome to the show.");
    }

    #[test]
    fn test_normalize_withFillerWords_shouldRemoveThem() {
        let result = TextNormalizer::normalize("So um this is uh basically the idea you know.");
        assert_eq!(result, "So this is the idea .");
    }

    #[test]
    fn test_normalize_withFillerPrefixWord_shouldKeepLongerWords() {
        // "umbrella" must not be touched by the "um" filler rule
        let result = TextNormalizer::normalize("Bring an umbrella.");
        assert_eq!(result, "Bring an umbrella.");
    }

    #[test]
    fn test_normalize_withRepeatedWords_shouldCollapse() {
        let result = TextNormalizer::normalize("the the quick brown fox");
        assert_eq!(result, "the quick brown fox");
    }

    #[test]
    fn test_normalize_withCaseDifferentRepetition_shouldCollapse() {
        let result = TextNormalizer::normalize("The the story begins");
        assert_eq!(result, "The story begins");
    }

    #[test]
    fn test_normalize_withWhitespaceRuns_shouldCollapseToSingleSpace() {
        let result = TextNormalizer::normalize("Hello\n\n  world\t again");
        assert_eq!(result, "Hello world again");
    }

    #[test]
    fn test_normalize_withMissingSpaceAfterPunctuation_shouldInsertSpace() {
        let result = TextNormalizer::normalize("First sentence.Second sentence!Third?Done");
        assert_eq!(result, "First sentence. Second sentence! Third? Done");
    }

    #[test]
    fn test_normalize_withEmptyInput_shouldReturnEmptyString() {
        assert_eq!(TextNormalizer::normalize(""), "");
        assert_eq!(TextNormalizer::normalize("   \n\t  "), "");
    }

    #[test]
    fn test_normalize_isIdempotent() {
        let samples = [
            "Hello [Music] world.Next one  here",
            ">> SPEAKER: um so so this is it 12:34",
            "Plain already-clean sentence. Another one.",
        ];
        for sample in samples {
            let once = TextNormalizer::normalize(sample);
            let twice = TextNormalizer::normalize(&once);
            assert_eq!(once, twice, "normalization not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_normalize_withFragmentJoin_shouldMatchExpectedTranscript() {
        let result = TextNormalizer::normalize("Hello.  World.  Goodbye.");
        assert_eq!(result, "Hello. World. Goodbye.");
    }
}
