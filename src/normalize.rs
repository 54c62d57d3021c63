//! Summary text normalization.
//!
//! Raw article summaries are scraped HTML text and arrive with markup
//! fragments, punctuation, mixed case, and filler words. The [`Normalizer`]
//! reduces each summary to a compact lowercase token string suitable for the
//! Description column of the output CSV.
//!
//! # Cleaning Pipeline
//!
//! The steps run in this exact order (reordering changes the output):
//!
//! 1. Remove HTML-tag-like substrings (`<...>`, non-greedy)
//! 2. Remove every character that is not a word character or whitespace
//! 3. Lowercase
//! 4. Split on whitespace into tokens
//! 5. Drop tokens present in the English stopword set
//! 6. Rejoin the survivors with single spaces

use crate::stopwords;
use regex::Regex;
use std::collections::HashSet;

/// Text cleaner holding the compiled regexes and the stopword set.
///
/// Construct one at startup and pass it wherever summaries are cleaned;
/// the value is cheap to share by reference and safe to use from concurrent
/// site pipelines.
#[derive(Debug)]
pub struct Normalizer {
    tag_re: Regex,
    punct_re: Regex,
    stopwords: HashSet<&'static str>,
}

impl Normalizer {
    /// Build a normalizer with the fixed English stopword set.
    pub fn new() -> Self {
        Self {
            tag_re: Regex::new(r"<[^<]+?>").unwrap(),
            punct_re: Regex::new(r"[^\w\s]").unwrap(),
            stopwords: stopwords::ENGLISH.iter().copied().collect(),
        }
    }

    /// Clean a raw summary into a lowercase, stopword-free token string.
    ///
    /// Pure and infallible: empty input yields an empty string, and text
    /// with nothing to strip passes through lowercased and re-spaced.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let n = Normalizer::new();
    /// assert_eq!(n.clean("<b>Hello, World!</b> the a"), "hello world");
    /// ```
    pub fn clean(&self, raw: &str) -> String {
        let no_tags = self.tag_re.replace_all(raw, "");
        let no_punct = self.punct_re.replace_all(&no_tags, "");
        let lowered = no_punct.to_lowercase();
        lowered
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_tags_punctuation_case_and_stopwords() {
        let n = Normalizer::new();
        assert_eq!(n.clean("<b>Hello, World!</b> the a"), "hello world");
    }

    #[test]
    fn test_clean_storm_summary() {
        let n = Normalizer::new();
        assert_eq!(
            n.clean("<p>The storm hit the city hard.</p>"),
            "storm hit city hard"
        );
    }

    #[test]
    fn test_clean_empty_input() {
        let n = Normalizer::new();
        assert_eq!(n.clean(""), "");
    }

    #[test]
    fn test_clean_only_stopwords_yields_empty() {
        let n = Normalizer::new();
        assert_eq!(n.clean("The a an of THE"), "");
    }

    #[test]
    fn test_clean_plain_text_passes_through_lowercased() {
        let n = Normalizer::new();
        assert_eq!(n.clean("Storm Chasers Gather"), "storm chasers gather");
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        let n = Normalizer::new();
        assert_eq!(n.clean("wind   and\n\train"), "wind rain");
    }

    #[test]
    fn test_clean_is_idempotent_on_fixtures() {
        let n = Normalizer::new();
        let fixtures = [
            "<b>Hello, World!</b> the a",
            "<p>The storm hit the city hard.</p>",
            "Markets rallied; tech <em>led</em> the gains, again.",
            "",
            "no markup no punctuation no stopwords? almost",
        ];
        for raw in fixtures {
            let once = n.clean(raw);
            assert_eq!(n.clean(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_clean_unclosed_tag_fragment() {
        // A dangling "<" never matches the tag pattern; the punctuation pass
        // removes it instead.
        let n = Normalizer::new();
        assert_eq!(n.clean("broken < fragment"), "broken fragment");
    }
}
