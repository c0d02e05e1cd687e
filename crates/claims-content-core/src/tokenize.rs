//! Word, sentence, and heading segmentation.
//!
//! A word is a maximal run of alphanumeric characters; everything else
//! (whitespace, punctuation, apostrophes, markup) separates words. Words
//! are lower-cased so keyword matching is case-insensitive.

use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}#{1,6}[ \t]+\S").expect("valid regex"));

static HTML_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h[1-6][\s>]").expect("valid regex"));

/// Split text into lower-cased word tokens, in order.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Count sentences, splitting on runs of `.`, `!` and `?`.
///
/// Segments without any word character are not sentences. Text with words
/// but no terminator counts as one sentence.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
}

/// Count Markdown ATX headings and HTML `<h1>`..`<h6>` tags.
pub fn heading_count(text: &str) -> usize {
    MARKDOWN_HEADING.find_iter(text).count() + HTML_HEADING.find_iter(text).count()
}

/// Approximate syllables in a single word by counting vowel groups.
pub fn syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return 1;
    }

    let is_vowel = |c: char| "aeiouy".contains(c);
    let mut count = 0usize;
    let mut prev_is_vowel = false;
    for &c in &chars {
        let v = is_vowel(c);
        if v && !prev_is_vowel {
            count += 1;
        }
        prev_is_vowel = v;
    }

    // Silent trailing e, except the consonant + "le" ending.
    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }
    if word.ends_with("le") && !is_vowel(chars[chars.len() - 3]) {
        count += 1;
    }

    count.max(1)
}

/// Count non-overlapping occurrences of `phrase` in `tokens`.
///
/// Matching is left to right; after a match the scan resumes past it.
/// An empty phrase never matches.
pub fn count_phrase(tokens: &[String], phrase: &[String]) -> usize {
    let m = phrase.len();
    if m == 0 || m > tokens.len() {
        return 0;
    }

    let mut count = 0;
    let mut i = 0;
    while i + m <= tokens.len() {
        if tokens[i..i + m] == *phrase {
            count += 1;
            i += m;
        } else {
            i += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        words(s)
    }

    #[test]
    fn test_words_lowercase_and_strip_punctuation() {
        assert_eq!(
            words("Storm-Damage CLAIMS, filed!"),
            vec!["storm", "damage", "claims", "filed"]
        );
    }

    #[test]
    fn test_words_split_apostrophes() {
        assert_eq!(words("Here's what"), vec!["here", "s", "what"]);
    }

    #[test]
    fn test_words_empty() {
        assert!(words("  ... !!! ").is_empty());
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        assert_eq!(sentence_count("No terminator here"), 1);
        assert_eq!(sentence_count("Wait... what?!"), 2);
        assert_eq!(sentence_count("..."), 0);
    }

    #[test]
    fn test_heading_count_markdown_and_html() {
        let text = "# Title\n\nBody\n\n## Section\n\n#hashtag\n<h2>Other</h2>";
        assert_eq!(heading_count(text), 3);
    }

    #[test]
    fn test_heading_count_ignores_inline_hash() {
        assert_eq!(heading_count("Call us at #1 adjusters"), 0);
    }

    #[test]
    fn test_syllables() {
        assert_eq!(syllables("the"), 1);
        assert_eq!(syllables("insurance"), 3);
        assert_eq!(syllables("table"), 2);
        assert_eq!(syllables("damage"), 2);
        assert_eq!(syllables("rhythm"), 1);
    }

    #[test]
    fn test_count_phrase_non_overlapping() {
        let tokens = toks("claims claims claims");
        assert_eq!(count_phrase(&tokens, &toks("claims claims")), 1);
        assert_eq!(count_phrase(&tokens, &toks("claims")), 3);
    }

    #[test]
    fn test_count_phrase_multi_word() {
        let tokens = toks("Insurance claims, and more insurance claims.");
        assert_eq!(count_phrase(&tokens, &toks("insurance claims")), 2);
        assert_eq!(count_phrase(&tokens, &toks("claims and")), 1);
    }

    #[test]
    fn test_count_phrase_respects_word_boundaries() {
        let tokens = toks("stormy weather");
        assert_eq!(count_phrase(&tokens, &toks("storm")), 0);
    }

    #[test]
    fn test_count_phrase_empty() {
        assert_eq!(count_phrase(&toks("a b"), &[]), 0);
        assert_eq!(count_phrase(&[], &toks("a")), 0);
    }
}
