//! Text tokenization and statistics shared by the analyzers.
//!
//! Keyword extraction, content-depth measurement, and the readability proxy
//! all operate on the same tokenization, so it lives here: one word regex,
//! one stopword list, one sentence splitter. Everything is deterministic:
//! identical input text always produces identical term rankings.

use regex::Regex;

/// Common English words excluded from term-frequency ranking.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because", "been", "but", "by",
    "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he", "her", "his", "how", "if", "in",
    "into", "is", "it", "its", "just", "like", "may", "more", "most", "new", "no", "not", "of", "on", "one", "only",
    "or", "other", "our", "out", "over", "she", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "to", "up", "us", "was", "we", "were", "what", "when", "which", "who", "will",
    "with", "would", "you", "your",
];

/// Tokenize text into lowercase words.
pub fn words(text: &str) -> Vec<String> {
    let word_regex = Regex::new(r"\b[\w'-]+\b").unwrap();
    word_regex.find_iter(text).map(|m| m.as_str().to_lowercase()).collect()
}

/// Count words in text, handling various whitespace and punctuation patterns.
pub fn count_words(text: &str) -> usize {
    let word_regex = Regex::new(r"\b[\w'-]+\b").unwrap();
    word_regex.find_iter(text).count()
}

/// Whether a token is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Term frequencies of non-stopword tokens of at least `min_len` characters,
/// ranked by count descending with lexicographic tie-breaking.
pub fn term_frequency(text: &str, min_len: usize) -> Vec<(String, usize)> {
    let mut counts = std::collections::HashMap::new();
    for word in words(text) {
        if word.chars().count() >= min_len && !is_stopword(&word) && !word.chars().all(|c| c.is_ascii_digit()) {
            *counts.entry(word).or_insert(0usize) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Split text into sentences on terminal punctuation.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Average words per sentence, or 0.0 for empty text.
pub fn avg_sentence_length(text: &str) -> f64 {
    let sents = sentences(text);
    if sents.is_empty() {
        return 0.0;
    }
    let total_words: usize = sents.iter().map(|s| count_words(s)).sum();
    total_words as f64 / sents.len() as f64
}

/// Rough syllable count for a word: vowel groups, discounting a trailing
/// silent 'e', with a floor of one.
pub fn syllable_estimate(word: &str) -> usize {
    let lower = word.to_lowercase();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0usize;
    let mut in_group = false;
    for c in lower.chars() {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    if groups > 1 && lower.ends_with('e') && !lower.ends_with("le") && !lower.ends_with("ee") {
        groups -= 1;
    }

    groups.max(1)
}

/// Average estimated syllables per word, or 0.0 for empty text.
pub fn avg_syllables_per_word(text: &str) -> f64 {
    let tokens = words(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let total: usize = tokens.iter().map(|w| syllable_estimate(w)).sum();
    total as f64 / tokens.len() as f64
}

/// Flesch-style reading ease, clamped to 0–100.
///
/// Higher is easier to read. Empty text scores 0.
pub fn reading_ease(text: &str) -> f64 {
    if count_words(text) == 0 {
        return 0.0;
    }
    let score = 206.835 - 1.015 * avg_sentence_length(text) - 84.6 * avg_syllables_per_word(text);
    score.clamp(0.0, 100.0)
}
