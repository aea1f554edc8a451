use once_cell::sync::Lazy;
use regex::Regex;

// One CJK ideograph/kana counts as a word on its own; everything else
// counts by maximal runs of word characters.
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Han}\p{Hiragana}\p{Katakana}]|[\w--[\p{Han}\p{Hiragana}\p{Katakana}]]+")
        .expect("word pattern is valid")
});

/// Counts words in natural-language text, language-agnostic.
///
/// A word is a maximal run of letters/digits/underscore; CJK text counts
/// one word per character. Pure punctuation and whitespace count nothing.
pub fn word_count(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Injected tokenizing rule for [`crate::estimate::estimate`].
///
/// The host may ship its own counter; [`DefaultWordCounter`] is used
/// when it does not.
pub trait WordCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;
}

pub struct DefaultWordCounter;

impl WordCounter for DefaultWordCounter {
    fn count(&self, text: &str) -> usize {
        word_count(text)
    }
}
