use crate::words::WordCounter;

/// Upper bound on solid dots per day cell
pub const NUM_MAX_DOTS: usize = 5;

/// Maps note text to a bounded count of solid dots.
///
/// Returns 0 when `words_per_dot` is not strictly positive or the text is
/// empty. Otherwise `floor(words / words_per_dot)`, clamped to
/// `[1, NUM_MAX_DOTS]`: a non-empty note always shows at least one dot.
pub fn estimate(text: &str, words_per_dot: f64, counter: &dyn WordCounter) -> usize {
    // `!(x > 0.0)` also rejects NaN
    if text.is_empty() || !(words_per_dot > 0.0) {
        return 0;
    }
    let words = counter.count(text);
    let raw = (words as f64 / words_per_dot).floor() as usize;
    raw.clamp(1, NUM_MAX_DOTS)
}
