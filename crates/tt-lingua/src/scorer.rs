//! Word scoring seam plus the window/aggregation helpers model scorers use.

use std::ops::Range;

/// Produces one keep-probability in `[0, 1]` per word.
pub trait TokenScorer: Send + Sync {
    fn score(&self, words: &[&str]) -> anyhow::Result<Vec<f32>>;
}

impl<T: TokenScorer + ?Sized> TokenScorer for Box<T> {
    fn score(&self, words: &[&str]) -> anyhow::Result<Vec<f32>> {
        (**self).score(words)
    }
}

/// Split a token sequence into windows of at most `max_tokens`, cutting on
/// word boundaries where possible. A single word longer than a window is
/// cut mid-word.
pub fn pack_windows(word_ids: &[Option<u32>], max_tokens: usize) -> Vec<Range<usize>> {
    let max_tokens = max_tokens.max(1);
    let mut windows = Vec::new();
    let mut start = 0;
    let mut word_start = 0;
    for i in 0..word_ids.len() {
        if i > 0 && word_ids[i] != word_ids[i - 1] {
            word_start = i;
        }
        if i - start == max_tokens {
            let cut = if word_start > start { word_start } else { i };
            windows.push(start..cut);
            start = cut;
        }
    }
    if start < word_ids.len() {
        windows.push(start..word_ids.len());
    }
    windows
}

/// Average token probabilities per word. Words without tokens score 0.
pub fn mean_by_word(word_ids: &[Option<u32>], token_probs: &[f32], n_words: usize) -> Vec<f32> {
    let mut sums = vec![0f32; n_words];
    let mut counts = vec![0u32; n_words];
    for (word, &p) in word_ids.iter().zip(token_probs) {
        if let Some(w) = word.map(|w| w as usize).filter(|&w| w < n_words) {
            sums[w] += p;
            counts[w] += 1;
        }
    }
    sums.iter()
        .zip(&counts)
        .map(|(&s, &c)| if c == 0 { 0.0 } else { s / c as f32 })
        .collect()
}
