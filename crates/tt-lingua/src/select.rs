//! Percentile-based word selection.

use crate::segment::Word;

/// Linear-interpolated percentile, `q` in `[0, 100]`.
pub fn percentile(values: &[f32], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let pos = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Percentile rank used as the cut-off for a given keep rate.
pub fn threshold_rank(rate: f64) -> f64 {
    ((100.0 * (1.0 - rate)).floor() + 1.0).min(100.0)
}

/// Decide which words survive. `probs` is aligned with `words`.
pub fn select(words: &[Word], probs: &[f32], rate: f64) -> Vec<bool> {
    let candidates: Vec<f32> = words
        .iter()
        .zip(probs)
        .filter(|(w, _)| !w.forced)
        .map(|(_, &p)| p)
        .collect();
    if rate >= 1.0 || candidates.is_empty() {
        return vec![true; words.len()];
    }
    let threshold = percentile(&candidates, threshold_rank(rate));
    words
        .iter()
        .zip(probs)
        .map(|(w, &p)| w.forced || p as f64 >= threshold)
        .collect()
}
