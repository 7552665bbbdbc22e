//! Budgeted sentence selection
//!
//! Picks the top-ranked sentences under a retention-ratio budget and
//! restores document order before joining. Ranking order never leaks into
//! the output: selected sentences always appear by ascending original index.

use crate::pagerank::RankResult;
use crate::types::Sentence;

/// Number of sentences to keep for `n` sentences at the given ratio.
///
/// Always at least one.
pub fn budget(n: usize, ratio: f64) -> usize {
    ((n as f64 * ratio).floor() as usize).max(1)
}

/// Select the budgeted top sentences and restore original order.
///
/// Score ties break toward the lower original index (see
/// [`RankResult::top_k`]).
pub fn select(sentences: &[Sentence], ranks: &RankResult, ratio: f64) -> Vec<Sentence> {
    let k = budget(sentences.len(), ratio);
    let mut chosen = ranks.top_k(k);
    chosen.sort_unstable();
    chosen
        .into_iter()
        .map(|i| sentences[i].clone())
        .collect()
}

/// Join selected sentences into the final summary string.
///
/// Sentences are joined with single spaces; a period is appended when the
/// result doesn't already end in terminal punctuation.
pub fn join(selected: &[Sentence]) -> String {
    let mut summary = selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    if !summary.is_empty() && !summary.ends_with(['.', '!', '?']) {
        summary.push('.');
    }
    summary
}
