//! Long-document chunking for abstractive backends
//!
//! Neural summarization models have hard input limits, so long documents are
//! cut into word-count-bounded chunks and a representative subset is chosen
//! by position: the introduction and conclusion always make the cut, and
//! longer summary targets pull in more of the middle.

use serde::{Deserialize, Serialize};

/// Requested summary length for an abstractive backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

/// Word count above which a document is chunked before being handed to an
/// abstractive model.
pub const CHUNKING_THRESHOLD_WORDS: usize = 1024;

/// Default per-chunk word budget.
pub const DEFAULT_CHUNK_WORDS: usize = 800;

/// Split text into chunks of at most `max_words` whitespace-separated words.
pub fn chunk_by_words(text: &str, max_words: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || max_words == 0 {
        return Vec::new();
    }
    words
        .chunks(max_words)
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Pick the chunks worth summarizing for the requested length.
///
/// Short keeps the first and last chunk; medium adds the middle; long adds
/// evenly-spaced quartile chunks. Chunk order is preserved.
pub fn select_chunks(chunks: &[String], length: SummaryLength) -> Vec<String> {
    let mut picked: Vec<usize> = Vec::new();
    let n = chunks.len();
    if n == 0 {
        return Vec::new();
    }

    picked.push(0);
    match length {
        SummaryLength::Short => {}
        SummaryLength::Medium => {
            if n >= 3 {
                picked.push(n / 2);
            }
        }
        SummaryLength::Long => {
            if n >= 5 {
                let quarter = n / 4;
                picked.push(quarter);
                picked.push(quarter * 2);
                picked.push(quarter * 3);
            } else if n >= 3 {
                picked.push(n / 2);
            }
        }
    }
    if n >= 2 {
        picked.push(n - 1);
    }

    picked.sort_unstable();
    picked.dedup();
    picked.into_iter().map(|i| chunks[i].clone()).collect()
}

/// Prepare text for an abstractive backend: pass short documents through
/// unchanged, chunk-and-select long ones.
pub fn prepare_for_abstractive(text: &str, length: SummaryLength) -> String {
    if text.split_whitespace().count() <= CHUNKING_THRESHOLD_WORDS {
        return text.to_string();
    }
    let chunks = chunk_by_words(text, DEFAULT_CHUNK_WORDS);
    select_chunks(&chunks, length).join(" ")
}
