//! Text preprocessing components
//!
//! This module provides sentence segmentation, word tokenization and
//! stopword filtering.

pub mod segmenter;
pub mod stopwords;
pub mod tokenize;
