//! N-gram Markov chain text prediction library.
//!
//! This crate provides:
//! - Frequency tables mapping a context to its observed next tokens
//! - A multi-order predictor sampling the next token by observed frequency
//! - Character and word segmentation of the source text
//! - Sequence generation over a sliding context window
//! - Source loading with a named text encoding
//!
//! Randomness is always injected by the caller, so a seeded generator gives
//! reproducible predictions.

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Frequency tables, segmentation strategies, prediction and generation.
pub mod model;

/// Source loading (file reading, decoding, tokenization).
pub mod io;

pub use error::{MarkovError, Result};
pub use model::generator::generate;
pub use model::predictor::Predictor;
pub use model::segmentation::{Chars, Segmentation, Words};
pub use model::table::{FrequencyTable, build_table};
pub use model::transitions::Transitions;
