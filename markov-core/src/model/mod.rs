//! Markov chain model: tables, segmentation, prediction and generation.
//!
//! - Continuations of one context (`Transitions`)
//! - Fixed-order frequency tables (`FrequencyTable`)
//! - Character and word segmentation (`Segmentation`)
//! - The multi-order predictor (`Predictor`)
//! - Sliding-window sequence generation (`generate`)

/// Continuations of a single context and weighted sampling over them.
pub mod transitions;

/// Fixed-order frequency tables and the table builder.
pub mod table;

/// Character and word segmentation strategies.
pub mod segmentation;

/// Multi-order predictor built from a source token sequence.
pub mod predictor;

/// Sequence generation over a sliding context window.
pub mod generator;
