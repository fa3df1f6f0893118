//! Top-level module for the character-level Markov model.
//!
//! This module provides:
//! - Per-window character frequency lists (`FrequencyList`, `CharCount`)
//! - The fixed-order model with training and generation (`LanguageModel`)
//! - Model construction parameters (`ModelConfig`)

/// Validated construction parameters (window length, optional RNG seed).
pub mod config;

/// Ordered list of observed next characters for one context window.
///
/// Tracks occurrence counts and the derived probability distribution
/// used by weighted sampling.
pub mod frequency_list;

/// Fixed-order character model.
///
/// Handles corpus ingestion, probability materialization,
/// weighted sampling and text generation.
pub mod language_model;
