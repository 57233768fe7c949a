//! Markov-chain title completion library.
//!
//! This crate provides a small word-level Markov model including:
//! - Whitespace tokenization with retained punctuation
//! - A transition table keyed on the two preceding tokens
//! - Sentence completion bounded by minimum/maximum lengths
//! - Corpus helpers to split raw text into titles
//!
//! Training and generation are pure, single-threaded computations over
//! in-memory structures. The only randomness sits behind the `Sampler` trait.

/// Core Markov model and completion logic.
///
/// Exposes tokens, contexts, the transition table (trainer) and the
/// generator together with its configuration and sampling primitive.
pub mod model;

/// Corpus helpers (input splitting, title segmentation, file loading,
/// built-in demonstration corpus).
pub mod corpus;
