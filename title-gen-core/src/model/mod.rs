//! Top-level module for the title Markov model.
//!
//! This module provides:
//! - Normalized word tokens (`Token`)
//! - The two-slot backward context (`Context`)
//! - The trained transition table (`TransitionTable`)
//! - The sampling primitive (`Sampler`, `RandomSampler`)
//! - Completion bounds (`CompletionInput`)
//! - A high-level completion interface (`Generator`)

/// Word tokens and whitespace tokenization.
pub mod token;

/// Two-token backward context used as the transition table key.
///
/// Both training and generation compute contexts through `Context::of`.
pub mod context;

/// Transition table built from titles.
///
/// Handles title ingestion and read-only continuation lookups.
pub mod transition_table;

/// Injectable sampling primitive.
///
/// Picks one continuation from a duplicate-preserving multiset.
pub mod sampler;

/// Completion configuration (minimum and maximum token counts).
pub mod completion_input;

/// High-level interface completing a seed phrase with the trained table.
pub mod generator;
