// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Wave wellness insights engine.

use thiserror::Error;

/// The primary error type used across Wave crates.
///
/// The analysis functions themselves never return this type; it surfaces only
/// at fallible seams (storage collaborators, catalog loading, flow sessions).
#[derive(Debug, Error)]
pub enum WaveError {
    /// Configuration errors (missing or unusable configuration source).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage collaborator errors (network failure, query failure, bad payload).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Catalog loading or validation errors.
    #[error("catalog error: {message}")]
    Catalog {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Caller supplied an argument the operation cannot act on.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
