// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Wave wellness insights engine.
//!
//! This crate provides the domain records consumed by the analytics engine,
//! the shared error type, and the storage collaborator trait that supplies
//! mood samples and journal entries.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::WaveError;
pub use traits::WellnessStore;
pub use types::{EmotionalCategory, JournalEntry, MoodSample, SubjectId};
