// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Wave integration tests.
//!
//! # Components
//!
//! - [`MemoryStore`] - In-memory storage collaborator keyed by subject
//! - [`FailingStore`] - Storage collaborator whose every fetch fails
//! - [`mood_series`] / [`journal`] - Daily fixture builders

pub mod fixtures;
pub mod mock_store;

pub use fixtures::{fixture_now, journal, mood_series};
pub use mock_store::{FailingStore, MemoryStore};
