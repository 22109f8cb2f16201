// SPDX-FileCopyrightText: 2026 Wave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions.
//!
//! Collaborators use `#[async_trait]` for dynamic dispatch compatibility.

pub mod storage;

pub use storage::WellnessStore;
