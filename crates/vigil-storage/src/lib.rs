// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for Vigil analysis results.
//!
//! One writer: all operations go through tokio-rusqlite's single
//! background thread, with WAL mode for concurrent readers. Schema is
//! managed by embedded refinery migrations.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod store;

pub use models::{AnalysisRecord, NewResult};
pub use store::ResultStore;
