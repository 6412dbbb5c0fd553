//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic product catalog browser**. It is a library that
//! happens to have a CLI client, and at its heart sits a generic table engine
//! that knows nothing about products.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session              │
//! │  - Normalizes inputs (filter and sort expressions)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / favorite / show / columns / config                │
//! │  - Wires the catalog into the table engine                  │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                            │
//!                 ▼                            ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Table Engine (table/)        │ │  Storage Layer (store/)   │
//! │  - Column registry, filters   │ │  - ProductSource          │
//! │  - State store, widget bank   │ │  - FavoriteStore          │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, and never writes to stdout/stderr or exits. Diagnostics go
//! through `tracing`.
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`table/`): unit tests per module plus property tests in
//!    `tests/table_properties.rs`.
//! 2. **Commands**: business logic against `StaticSource` and
//!    `MemFavoriteStore`.
//! 3. **API**: dispatch and input normalization.
//! 4. **CLI**: end-to-end runs of the binary in `tests/cli_integration.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`table`]: The generic table engine
//! - [`catalog`]: Product columns and global search wiring
//! - [`favorites`]: The favorites overlay
//! - [`store`]: Product sources and favorite persistence
//! - [`model`]: `Product` and `Category`
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod table;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;
