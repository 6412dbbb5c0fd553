//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf. It is the only place
//! that:
//! - Parses shell arguments (clap)
//! - Writes to stdout/stderr and decides colours
//! - Shows the transient loading indicator
//!
//! ## Structure
//!
//! - [`setup`]: argument definitions
//! - [`commands`]: `run()` plus one `handle_*` per subcommand, each calling
//!   the API and printing the result
//! - [`render`]: `CmdResult` pieces to text, testable without a terminal
//! - [`styles`]: the colour theme
//!
//! CLI tests cover parsing and rendering only; business rules are tested in
//! the command layer.

pub mod commands;
pub mod render;
pub mod setup;
pub mod styles;

pub use commands::run;
