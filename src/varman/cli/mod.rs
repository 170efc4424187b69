//! # CLI Layer
//!
//! This module is **one possible UI client** for varman. It is the only place
//! that parses arguments, touches stdout/stderr, asks for confirmation or sets
//! up logging. Everything else goes through [`varman::api::VarmanApi`].
//!
//! Positions typed by the user are 1-based, matching what `show` prints; they
//! are converted to the API's 0-based slot addresses here.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch and per-command handlers
//! - `render`: board grid, image list and message formatting

mod commands;
mod render;
mod setup;

pub use commands::run;
