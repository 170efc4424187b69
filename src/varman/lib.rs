//! # Varman Architecture
//!
//! Varman is a **UI-agnostic product-variant board library**. A merchant keeps
//! an ordered list of product filters; each filter owns a row of variant slots
//! (an image plus its name), and slots line up across filters as columns.
//! The `varman` binary is one client of this library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the board, prints messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, zero-based slot addresses     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load latest board → pure Board op → write-through save   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (board.rs, reorder.rs, ident.rs, catalog.rs)          │
//! │  - Immutable Board values and pure operations               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Storage Layer (store/)                                     │
//! │  - SlotStore trait: FileSlots (production), InMemorySlots   │
//! │  - BoardStore: JSON slot, default board on corrupt data     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`board`]: The board value and its operations
//! - [`reorder`]: Pure move-to-position over keyed sequences
//! - [`ident`]: Filter and variant id allocation
//! - [`catalog`]: The searchable image catalog
//! - [`store`]: Slot storage and board persistence
//! - [`model`]: Filter, variant and image types
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and API construction
//! - [`error`]: Error types

pub mod api;
pub mod board;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod ident;
pub mod init;
pub mod model;
pub mod reorder;
pub mod store;
