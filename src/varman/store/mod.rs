//! # Storage Layer
//!
//! Persistence is a single string-keyed slot holding the board as JSON, the
//! same shape a browser would keep in local storage. The [`SlotStore`] trait
//! abstracts where slots live:
//!
//! - [`fs::FileSlots`]: production, one `{key}.json` file per slot in the data
//!   directory, written atomically.
//! - [`memory::InMemorySlots`]: tests, no persistence.
//!
//! [`BoardStore`] sits on top and owns the board's read/write boundary:
//!
//! - `save` is write-through: the command layer calls it after every mutation.
//! - `load` never fails on bad data. A missing slot, unparseable JSON, or a
//!   board that breaks its invariants all yield [`Board::default`]. Only real
//!   I/O failures surface as errors.
//!
//! ## Storage Format
//!
//! ```text
//! .varman/
//! ├── productStates.json  # JSON array of filters
//! └── config.json         # Configuration
//! ```

use crate::board::Board;
use crate::error::Result;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// Slot key the board is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "productStates";

/// A durable key-value area holding string values.
pub trait SlotStore {
    /// Read a slot; `Ok(None)` when it has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the slot's value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the slot. Removing a missing slot is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Loads and saves a [`Board`] through a [`SlotStore`].
pub struct BoardStore<S: SlotStore> {
    slots: S,
    key: String,
}

impl<S: SlotStore> BoardStore<S> {
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut S {
        &mut self.slots
    }

    /// Rehydrates the board, falling back to the default board when the slot
    /// is empty or holds anything that is not a valid board.
    pub fn load(&self) -> Result<Board> {
        let Some(raw) = self.slots.read(&self.key)? else {
            debug!(key = %self.key, "no saved board, using default");
            return Ok(Board::default());
        };
        match serde_json::from_str::<Board>(&raw) {
            Ok(board) => {
                debug!(key = %self.key, filters = board.len(), "board loaded");
                Ok(board)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "saved board is unreadable, using default");
                Ok(Board::default())
            }
        }
    }

    pub fn save(&mut self, board: &Board) -> Result<()> {
        let json = serde_json::to_string(board)?;
        self.slots.write(&self.key, &json)?;
        debug!(key = %self.key, filters = board.len(), "board saved");
        Ok(())
    }

    /// Drops the saved board so the next load starts from the default.
    pub fn reset(&mut self) -> Result<()> {
        self.slots.remove(&self.key)
    }

    /// The raw slot contents, if any.
    pub fn raw(&self) -> Result<Option<String>> {
        self.slots.read(&self.key)
    }
}
