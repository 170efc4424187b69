use super::SlotStore;
use crate::error::{Result, VarmanError};
use std::cell::Cell;
use std::collections::HashMap;

/// In-memory slots for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemorySlots {
    slots: HashMap<String, String>,
    simulate_write_error: Cell<bool>,
}

impl InMemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Test helper to peek at a slot without going through the trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }
}

impl SlotStore for InMemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(VarmanError::Store("Simulated write error".to_string()));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}
