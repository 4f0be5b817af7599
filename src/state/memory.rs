//! In-memory flag store for tests
//!
//! Records every key read and written so tests can assert which flags an
//! operation touched.

use std::cell::RefCell;
use std::collections::HashMap;

use super::FlagStore;
use crate::error::{Result, state};

#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flags: HashMap<String, bool>,
    reads: RefCell<Vec<String>>,
    writes: Vec<String>,
    fail_writes: bool,
}

impl MemoryFlagStore {
    /// A store whose writes always fail, as an unavailable backend would
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_flag(mut self, key: &str, value: bool) -> Self {
        self.flags.insert(key.to_string(), value);
        self
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Whether `key` was read or written since the store was created
    pub fn touched(&self, key: &str) -> bool {
        self.reads.borrow().iter().any(|k| k == key) || self.writes.iter().any(|k| k == key)
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<bool> {
        self.reads.borrow_mut().push(key.to_string());
        Ok(self.flags.get(key).copied().unwrap_or(false))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        self.writes.push(key.to_string());
        if self.fail_writes {
            return Err(state::write_failed("memory", "store unavailable"));
        }
        self.flags.insert(key.to_string(), value);
        Ok(())
    }
}
