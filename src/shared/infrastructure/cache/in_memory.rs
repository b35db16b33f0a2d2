// In memory implementation of the DurableCache port.
//
// Purpose
// - Exercise the event store without touching the filesystem.

use crate::shared::infrastructure::cache::{CacheError, DurableCache};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let cache = Self::default();
        cache
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        cache
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

impl DurableCache for InMemoryCache {
    fn read(&self, key: &str) -> Result<Option<String>, CacheError> {
        if self.is_offline {
            return Err(CacheError::Offline);
        }
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CacheError> {
        if self.is_offline {
            return Err(CacheError::Offline);
        }
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
