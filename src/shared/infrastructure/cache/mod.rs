// Local durable cache port.
//
// Purpose
// - Key-value scoped storage used to persist and rehydrate collections across sessions.
//
// Boundaries
// - Values are opaque strings at the port; `load_json` and `save_json` add the serde layer.

pub mod file;
pub mod in_memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cache offline")]
    Offline,
}

pub trait DurableCache: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn write(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

pub fn load_json<T: DeserializeOwned, C: DurableCache + ?Sized>(
    cache: &C,
    key: &str,
) -> Result<Option<T>, CacheError> {
    match cache.read(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_json<T: Serialize + ?Sized, C: DurableCache + ?Sized>(
    cache: &C,
    key: &str,
    value: &T,
) -> Result<(), CacheError> {
    let raw = serde_json::to_string(value)?;
    cache.write(key, &raw)
}
