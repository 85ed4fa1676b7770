mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A durable string-keyed text store.
pub trait FlatStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Removing a key that is not present is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
