use std::collections::HashMap;

use parking_lot::RwLock;
use seele_interfaces::Database;
use seele_types::DatabaseError;

/// A byte-keyed in-memory database.
#[derive(Default)]
pub struct MemoryDb {
    inner: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl Database for MemoryDb {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, DatabaseError> {
        Ok(self.inner.read().get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), DatabaseError> {
        self.inner.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn has(&self, key: &[u8]) -> Result<bool, DatabaseError> {
        Ok(self.inner.read().contains_key(key))
    }

    fn delete(&self, key: &[u8]) -> Result<(), DatabaseError> {
        self.inner.write().remove(key);
        Ok(())
    }
}
