use seele_types::DatabaseError;

/// Byte-keyed key/value storage backing the account indices.
pub trait Database: Send + Sync {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, DatabaseError>;

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), DatabaseError>;

    fn has(&self, key: &[u8]) -> Result<bool, DatabaseError>;

    fn delete(&self, key: &[u8]) -> Result<(), DatabaseError>;
}
