use thiserror::Error;

/// Failures while parsing textual representations of core identifiers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid length, expected {expected} bytes")]
    InvalidLength { expected: usize },
}

/// Admission errors raised when a transaction is rejected by the pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("transaction already exists in the pool")]
    Duplicate,

    #[error("invalid transaction: {0}")]
    Invalid(String),

    #[error("the pool is full")]
    Full,
}

/// Lookup faults from the chain store and the state database. Absence of an
/// optional record is reported as `Ok(None)` by the store, `NotFound` is for
/// lookups whose identifier is required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,

    #[error("store corrupted: {0}")]
    Corrupted(String),
}

/// The peer protocol cannot serve the request right now.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("protocol is not ready")]
    NotReady,
}

/// Faults from the key/value databases backing the account indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    #[error("database error: {0}")]
    Backend(String),
}
