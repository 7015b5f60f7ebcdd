use jsonrpsee::types::ErrorObjectOwned;
use seele_types::{DatabaseError, PoolError, ProtocolError, StoreError};

/// JSON-RPC error code for lookups whose identifier is unknown or pruned.
pub const NOT_FOUND_CODE: i32 = -32001;
/// JSON-RPC error code for transactions rejected at admission.
pub const TX_REJECTED_CODE: i32 = -32002;
/// JSON-RPC error code for requests the protocol layer cannot serve yet.
pub const PROTOCOL_UNAVAILABLE_CODE: i32 = -32003;
/// Generic internal error, per the JSON-RPC spec.
pub const INTERNAL_CODE: i32 = -32603;

/// Boundary error of the RPC handlers: wraps the domain taxonomy and maps
/// each class onto a stable error code for clients.
#[derive(Debug, thiserror::Error)]
pub enum RPCError {
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl RPCError {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

impl From<RPCError> for ErrorObjectOwned {
    fn from(error: RPCError) -> Self {
        let code = match &error {
            RPCError::Store(StoreError::NotFound) => NOT_FOUND_CODE,
            RPCError::Pool(_) => TX_REJECTED_CODE,
            RPCError::Protocol(_) => PROTOCOL_UNAVAILABLE_CODE,
            RPCError::Custom(_) | RPCError::Store(_) | RPCError::Database(_) => INTERNAL_CODE,
        };
        ErrorObjectOwned::owned(code, error.to_string(), None::<()>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_follow_the_taxonomy() {
        let not_found: ErrorObjectOwned = RPCError::from(StoreError::NotFound).into();
        assert_eq!(not_found.code(), NOT_FOUND_CODE);

        let rejected: ErrorObjectOwned = RPCError::from(PoolError::Duplicate).into();
        assert_eq!(rejected.code(), TX_REJECTED_CODE);

        let unavailable: ErrorObjectOwned = RPCError::from(ProtocolError::NotReady).into();
        assert_eq!(unavailable.code(), PROTOCOL_UNAVAILABLE_CODE);

        let internal: ErrorObjectOwned = RPCError::custom("boom").into();
        assert_eq!(internal.code(), INTERNAL_CODE);
    }
}
