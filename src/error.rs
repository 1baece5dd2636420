use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, CheckoutError>;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("payment session is not available")]
    SessionUnavailable,
    #[error("booking or room is missing; charge refused")]
    MissingEntities,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("gateway rejected the charge: {0}")]
    GatewayRejected(String),
    #[error("booking vanished before the gateway callback; result dropped")]
    OrphanedResult,
    #[error("checkout was disposed; late gateway callback discarded")]
    Stale,
    #[error("failed to record payment result: {0}")]
    RecorderFailure(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
