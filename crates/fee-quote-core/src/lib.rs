pub mod error;
pub mod pricing;
pub mod types;

pub use error::FeeQuoteError;
pub use types::*;

/// Standard result type for all fee-quote operations
pub type FeeQuoteResult<T> = Result<T, FeeQuoteError>;
