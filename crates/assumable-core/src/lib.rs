pub mod amortization;
pub mod assumption;
pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "form")]
pub mod form;

pub use error::AssumableError;
pub use types::*;

/// Standard result type for all assumable-mortgage operations
pub type AssumableResult<T> = Result<T, AssumableError>;
