pub mod error;
pub mod types;

#[cfg(feature = "cumulants")]
pub mod cumulants;

#[cfg(feature = "cgf")]
pub mod cgf;

#[cfg(feature = "combinatorics")]
pub mod combinatorics;

#[cfg(feature = "hermite")]
pub mod hermite;

pub use error::CumulantError;
pub use types::*;

/// Standard result type for all cumulant operations
pub type CumulantResult<T> = Result<T, CumulantError>;
