use core::num::{ParseFloatError, ParseIntError};

/// Why a raw option value could not be decoded
///
/// Queries on [Usage](crate::Usage) never return this; they fall back to
/// the caller's default instead. It is visible to [OptValue](crate::OptValue)
/// implementors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, derive_more::Display)]
pub enum OptError {
    /// Not a base-10 integer
    #[from]
    #[display("invalid integer: {_0}")]
    ParseInt(ParseIntError),
    /// Not a decimal float
    #[from]
    #[display("invalid float: {_0}")]
    ParseFloat(ParseFloatError),
    /// Parsed, but does not fit the target type
    #[display("value out of range")]
    OutOfRange,
    /// Nothing usable followed the flag: it was empty, or it was the next option
    #[display("missing value")]
    MissingValue,
}

#[cfg(feature = "std")]
impl std::error::Error for OptError {}
