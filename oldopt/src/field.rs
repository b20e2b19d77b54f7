use crate::OptError;

/// A type that can be decoded from the raw text following an option letter
///
/// See [Usage::opt](crate::Usage::opt).
pub trait OptValue: Sized {
    /// Construct from the raw value
    fn decode(raw: &str) -> Result<Self, OptError>;
}

/// Take a string value, or `None` if the raw value is empty or is the next option.
///
/// A value that really begins with a dash is written as `\-value`; the
/// backslash is dropped here.
pub(crate) fn unescape(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw.starts_with('-') {
        return None;
    }
    Some(
        raw.strip_prefix('\\')
            .filter(|rest| rest.starts_with('-'))
            .unwrap_or(raw),
    )
}

/// Decimal float that has to survive narrowing to `f32`.
///
/// Overflowing `f32` is an error, while `inf` spelled out is not.
pub(crate) fn parse_narrow_float(raw: &str) -> Result<f32, OptError> {
    let narrow: f32 = raw.parse()?;
    if narrow.is_infinite() && !is_spelled_infinity(raw) {
        return Err(OptError::OutOfRange);
    }
    Ok(narrow)
}

// `inf` or `infinity` in any case, optionally signed
fn is_spelled_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_on_integer {
    ($ty:ty) => {
        impl OptValue for $ty {
            fn decode(raw: &str) -> Result<Self, OptError> {
                Ok(raw.parse()?)
            }
        }
    };
}

impl_on_integer!(u8);
impl_on_integer!(u16);
impl_on_integer!(u32);
impl_on_integer!(u64);
impl_on_integer!(u128);
impl_on_integer!(usize);
impl_on_integer!(i8);
impl_on_integer!(i16);
impl_on_integer!(i32);
impl_on_integer!(i64);
impl_on_integer!(i128);
impl_on_integer!(isize);

impl OptValue for f32 {
    fn decode(raw: &str) -> Result<Self, OptError> {
        parse_narrow_float(raw)
    }
}

impl OptValue for f64 {
    fn decode(raw: &str) -> Result<Self, OptError> {
        Ok(raw.parse()?)
    }
}

#[cfg(feature = "alloc")]
impl OptValue for alloc::string::String {
    fn decode(raw: &str) -> Result<Self, OptError> {
        unescape(raw).map(Into::into).ok_or(OptError::MissingValue)
    }
}

#[cfg(feature = "std")]
impl OptValue for std::path::PathBuf {
    fn decode(raw: &str) -> Result<Self, OptError> {
        unescape(raw).map(Into::into).ok_or(OptError::MissingValue)
    }
}
