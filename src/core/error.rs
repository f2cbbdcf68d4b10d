use std::fmt;

/// Why a field was rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InvalidReason {
    Missing,
    NotFinite,
    NotPositive,
    Zero,
    Negative,
    NotWholeNumber,
    BelowMinimum(f64),
    OutOfRange { min: f64, max: f64 },
    MustExceed(&'static str),
    Overflow,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Missing => write!(f, "is required"),
            InvalidReason::NotFinite => write!(f, "must be a number"),
            InvalidReason::NotPositive => write!(f, "must be > 0"),
            InvalidReason::Zero => write!(f, "must not be 0"),
            InvalidReason::Negative => write!(f, "must be >= 0"),
            InvalidReason::NotWholeNumber => write!(f, "must be a whole number"),
            InvalidReason::BelowMinimum(min) => write!(f, "must be at least {min}"),
            InvalidReason::OutOfRange { min, max } => {
                write!(f, "must be between {min} and {max}")
            }
            InvalidReason::MustExceed(other) => write!(f, "must be greater than {other}"),
            InvalidReason::Overflow => write!(f, "is too large to calculate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("{field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: InvalidReason,
    },
}

impl CalcError {
    pub fn invalid(field: &'static str, reason: InvalidReason) -> Self {
        CalcError::InvalidInput { field, reason }
    }

    pub fn field(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Unwraps an optional caller-supplied field, reporting it as missing.
pub fn required(field: &'static str, value: Option<f64>) -> CalcResult<f64> {
    value.ok_or_else(|| CalcError::invalid(field, InvalidReason::Missing))
}

pub(crate) fn require_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, InvalidReason::NotFinite))
    }
}

/// Guards a computed figure; inputs that pass validation can still push
/// `powf` past `f64::MAX`.
pub(crate) fn finite_output(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, InvalidReason::Overflow))
    }
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    let value = require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, InvalidReason::NotPositive))
    }
}

pub(crate) fn require_non_zero(field: &'static str, value: f64) -> CalcResult<f64> {
    let value = require_finite(field, value)?;
    if value != 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, InvalidReason::Zero))
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> CalcResult<f64> {
    let value = require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, InvalidReason::Negative))
    }
}

pub(crate) fn require_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> CalcResult<f64> {
    let value = require_finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CalcError::invalid(
            field,
            InvalidReason::OutOfRange { min, max },
        ))
    }
}
