//! Fee calculator
//!
//! Pure mapping from (hourly rate, duration) to the amount due. Duration
//! and rate are non-negative integers; a negative value is a caller
//! contract violation and fails fast rather than being clamped, since
//! masking it would corrupt billing.
//!
//! CRITICAL: All money values are i64 (whole currency units)

use thiserror::Error;

/// Errors that can occur computing the amount due
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    #[error("duration must be non-negative, got {0}")]
    InvalidDuration(i64),

    #[error("hourly rate must be non-negative, got {0}")]
    InvalidRate(i64),

    #[error("fee overflows i64: rate {rate} * duration {duration_hours}")]
    AmountOverflow { rate: i64, duration_hours: i64 },
}

/// Compute the amount due for a stay: `hourly_rate * duration_hours`.
///
/// # Example
/// ```
/// use parking_core_rs::fees::amount_due;
///
/// assert_eq!(amount_due(5, 3).unwrap(), 15);
/// assert_eq!(amount_due(10, 0).unwrap(), 0);
/// assert!(amount_due(5, -1).is_err());
/// ```
pub fn amount_due(hourly_rate: i64, duration_hours: i64) -> Result<i64, FeeError> {
    if duration_hours < 0 {
        return Err(FeeError::InvalidDuration(duration_hours));
    }
    if hourly_rate < 0 {
        return Err(FeeError::InvalidRate(hourly_rate));
    }

    hourly_rate
        .checked_mul(duration_hours)
        .ok_or(FeeError::AmountOverflow {
            rate: hourly_rate,
            duration_hours,
        })
}
