//! Duration values used by time-based directives.
//!
//! Directives like `max-age` carry a quantity of seconds on the wire. Callers
//! rarely think in raw seconds, so [`Duration`] lets a value be expressed in
//! any of the supported units; it is converted to canonical integer seconds
//! the moment it enters a header and is never stored in unit form.
//!
//! ```
//! use header_directives::duration::Duration;
//!
//! assert_eq!(Duration::Minutes(5).to_seconds(false).unwrap(), 300);
//! assert_eq!(Duration::from(86400).to_seconds(false).unwrap(), 86400);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while converting a [`Duration`] to seconds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration unit: {unit}")]
    InvalidUnit { unit: String },

    #[error("expected a non-negative duration, got {seconds}s")]
    NegativeNotAllowed { seconds: i64 },
}

impl DurationError {
    pub fn invalid_unit<S: ToString>(unit: S) -> Self {
        Self::InvalidUnit { unit: unit.to_string() }
    }
}

/// The units a [`Duration`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
}

impl DurationUnit {
    /// The fixed number of seconds one step of this unit represents.
    pub const fn scale(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3600,
            Self::Days => 86400,
            Self::Years => 31_536_000,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Years => "years",
        }
    }
}

impl FromStr for DurationUnit {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seconds" => Ok(Self::Seconds),
            "minutes" => Ok(Self::Minutes),
            "hours" => Ok(Self::Hours),
            "days" => Ok(Self::Days),
            "years" => Ok(Self::Years),
            other => Err(DurationError::invalid_unit(other)),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quantity of time expressed in one unit.
///
/// `Duration` is a transient input type: it exists between the call site and
/// the header, where it is collapsed to integer seconds. A plain integer
/// converts to `Duration::Seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duration {
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Years(i64),
}

impl Duration {
    pub const fn new(unit: DurationUnit, amount: i64) -> Self {
        match unit {
            DurationUnit::Seconds => Self::Seconds(amount),
            DurationUnit::Minutes => Self::Minutes(amount),
            DurationUnit::Hours => Self::Hours(amount),
            DurationUnit::Days => Self::Days(amount),
            DurationUnit::Years => Self::Years(amount),
        }
    }

    pub const fn unit(self) -> DurationUnit {
        match self {
            Self::Seconds(_) => DurationUnit::Seconds,
            Self::Minutes(_) => DurationUnit::Minutes,
            Self::Hours(_) => DurationUnit::Hours,
            Self::Days(_) => DurationUnit::Days,
            Self::Years(_) => DurationUnit::Years,
        }
    }

    pub const fn amount(self) -> i64 {
        match self {
            Self::Seconds(n) | Self::Minutes(n) | Self::Hours(n) | Self::Days(n) | Self::Years(n) => n,
        }
    }

    /// Converts to canonical integer seconds.
    ///
    /// Multiplication saturates at the `i64` bounds. A negative result is
    /// rejected unless `allow_negative` is set; negative durations only
    /// appear as intermediate deltas, never as stored values.
    pub fn to_seconds(self, allow_negative: bool) -> Result<i64, DurationError> {
        let seconds = self.amount().saturating_mul(self.unit().scale());
        if seconds < 0 && !allow_negative {
            return Err(DurationError::NegativeNotAllowed { seconds });
        }
        Ok(seconds)
    }
}

impl From<i64> for Duration {
    fn from(seconds: i64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<i32> for Duration {
    fn from(seconds: i32) -> Self {
        Self::Seconds(i64::from(seconds))
    }
}

impl From<u32> for Duration {
    fn from(seconds: u32) -> Self {
        Self::Seconds(i64::from(seconds))
    }
}
