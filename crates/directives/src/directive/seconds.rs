//! Duration directives, stored as canonical integer seconds.
//!
//! The wire fragment is `name=seconds` (`max-age=300`), or just the number
//! for literal directives such as `Access-Control-Max-Age`. The operation
//! set is the clamp/offset/scale algebra over the stored seconds.

use crate::duration::Duration;
use crate::error::{BuildError, ParseError};
use crate::header::Header;
use crate::utils::strip_prefix_ignore_case;

use super::DirectiveValue;

pub(super) fn stringify(name: &str, literal: bool, seconds: i64) -> String {
    if literal { seconds.to_string() } else { format!("{name}={seconds}") }
}

pub(super) fn parse(name: &str, literal: bool, segment: &str) -> Result<DirectiveValue, ParseError> {
    let raw = if literal {
        segment
    } else {
        let rest = strip_prefix_ignore_case(segment, name).ok_or_else(|| ParseError::invalid_duration(segment))?;
        rest.strip_prefix('=').ok_or_else(|| ParseError::invalid_duration(segment))?
    };

    raw.trim()
        .parse::<i64>()
        .map(DirectiveValue::Seconds)
        .map_err(|_| ParseError::invalid_duration(segment))
}

/// Typed operation carrier for a duration directive key.
///
/// All operations take and produce canonical integer seconds; inputs may be
/// expressed in any [`Duration`] unit. Operations that read the current
/// value treat an absent directive as "no value yet": bounds win outright,
/// `decrease` and `scale` are no-ops.
#[derive(Debug, Clone, Copy)]
pub struct SecondsKey {
    key: &'static str,
}

impl SecondsKey {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub const fn key(self) -> &'static str {
        self.key
    }

    /// The stored seconds, if the directive is set.
    pub fn get(self, header: &Header) -> Option<i64> {
        match header.get(self.key) {
            Some(DirectiveValue::Seconds(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn set(self, header: &Header, value: impl Into<Duration>) -> Result<Header, BuildError> {
        let seconds = value.into().to_seconds(false)?;
        header.with(self.key, DirectiveValue::Seconds(seconds))
    }

    pub fn unset(self, header: &Header) -> Result<Header, BuildError> {
        header.without(self.key)
    }

    /// Raises the value to at least `min`. An absent value becomes `min`.
    pub fn with_min(self, header: &Header, min: impl Into<Duration>) -> Result<Header, BuildError> {
        let min = min.into().to_seconds(false)?;
        let next = match self.get(header) {
            None => min,
            Some(current) => current.max(min),
        };
        header.with(self.key, DirectiveValue::Seconds(next))
    }

    /// Lowers the value to at most `max`. An absent value becomes `max`.
    pub fn with_max(self, header: &Header, max: impl Into<Duration>) -> Result<Header, BuildError> {
        let max = max.into().to_seconds(false)?;
        let next = match self.get(header) {
            None => max,
            Some(current) => current.min(max),
        };
        header.with(self.key, DirectiveValue::Seconds(next))
    }

    /// Two-sided clamp. Bounds are normalized so the smaller one is the
    /// floor; an absent value becomes the floor.
    pub fn clamp(
        self,
        header: &Header,
        min: impl Into<Duration>,
        max: impl Into<Duration>,
    ) -> Result<Header, BuildError> {
        let a = min.into().to_seconds(false)?;
        let b = max.into().to_seconds(false)?;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let next = match self.get(header) {
            None => lo,
            Some(current) => current.clamp(lo, hi),
        };
        header.with(self.key, DirectiveValue::Seconds(next))
    }

    /// Adds `amount`. An absent value becomes `amount`.
    pub fn increase(self, header: &Header, amount: impl Into<Duration>) -> Result<Header, BuildError> {
        let amount = amount.into().to_seconds(false)?;
        let next = match self.get(header) {
            None => amount,
            Some(current) => current.saturating_add(amount),
        };
        header.with(self.key, DirectiveValue::Seconds(next))
    }

    /// Subtracts `amount`, flooring at zero. No-op when unset.
    pub fn decrease(self, header: &Header, amount: impl Into<Duration>) -> Result<Header, BuildError> {
        let amount = amount.into().to_seconds(false)?;
        match self.get(header) {
            None => Ok(header.clone()),
            Some(current) => header.with(self.key, DirectiveValue::Seconds(current.saturating_sub(amount).max(0))),
        }
    }

    /// Multiplies by `factor`, rounding half away from zero. A factor that
    /// is non-finite or not positive forces the value to zero. No-op when
    /// unset.
    pub fn scale(self, header: &Header, factor: f64) -> Result<Header, BuildError> {
        let Some(current) = self.get(header) else {
            return Ok(header.clone());
        };

        #[allow(
            clippy::cast_possible_truncation,
            reason = "the product is clamped into i64 range before conversion"
        )]
        let next = if !factor.is_finite() || factor <= 0.0 {
            0
        } else {
            let scaled = (current as f64 * factor).round();
            scaled.clamp(0.0, i64::MAX as f64) as i64
        };
        header.with(self.key, DirectiveValue::Seconds(next))
    }

    pub fn set_fn(self, value: impl Into<Duration>) -> impl Fn(Header) -> Result<Header, BuildError> {
        let value = value.into();
        move |header| self.set(&header, value)
    }

    pub fn unset_fn(self) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.unset(&header)
    }

    pub fn with_min_fn(self, min: impl Into<Duration>) -> impl Fn(Header) -> Result<Header, BuildError> {
        let min = min.into();
        move |header| self.with_min(&header, min)
    }

    pub fn with_max_fn(self, max: impl Into<Duration>) -> impl Fn(Header) -> Result<Header, BuildError> {
        let max = max.into();
        move |header| self.with_max(&header, max)
    }

    pub fn clamp_fn(
        self,
        min: impl Into<Duration>,
        max: impl Into<Duration>,
    ) -> impl Fn(Header) -> Result<Header, BuildError> {
        let min = min.into();
        let max = max.into();
        move |header| self.clamp(&header, min, max)
    }

    pub fn increase_fn(self, amount: impl Into<Duration>) -> impl Fn(Header) -> Result<Header, BuildError> {
        let amount = amount.into();
        move |header| self.increase(&header, amount)
    }

    pub fn decrease_fn(self, amount: impl Into<Duration>) -> impl Fn(Header) -> Result<Header, BuildError> {
        let amount = amount.into();
        move |header| self.decrease(&header, amount)
    }

    pub fn scale_fn(self, factor: f64) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.scale(&header, factor)
    }
}
