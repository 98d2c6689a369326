//! Time values for contact schedules.
//!
//! Contact plans express times as plain floating point seconds relative to
//! the start of the planning epoch. This module wraps them so that the rest
//! of the crate can order and compare times without worrying about NaN.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Error returned when a value cannot be used as a time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A point in time (or a duration) within a contact plan.
///
/// Never NaN, so it has a total order. Positive infinity is allowed and
/// stands for "never" (an open-ended window, or a contact not yet reached).
///
/// # Examples
///
/// ```
/// use cgr_server::domain::DtnTime;
///
/// let t = DtnTime::new(4.0).unwrap();
/// assert!(t < DtnTime::INFINITY);
/// assert!(DtnTime::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct DtnTime(f64);

impl DtnTime {
    /// The start of the planning epoch.
    pub const ZERO: DtnTime = DtnTime(0.0);

    /// Later than every finite time.
    pub const INFINITY: DtnTime = DtnTime(f64::INFINITY);

    /// Create a time from seconds, rejecting NaN.
    pub fn new(secs: f64) -> Result<Self, TimeError> {
        if secs.is_nan() {
            return Err(TimeError::new("must be a number"));
        }
        Ok(Self(secs))
    }

    /// Parse a time from its textual form (e.g. `"12.5"` or `"inf"`).
    ///
    /// ```
    /// use cgr_server::domain::DtnTime;
    ///
    /// assert_eq!(DtnTime::parse("2").unwrap().as_secs(), 2.0);
    /// assert!(DtnTime::parse("inf").unwrap().is_infinite());
    /// assert!(DtnTime::parse("soon").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let secs: f64 = s
            .parse()
            .map_err(|_| TimeError::new("expected a decimal number"))?;
        Self::new(secs)
    }

    /// Returns the raw number of seconds.
    pub fn as_secs(&self) -> f64 {
        self.0
    }

    /// Returns true for finite values.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns true for infinite values.
    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }

    /// Returns true for values below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// The seconds value if finite, `None` for infinity.
    pub fn finite_secs(&self) -> Option<f64> {
        self.is_finite().then_some(self.0)
    }
}

impl Eq for DtnTime {}

impl PartialOrd for DtnTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DtnTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for DtnTime {
    type Output = DtnTime;

    // Sum of two non-NaN values is NaN only for inf + -inf; delays are
    // never negative infinity.
    fn add(self, rhs: DtnTime) -> DtnTime {
        DtnTime(self.0 + rhs.0)
    }
}

impl fmt::Debug for DtnTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DtnTime({})", self.0)
    }
}

impl fmt::Display for DtnTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
