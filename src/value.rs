//! Domain value linearization.
//!
//! Extent arithmetic (symmetry, padding, inclusion) runs on a linear
//! floating-point representation of the data, while the bounds handed back
//! to the caller keep the caller's own value type. [`DomainValue`] is the
//! bridge: numeric types linearize to themselves, temporal types linearize
//! to their epoch-millisecond timestamp, and downstream crates can
//! implement the trait for their own value types (decimal prices, custom
//! time stamps).
//!
//! # Examples
//!
//! ```rust
//! use spenn::DomainValue;
//! use chrono::{DateTime, TimeZone, Utc};
//!
//! // Numeric values are their own linear representation.
//! assert_eq!(42.0f64.to_repr(), 42.0);
//!
//! // Temporal values linearize to epoch milliseconds and convert back.
//! let date = Utc.with_ymd_and_hms(2014, 1, 10, 0, 0, 0).unwrap();
//! let repr = date.to_repr();
//! assert_eq!(DateTime::<Utc>::from_repr(repr), Some(date));
//! ```

use chrono::{DateTime, Utc};
use num_traits::Float;

/// A value that can span a chart's data domain: numeric or temporal.
///
/// Range arithmetic is performed on [`DomainValue::Repr`], a linear
/// floating-point space; results convert back through
/// [`DomainValue::from_repr`] so temporal bounds stay temporal.
///
/// # Implementing for your own types
///
/// ```rust
/// use spenn::DomainValue;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Celsius(f64);
///
/// impl DomainValue for Celsius {
///     type Repr = f64;
///
///     fn to_repr(self) -> f64 {
///         self.0
///     }
///
///     fn from_repr(repr: f64) -> Option<Self> {
///         Some(Celsius(repr))
///     }
/// }
/// ```
pub trait DomainValue: Copy {
    /// Linear representation used for range arithmetic.
    type Repr: Float;

    /// Linearizes the value.
    fn to_repr(self) -> Self::Repr;

    /// Converts a linear value back into the domain type.
    ///
    /// Returns `None` when the value has no representation in the domain
    /// type, e.g. a non-finite number for an integer or timestamp type.
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}

impl DomainValue for f64 {
    type Repr = f64;

    fn to_repr(self) -> f64 {
        self
    }

    fn from_repr(repr: f64) -> Option<Self> {
        Some(repr)
    }
}

impl DomainValue for f32 {
    type Repr = f32;

    fn to_repr(self) -> f32 {
        self
    }

    fn from_repr(repr: f32) -> Option<Self> {
        Some(repr)
    }
}

/// Epoch counters and other integer-valued domains; padded bounds round to
/// the nearest integer on the way back.
impl DomainValue for i64 {
    type Repr = f64;

    fn to_repr(self) -> f64 {
        self as f64
    }

    fn from_repr(repr: f64) -> Option<Self> {
        if !repr.is_finite() {
            return None;
        }
        Some(repr.round() as i64)
    }
}

/// Temporal values linearize to their epoch-millisecond timestamp, so
/// fractional padding of a date range is computed on millisecond
/// differences.
impl DomainValue for DateTime<Utc> {
    type Repr = f64;

    fn to_repr(self) -> f64 {
        self.timestamp_millis() as f64
    }

    fn from_repr(repr: f64) -> Option<Self> {
        if !repr.is_finite() {
            return None;
        }
        // Representable range covers roughly ±262,000 years around the
        // epoch; anything outside it has no DateTime form.
        DateTime::from_timestamp_millis(repr.round() as i64)
    }
}
