//! Extent computation: deriving a `[min, max]` domain from datasets.
//!
//! An [`Extent`] is a small, immutable configuration (field accessors,
//! padding, an optional symmetry anchor, an optional inclusion point)
//! whose [`Extent::compute`] operation scans one or more datasets and
//! produces the domain a positional scale should cover.
//!
//! # Pipeline
//!
//! The computation always runs in the same order:
//!
//! 1. **Scan**: every configured field is evaluated against every record
//!    (across all groups for grouped data) and the raw `[min, max]` is
//!    collected. Absent named fields and NaN-linearizing values are
//!    skipped.
//! 2. **Symmetry**: when an anchor is set, the domain becomes the anchor
//!    plus/minus the larger raw half-distance.
//! 3. **Padding**: fractions of the (possibly symmetrized) range are
//!    applied to each side.
//! 4. **Inclusion**: a point that falls outside the padded domain replaces
//!    the bound it violates.
//!
//! All arithmetic happens in the linear representation of the value type
//! (see [`DomainValue`]), so date-valued fields pad on millisecond
//! differences and return date-typed bounds.
//!
//! # Degenerate inputs
//!
//! An empty dataset, an empty field list, or a dataset with no finite
//! values yields `None` rather than a panic or a NaN-poisoned domain.
//! Callers that need to distinguish "no domain" from a real one get that
//! from the type; nothing in this module throws.
//!
//! # Examples
//!
//! ```rust
//! use spenn::{Extent, Field, FieldLookup};
//!
//! struct Candle {
//!     high: f64,
//!     low: f64,
//! }
//!
//! impl FieldLookup<f64> for Candle {
//!     fn field(&self, name: &str) -> Option<f64> {
//!         match name {
//!             "high" => Some(self.high),
//!             "low" => Some(self.low),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let data = vec![
//!     Candle { high: 6.0, low: -4.0 },
//!     Candle { high: 7.0, low: -3.0 },
//!     Candle { high: 15.0, low: 5.0 },
//! ];
//!
//! // Raw extent across both fields.
//! let extent: Extent<Candle, f64> =
//!     Extent::new().fields([Field::named("high"), Field::named("low")]);
//! assert_eq!(extent.compute(&data), Some((-4.0, 15.0)));
//!
//! // Padded by 10% of the range, split evenly between the sides.
//! let padded: Extent<Candle, f64> = Extent::new().field(Field::named("high")).pad(0.1);
//! let (min, max) = padded.compute(&data).unwrap();
//! assert!((min - 5.55).abs() < 1e-12);
//! assert!((max - 15.45).abs() < 1e-12);
//! ```

pub mod field;
pub mod util;

pub use field::{Field, FieldLookup};

use crate::value::DomainValue;
use num_traits::{Float, Zero};

/// Padding applied to a computed range, as fractions of that range.
///
/// Fractions may be negative (contracting the range) or exceed 1; no
/// clamping is performed, so a strongly negative fraction can produce an
/// inverted domain and it is passed through as computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding<R> {
    /// Total range change of `fraction * range`, split evenly: each side
    /// moves by `fraction * range / 2`.
    Uniform(R),
    /// Independent `(low, high)` fractions, each applied to its own side:
    /// `min - low * range` and `max + high * range`.
    PerSide(R, R),
}

impl<R: Float> Padding<R> {
    pub(crate) fn apply(self, min: R, max: R) -> (R, R) {
        match self {
            Self::Uniform(fraction) => {
                let delta = util::half_delta(fraction, max - min);
                (min - delta, max + delta)
            }
            Self::PerSide(low, high) => {
                let range = max - min;
                (min - low * range, max + high * range)
            }
        }
    }
}

/// Computes a padded, optionally symmetric, optionally inclusive domain
/// from one or more datasets and a set of field accessors.
///
/// The configuration is built fluently and is immutable once built; the
/// compute operations borrow the data read-only and hold no state across
/// invocations, so a configured `Extent` can be reused freely.
///
/// # Type Parameters
///
/// - `T`: Record type of the datasets.
/// - `V`: Value type the fields produce (numeric or temporal, see
///   [`DomainValue`]).
///
/// # Examples
///
/// ## Symmetry, padding and inclusion combined
///
/// Symmetry is applied before padding, and padding before inclusion:
///
/// ```rust
/// use spenn::{Extent, Field, FieldLookup};
///
/// struct Reading {
///     high: f64,
/// }
///
/// impl FieldLookup<f64> for Reading {
///     fn field(&self, name: &str) -> Option<f64> {
///         (name == "high").then_some(self.high)
///     }
/// }
///
/// let data = vec![Reading { high: 13.0 }, Reading { high: 18.0 }];
///
/// let extent: Extent<Reading, f64> = Extent::new()
///     .field(Field::named("high"))
///     .symmetrical_about(17.0) // [13, 18] -> [13, 21]
///     .pad(1.0)                // -> [9, 25]
///     .include(5.0);           // -> [5, 25]
/// assert_eq!(extent.compute(&data), Some((5.0, 25.0)));
/// ```
///
/// ## Grouped datasets
///
/// ```rust
/// use spenn::{Extent, Field};
/// use std::collections::HashMap;
///
/// let series_a: Vec<HashMap<String, f64>> =
///     vec![HashMap::from([("y".to_string(), 6.0)])];
/// let series_b: Vec<HashMap<String, f64>> =
///     vec![HashMap::from([("y".to_string(), 10.0)])];
///
/// let extent = Extent::new().field(Field::named("y"));
/// let domain = extent.compute_grouped([series_a.as_slice(), series_b.as_slice()]);
/// assert_eq!(domain, Some((6.0, 10.0)));
/// ```
pub struct Extent<T, V>
where
    V: DomainValue,
{
    fields: Vec<Field<T, V>>,
    padding: Padding<V::Repr>,
    symmetrical_about: Option<V>,
    include: Option<V>,
}

impl<T, V: DomainValue> Default for Extent<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V: DomainValue> Extent<T, V> {
    /// Creates a configuration with no fields, no padding, no symmetry
    /// anchor and no inclusion point.
    ///
    /// At least one field must be added before [`Extent::compute`] can
    /// produce a domain.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            padding: Padding::Uniform(V::Repr::zero()),
            symmetrical_about: None,
            include: None,
        }
    }

    /// Replaces the field list. Named keys and accessor functions may be
    /// mixed in the same list.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field<T, V>>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Appends a single field.
    pub fn field(mut self, field: Field<T, V>) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets scalar padding: the total range grows (or, for a negative
    /// fraction, shrinks) by `fraction * range`, split evenly between the
    /// two sides. A fraction of zero is the identity.
    pub fn pad(mut self, fraction: V::Repr) -> Self {
        self.padding = Padding::Uniform(fraction);
        self
    }

    /// Sets per-side padding: `low * range` is subtracted from the minimum
    /// and `high * range` added to the maximum, independently.
    pub fn pad_each(mut self, low: V::Repr, high: V::Repr) -> Self {
        self.padding = Padding::PerSide(low, high);
        self
    }

    /// Forces the domain to be symmetric about `anchor`, using the larger
    /// of the two raw half-distances. Applied before padding, so padding
    /// fractions are computed from the symmetrized range.
    pub fn symmetrical_about(mut self, anchor: V) -> Self {
        self.symmetrical_about = Some(anchor);
        self
    }

    /// Guarantees that `point` lies within the final domain. Applied
    /// strictly after padding: a point outside the padded domain replaces
    /// the bound it violates, a point inside leaves the domain unchanged.
    pub fn include(mut self, point: V) -> Self {
        self.include = Some(point);
        self
    }
}

impl<T: FieldLookup<V>, V: DomainValue> Extent<T, V> {
    /// Computes the domain of a single dataset.
    ///
    /// Returns `None` for an empty dataset, an empty field list, or data
    /// with no finite values.
    pub fn compute(&self, data: &[T]) -> Option<(V, V)> {
        self.compute_grouped(std::iter::once(data))
    }

    /// Computes the domain across several datasets at once, e.g. all series
    /// sharing one axis.
    pub fn compute_grouped<'a, G>(&self, groups: G) -> Option<(V, V)>
    where
        T: 'a,
        G: IntoIterator<Item = &'a [T]>,
    {
        // Resolve named keys into accessors up front so the scan below
        // works through a uniform callable list.
        let accessors: Vec<_> = self.fields.iter().map(Field::resolve).collect();
        if accessors.is_empty() {
            return None;
        }

        let mut raw = None;
        for group in groups {
            for record in group {
                for accessor in &accessors {
                    if let Some(value) = accessor(record) {
                        raw = util::fold_extent(raw, value.to_repr());
                    }
                }
            }
        }
        let (raw_min, raw_max) = raw?;

        let (min, max) = match self.symmetrical_about {
            Some(anchor) => {
                let anchor = anchor.to_repr();
                let half = (raw_max - anchor).abs().max((raw_min - anchor).abs());
                (anchor - half, anchor + half)
            }
            None => (raw_min, raw_max),
        };

        let (mut min, mut max) = self.padding.apply(min, max);

        if let Some(point) = self.include {
            let point = point.to_repr();
            if point < min {
                min = point;
            } else if point > max {
                max = point;
            }
        }

        Some((V::from_repr(min)?, V::from_repr(max)?))
    }
}
