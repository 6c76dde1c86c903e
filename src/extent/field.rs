//! Field accessors: how an extent reads values out of opaque records.
//!
//! A [`Field`] is either a named property key, resolved through the
//! record's [`FieldLookup`] implementation, or an accessor function applied
//! to each record directly. Both kinds can be mixed freely in one field
//! list; the extent computation resolves the whole list into uniform
//! callables once per invocation, before the min/max scan.

use std::collections::{BTreeMap, HashMap};

/// Resolves a named property key on a record.
///
/// Records participating in named-field extents state which keys they
/// carry. Map types are supported out of the box; structs implement the
/// trait by matching on the name.
///
/// # Examples
///
/// ```rust
/// use spenn::FieldLookup;
///
/// struct Candle {
///     high: f64,
///     low: f64,
/// }
///
/// impl FieldLookup<f64> for Candle {
///     fn field(&self, name: &str) -> Option<f64> {
///         match name {
///             "high" => Some(self.high),
///             "low" => Some(self.low),
///             _ => None,
///         }
///     }
/// }
///
/// let candle = Candle { high: 15.0, low: 5.0 };
/// assert_eq!(candle.field("high"), Some(15.0));
/// assert_eq!(candle.field("volume"), None);
/// ```
pub trait FieldLookup<V> {
    /// Returns the value of the named field, or `None` when the record does
    /// not carry it.
    fn field(&self, name: &str) -> Option<V>;
}

impl<V: Copy> FieldLookup<V> for HashMap<String, V> {
    fn field(&self, name: &str) -> Option<V> {
        self.get(name).copied()
    }
}

impl<V: Copy> FieldLookup<V> for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<V> {
        self.get(name).copied()
    }
}

/// A field: a named property key or an accessor function.
///
/// # Examples
///
/// ```rust
/// use spenn::Field;
/// use std::collections::HashMap;
///
/// let by_name: Field<HashMap<String, f64>, f64> = Field::named("high");
/// let by_accessor: Field<HashMap<String, f64>, f64> =
///     Field::accessor(|record: &HashMap<String, f64>| record.values().copied().sum());
/// ```
pub enum Field<T, V> {
    /// A property key, resolved through [`FieldLookup`].
    Named(String),
    /// An accessor function evaluated against each record.
    Accessor(Box<dyn Fn(&T) -> V>),
}

impl<T, V> Field<T, V> {
    /// Creates a field from a property name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a field from an accessor function.
    pub fn accessor(accessor: impl Fn(&T) -> V + 'static) -> Self {
        Self::Accessor(Box::new(accessor))
    }
}

impl<T: FieldLookup<V>, V> Field<T, V> {
    /// Resolves the field into a uniform callable: named keys go
    /// through [`FieldLookup`], accessor functions are used as-is. A named
    /// key absent from a record yields `None` for that record.
    pub(crate) fn resolve(&self) -> Box<dyn Fn(&T) -> Option<V> + '_> {
        match self {
            Self::Named(name) => Box::new(move |record| record.field(name)),
            Self::Accessor(accessor) => Box::new(move |record| Some(accessor(record))),
        }
    }
}
