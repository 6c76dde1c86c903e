//! Spenn: data-space primitives for chart interaction
//!
//! `spenn` implements the two transformations nearly every interactive
//! chart depends on but no renderer should own: deriving a `[min, max]`
//! domain from raw datasets (extent computation), and mapping a pointer
//! position back to the nearest data point (snapping). Both are pure,
//! synchronous functions over read-only data; rendering, DOM handling and
//! input plumbing live in the collaborators that call them.
//!
//! # Core Concepts
//!
//! ## Extents
//!
//! An [`Extent`] is configured with field accessors ([`Field`]), padding,
//! an optional symmetry anchor and an optional inclusion point, then
//! computes the domain a positional scale should cover. Fields are either
//! named property keys (resolved through [`FieldLookup`]) or accessor
//! functions, freely mixed.
//!
//! ## Snapping
//!
//! A snapper maps a pixel position to the nearest datum under a
//! configurable distance metric, returning the datum together with its
//! exact pixel projection; see [`PointSnap`], [`SeriesSnap`] and the
//! disabled-state [`NoSnap`], unified by the [`Snap`] trait.
//!
//! ## Domain values
//!
//! Extent arithmetic runs on a linear floating-point representation so the
//! same pipeline covers numbers and timestamps; [`DomainValue`] defines
//! that linearization, with temporal values mapped to epoch milliseconds.
//!
//! # Examples
//!
//! ## Computing a padded extent
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
//!     Candle { high: 15.0, low: 5.0 },
//! ];
//!
//! let extent: Extent<Candle, f64> = Extent::new()
//!     .fields([Field::named("high"), Field::named("low")])
//!     .pad(0.1);
//!
//! let (min, max) = extent.compute(&data).unwrap();
//! assert!((min + 4.95).abs() < 1e-12);
//! assert!((max - 15.95).abs() < 1e-12);
//! ```
//!
//! ## Snapping a pointer to the nearest datum
//!
//! ```rust
//! use spenn::{PointSnap, ScreenPoint, Snap};
//!
//! let data = vec![(0.0_f64, 0.0_f64), (1.0, 10.0), (2.0, 5.0)];
//! let snap = PointSnap::new(
//!     |x: &f64| x * 100.0,
//!     |y: &f64| 400.0 - y * 10.0,
//!     |d: &(f64, f64)| d.0,
//!     |d: &(f64, f64)| d.1,
//!     &data,
//! );
//!
//! let result = snap.snap(ScreenPoint::new(95.0, 310.0));
//! assert_eq!(result.datum, Some(&(1.0, 10.0)));
//! assert_eq!((result.point.x, result.point.y), (100.0, 300.0));
//! ```
//!
//! ## Temporal extents
//!
//! ```rust
//! use chrono::{DateTime, TimeZone, Utc};
//! use spenn::{Extent, Field};
//! use std::collections::HashMap;
//!
//! let day = |d: u32| Utc.with_ymd_and_hms(2014, 1, d, 0, 0, 0).unwrap();
//! let data: Vec<HashMap<String, DateTime<Utc>>> = vec![
//!     HashMap::from([("date".to_string(), day(10))]),
//!     HashMap::from([("date".to_string(), day(20))]),
//! ];
//!
//! // Fractional padding of a 10-day range adds 5 days to each side.
//! let extent = Extent::new().field(Field::named("date")).pad(1.0);
//! assert_eq!(extent.compute(&data), Some((day(5), day(25))));
//! ```
//!
//! # Degenerate inputs
//!
//! Nothing here panics on ordinary empty-data conditions: extents and
//! summaries return `None`, snapping returns a datum-less result echoing
//! the pointer. See the module docs for the exact contracts.

pub mod extent;
pub mod snap;
pub mod summary;
pub mod value;

pub use extent::{Extent, Field, FieldLookup, Padding};
pub use num_traits::Float;
pub use snap::{NoSnap, PointSnap, ScreenPoint, SeriesSnap, Snap, SnapResult, SnapSource};
pub use summary::{ohlc_markers, Marker, MarkerRole};
pub use value::DomainValue;
