//! Series marker summaries.
//!
//! Sparkline-style charts decorate four characteristic points of a series:
//! where it opens, where it peaks, where it bottoms out and where it
//! closes. [`ohlc_markers`] derives those points purely from a dataset and
//! two accessors, leaving the drawing to the caller.

use crate::value::DomainValue;
use num_traits::Float;

/// Role of a marker point within a series summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// The first record of the series.
    Open,
    /// The record with the highest vertical value.
    High,
    /// The record with the lowest vertical value.
    Low,
    /// The last record of the series.
    Close,
}

/// A marker point: its data-space position plus the role it plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker<VX, VY> {
    /// Horizontal value of the marked record.
    pub x: VX,
    /// Vertical value of the marked record.
    pub y: VY,
    /// Which characteristic point this marker represents.
    pub role: MarkerRole,
}

/// Derives the open/high/low/close marker points of a series.
///
/// The returned array is ordered `[Open, High, Low, Close]`. When several
/// records share the extreme vertical value, the first one in iteration
/// order is marked. Records whose vertical value linearizes to NaN are
/// ignored for the high/low search.
///
/// Returns `None` on an empty dataset, or when no record has a finite
/// vertical value.
///
/// # Examples
///
/// ```rust
/// use spenn::summary::{ohlc_markers, MarkerRole};
///
/// let data = [(0, 3.0), (1, 9.0), (2, 1.0), (3, 5.0)];
/// let markers = ohlc_markers(&data, |d: &(i32, f64)| d.0, |d: &(i32, f64)| d.1).unwrap();
///
/// assert_eq!(markers[0].role, MarkerRole::Open);
/// assert_eq!((markers[1].x, markers[1].y), (1, 9.0)); // high
/// assert_eq!((markers[2].x, markers[2].y), (2, 1.0)); // low
/// assert_eq!((markers[3].x, markers[3].y), (3, 5.0)); // close
/// ```
pub fn ohlc_markers<T, VX, VY>(
    data: &[T],
    x_value: impl Fn(&T) -> VX,
    y_value: impl Fn(&T) -> VY,
) -> Option<[Marker<VX, VY>; 4]>
where
    VX: Copy,
    VY: DomainValue,
{
    let first = data.first()?;
    let last = data.last()?;

    let mut high: Option<(usize, VY::Repr)> = None;
    let mut low: Option<(usize, VY::Repr)> = None;
    for (index, record) in data.iter().enumerate() {
        let repr = y_value(record).to_repr();
        if repr.is_nan() {
            continue;
        }
        // Strict comparisons keep the first occurrence on ties.
        if high.map_or(true, |(_, best)| repr > best) {
            high = Some((index, repr));
        }
        if low.map_or(true, |(_, best)| repr < best) {
            low = Some((index, repr));
        }
    }
    let (high_index, _) = high?;
    let (low_index, _) = low?;

    let marker = |record: &T, role| Marker {
        x: x_value(record),
        y: y_value(record),
        role,
    };

    Some([
        marker(first, MarkerRole::Open),
        marker(&data[high_index], MarkerRole::High),
        marker(&data[low_index], MarkerRole::Low),
        marker(last, MarkerRole::Close),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xs(d: &(i64, f64)) -> i64 {
        d.0
    }

    fn ys(d: &(i64, f64)) -> f64 {
        d.1
    }

    #[test]
    fn marks_first_extremes_and_last() {
        let data = [(0, 2.0), (1, 8.0), (2, -3.0), (3, 4.0)];
        let markers = ohlc_markers(&data, xs, ys).unwrap();

        assert_eq!((markers[0].x, markers[0].y), (0, 2.0));
        assert_eq!((markers[1].x, markers[1].y), (1, 8.0));
        assert_eq!((markers[2].x, markers[2].y), (2, -3.0));
        assert_eq!((markers[3].x, markers[3].y), (3, 4.0));
    }

    #[test]
    fn ties_mark_the_first_occurrence() {
        let data = [(0, 5.0), (1, 5.0), (2, 1.0), (3, 1.0)];
        let markers = ohlc_markers(&data, xs, ys).unwrap();

        assert_eq!(markers[1].x, 0);
        assert_eq!(markers[2].x, 2);
    }

    #[test]
    fn single_record_fills_all_roles() {
        let data = [(7, 3.5)];
        let markers = ohlc_markers(&data, xs, ys).unwrap();

        for marker in markers {
            assert_eq!((marker.x, marker.y), (7, 3.5));
        }
    }

    #[test]
    fn empty_data_yields_none() {
        let data: [(i64, f64); 0] = [];
        assert!(ohlc_markers(&data, xs, ys).is_none());
    }

    #[test]
    fn all_nan_vertical_values_yield_none() {
        let data = [(0, f64::NAN), (1, f64::NAN)];
        assert!(ohlc_markers(&data, xs, ys).is_none());
    }

    #[test]
    fn nan_vertical_values_are_skipped_for_extremes() {
        let data = [(0, 1.0), (1, f64::NAN), (2, 9.0)];
        let markers = ohlc_markers(&data, xs, ys).unwrap();

        assert_eq!(markers[1].x, 2);
        assert_eq!(markers[2].x, 0);
    }
}
