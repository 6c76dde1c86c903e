use num_traits::Float;

/// Fold a value into a running `(min, max)` pair, skipping NaN values.
pub fn fold_extent<R: Float>(acc: Option<(R, R)>, value: R) -> Option<(R, R)> {
    if value.is_nan() {
        return acc;
    }
    match acc {
        None => Some((value, value)),
        Some((lo, hi)) => {
            let lo = if value < lo { value } else { lo };
            let hi = if value > hi { value } else { hi };
            Some((lo, hi))
        }
    }
}

/// Half of `fraction * range`: the per-side delta of scalar padding.
pub fn half_delta<R: Float>(fraction: R, range: R) -> R {
    let two = R::one() + R::one();
    fraction * range / two
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_tracks_min_and_max() {
        let acc = fold_extent(None, 3.0f64);
        let acc = fold_extent(acc, -1.0);
        let acc = fold_extent(acc, 2.0);
        assert_eq!(acc, Some((-1.0, 3.0)));
    }

    #[test]
    fn fold_skips_nan() {
        assert_eq!(fold_extent(None, f64::NAN), None);
        assert_eq!(fold_extent(Some((0.0, 1.0)), f64::NAN), Some((0.0, 1.0)));
    }

    #[test]
    fn half_delta_splits_fraction_evenly() {
        assert_eq!(half_delta(1.0f64, 10.0), 5.0);
        assert_eq!(half_delta(-0.5f64, 10.0), -2.5);
    }
}
