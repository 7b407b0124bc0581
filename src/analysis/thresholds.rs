//! Auto-derived break points for discrete color scales.

use super::precision::round_to;

/// Fractional positions of the four break points within the value span.
const THRESHOLD_POSITIONS: [f64; 4] = [0.15, 0.40, 0.55, 0.90];

/// Derive four ascending break points spanning `[min_value, max_value]`,
/// each rounded to `decimal_places` fractional digits.
///
/// Consuming charts use these to bucket values into color bands when the
/// caller supplies no explicit thresholds. With a zero-width span every break
/// point equals `min_value`; callers must tolerate a zero-width threshold
/// scale. NaN extrema produce NaN break points.
pub(crate) fn derive_thresholds(min_value: f64, max_value: f64, decimal_places: u32) -> [f64; 4] {
    let distance = max_value - min_value;
    THRESHOLD_POSITIONS.map(|position| round_to(min_value + position * distance, decimal_places))
}

#[cfg(test)]
mod tests {
    use super::derive_thresholds;

    #[test]
    fn integer_span_rounds_to_whole_numbers() {
        assert_eq!(derive_thresholds(3.0, 9.0, 0), [4.0, 5.0, 6.0, 8.0]);
        assert_eq!(derive_thresholds(0.0, 18.0, 0), [3.0, 7.0, 10.0, 16.0]);
    }

    #[test]
    fn fractional_span_keeps_requested_digits() {
        assert_eq!(derive_thresholds(0.5, 2.5, 1), [0.8, 1.3, 1.6, 2.3]);
    }

    #[test]
    fn zero_width_span_collapses_to_a_single_value() {
        assert_eq!(derive_thresholds(5.0, 5.0, 0), [5.0, 5.0, 5.0, 5.0]);
    }

    #[test]
    fn break_points_are_ordered_and_in_range() {
        let thresholds = derive_thresholds(-4.0, 13.0, 1);
        assert!(thresholds.windows(2).all(|w| w[0] <= w[1]));
        assert!(thresholds.iter().all(|t| (-4.0..=13.0).contains(t)));
    }

    #[test]
    fn nan_extrema_poison_every_break_point() {
        let thresholds = derive_thresholds(f64::NAN, 9.0, 0);
        assert!(thresholds.iter().all(|t| t.is_nan()));
    }
}
