//! Conversions between probabilities and the "1 in N" denominator notation
//! used on machine spec sheets.
//!
//! Every function here is total: out-of-domain inputs degrade to a documented
//! sentinel instead of panicking, so display code never has to pre-validate.

/// Denominator of the "1 in N" form for a probability, `f64::INFINITY` when
/// the probability carries no information (zero or negative).
pub fn probability_to_denominator(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::INFINITY;
    }
    1.0 / p
}

/// Inverse of [`probability_to_denominator`]; non-positive denominators map
/// to probability zero.
pub fn denominator_to_probability(d: f64) -> f64 {
    if d <= 0.0 {
        return 0.0;
    }
    1.0 / d
}

/// Renders a probability as a `1/N` display string, `"-"` when there is
/// nothing meaningful to show. `decimals` controls rounding of N only.
pub fn format_probability(p: f64, decimals: usize) -> String {
    if p <= 0.0 {
        return "-".to_string();
    }
    let denominator = 1.0 / p;
    format!("1/{denominator:.decimals$}")
}

/// Observed occurrence rate so far (`count / total_games`), zero while no
/// games have been recorded.
pub fn current_probability(count: u32, total_games: i64) -> f64 {
    if total_games <= 0 {
        return 0.0;
    }
    f64::from(count) / total_games as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denominator_of_half_is_two() {
        assert_eq!(probability_to_denominator(0.5), 2.0);
        assert_eq!(probability_to_denominator(0.25), 4.0);
        assert!((probability_to_denominator(0.1) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn denominator_of_non_positive_is_infinite() {
        assert_eq!(probability_to_denominator(0.0), f64::INFINITY);
        assert_eq!(probability_to_denominator(-0.5), f64::INFINITY);
    }

    #[test]
    fn probability_from_denominator() {
        assert_eq!(denominator_to_probability(2.0), 0.5);
        assert_eq!(denominator_to_probability(4.0), 0.25);
        assert!((denominator_to_probability(10.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn probability_from_non_positive_denominator_is_zero() {
        assert_eq!(denominator_to_probability(0.0), 0.0);
        assert_eq!(denominator_to_probability(-5.0), 0.0);
    }

    #[test]
    fn round_trip_preserves_probability() {
        for p in [0.003, 0.154, 0.5, 0.9, 1.0] {
            let back = denominator_to_probability(probability_to_denominator(p));
            assert!((back - p).abs() < 1e-12);
        }
    }

    #[test]
    fn formats_as_denominator_string() {
        assert_eq!(format_probability(0.5, 2), "1/2.00");
        assert_eq!(format_probability(0.1, 2), "1/10.00");
    }

    #[test]
    fn formats_dash_for_non_positive() {
        assert_eq!(format_probability(0.0, 2), "-");
        assert_eq!(format_probability(-0.5, 2), "-");
    }

    #[test]
    fn format_respects_decimal_precision() {
        assert_eq!(format_probability(1.0 / 6.49, 2), "1/6.49");
        assert_eq!(format_probability(1.0 / 6.49, 1), "1/6.5");
    }

    #[test]
    fn current_probability_divides_count_by_games() {
        assert_eq!(current_probability(50, 1000), 0.05);
        assert_eq!(current_probability(100, 500), 0.2);
    }

    #[test]
    fn current_probability_zero_without_games() {
        assert_eq!(current_probability(10, 0), 0.0);
        assert_eq!(current_probability(10, -5), 0.0);
    }
}
