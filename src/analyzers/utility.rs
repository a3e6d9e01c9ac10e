/// Rounds a grade-point value to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders a grade-point value with exactly two decimal places.
pub fn format_points(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(50.0 / 6.0), 8.33);
        assert_eq!(round2(44.0 / 6.0), 7.33);
        assert_eq!(round2(14.0 / 2.0), 7.0);
        assert_eq!(round2(9.0), 9.0);
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(9.0), "9.00");
        assert_eq!(format_points(8.33), "8.33");
        assert_eq!(format_points(7.5), "7.50");
    }
}
