//! Rounding conventions for currency and chart percentages

/// Round to the nearest integer with halves going up (`floor(x + 0.5)`)
///
/// `f64::round` sends -2.5 to -3; this sends it to -2.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `part / whole` as a rounded integer percentage
pub fn percentage_of(part: f64, whole: f64) -> i64 {
    round_half_up((part / whole) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4999), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(561_694.5), 561_695);
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(1.0, 1.0), 100);
        assert_eq!(percentage_of(64_047.0, 1_161_695.0), 6);
        assert_eq!(percentage_of(1.0, 3.0), 33);
        assert_eq!(percentage_of(2.0, 3.0), 67);
    }
}
