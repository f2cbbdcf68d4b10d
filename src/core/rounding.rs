/// Rounds a monetary amount to the nearest whole currency unit, halves
/// toward positive infinity.
pub fn round_currency(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds a percentage to one decimal place.
pub fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_halves_round_up() {
        assert_eq!(round_currency(1121.5), 1122);
        assert_eq!(round_currency(13_458.8), 13_459);
        assert_eq!(round_currency(-2.5), -2);
        assert_eq!(round_currency(-2.6), -3);
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(round_percent(11.215), 11.2);
        assert_eq!(round_percent(93.26), 93.3);
        assert_eq!(round_percent(0.0), 0.0);
    }
}
