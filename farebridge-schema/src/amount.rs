//! Monetary unit conversion.

/// Minor units per major unit for every currency the platform sells in.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Converts an integer minor-unit amount (cents, paise) into the decimal
/// major-unit amount the provider's intent API expects.
///
/// This is the only place the division by 100 happens. Inbound contracts
/// carry minor units end-to-end; handlers must never pre-convert, otherwise
/// the charge is off by a factor of 100.
pub fn minor_to_major(minor: i64) -> f64 {
    // i64 minor-unit amounts within any realistic charge range are exactly
    // representable in f64 (|minor| < 2^53).
    minor as f64 / MINOR_UNITS_PER_MAJOR as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_major_amounts_divide_exactly() {
        assert_eq!(minor_to_major(1000), 10.0);
        assert_eq!(minor_to_major(5000), 50.0);
    }

    #[test]
    fn fractional_major_amounts_keep_two_decimals() {
        assert_eq!(minor_to_major(1234), 12.34);
        assert_eq!(minor_to_major(1), 0.01);
        assert_eq!(minor_to_major(99), 0.99);
    }

    #[test]
    fn conversion_is_applied_exactly_once() {
        // Feeding an already-converted amount back through would shrink it
        // by another factor of 100.
        let once = minor_to_major(5000);
        assert_eq!(once, 50.0);
        assert_eq!(minor_to_major(once as i64), 0.5);
    }
}
