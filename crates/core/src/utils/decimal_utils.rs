use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Returns `part / whole * 100`, or zero when `whole` is not positive.
///
/// A quotient beyond the `Decimal` range saturates at `Decimal::MAX`
/// (or `Decimal::MIN` for a negative part).
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(if part < Decimal::ZERO {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_zero_whole_is_zero() {
        assert_eq!(percent_of(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(dec!(10), dec!(-5)), Decimal::ZERO);
    }

    #[test]
    fn percent_of_uses_hundred_scale() {
        assert_eq!(percent_of(dec!(25), dec!(200)), dec!(12.5));
    }

    #[test]
    fn percent_of_saturates_instead_of_overflowing() {
        let tiny = Decimal::new(1, 28);
        let huge = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        assert_eq!(percent_of(huge, tiny), Decimal::MAX);
        assert_eq!(percent_of(-huge, tiny), Decimal::MIN);
    }
}
