use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// decimal places carried by every monetary amount (cents)
pub const MONEY_DP: u32 = 2;

/// rounding applied whenever an amount is brought back to cents.
/// half away from zero, so 0.005 becomes 0.01
pub const ROUNDING_STRATEGY: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// round a raw decimal to cents under the crate rounding policy
pub fn round_money(d: Decimal) -> Decimal {
    let mut rounded = d.round_dp_with_strategy(MONEY_DP, ROUNDING_STRATEGY);
    // keep "0.00" style scale so display and serialization stay uniform
    rounded.rescale(MONEY_DP);
    rounded
}

/// Money type with cent precision.
///
/// Every constructor and every arithmetic operation rounds back to
/// [`MONEY_DP`] places, so a `Money` never carries sub-cent residue.
/// Deserialized amounts are rounded the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(from = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, MONEY_DP));
    pub const CENT: Money = Money(Decimal::from_parts(1, 0, 0, false, MONEY_DP));

    /// create from decimal, rounding to cents
    pub fn from_decimal(d: Decimal) -> Self {
        Money(round_money(d))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money::from_decimal(Decimal::from_str(s)?))
    }

    /// create from integer amount (pesos, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money::from_decimal(Decimal::from(amount))
    }

    /// create from minor amount (cents)
    pub fn from_minor(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_DP))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// amount in minor units, `None` outside the i64 cent range
    pub fn to_minor(&self) -> Option<i64> {
        self.0.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// multiply by a raw factor (e.g. a periodic rate) and round to cents
    pub fn mul_rounded(&self, factor: Decimal) -> Self {
        Money::from_decimal(self.0 * factor)
    }

    /// `None` instead of panicking past the decimal range
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money::from_decimal)
    }

    pub fn checked_mul_rounded(&self, factor: Decimal) -> Option<Money> {
        self.0.checked_mul(factor).map(Money::from_decimal)
    }

    /// divide by a raw divisor and round to cents
    pub fn div_rounded(&self, divisor: Decimal) -> Self {
        Money::from_decimal(self.0 / divisor)
    }

    /// calculate percentage (e.g., 10% of $100)
    pub fn percentage(&self, percent: Decimal) -> Self {
        Money::from_decimal(self.0 * percent / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

// sums and differences of cent amounts are already exact cents

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_decimal(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_decimal(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        *self = *self - other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12");
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(Money::from_decimal(dec!(0.005)), Money::CENT);
        assert_eq!(Money::from_decimal(dec!(2.675)).to_string(), "2.68");
        assert_eq!(Money::from_decimal(dec!(2.665)).to_string(), "2.67");
        assert_eq!(Money::from_decimal(dec!(-0.005)).to_string(), "-0.01");
        assert_eq!(Money::from_decimal(dec!(0.0049)), Money::ZERO);
    }

    #[test]
    fn test_uniform_scale() {
        assert_eq!(Money::from_major(10_000).to_string(), "10000.00");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::from_minor(12_345).to_string(), "123.45");
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Money::from_major(800_000).to_minor(), Some(80_000_000));
        assert_eq!(Money::from_minor(1), Money::CENT);
        assert_eq!(Money::from_minor(-250).to_minor(), Some(-250));
        assert_eq!(Money::from_minor(i64::MAX).to_minor(), Some(i64::MAX));

        // past i64 cents, and past the 28 digits that keep a 2-place scale
        assert_eq!(Money::from_major(100_000_000_000_000_000).to_minor(), None);
        assert_eq!(Money::from_decimal(Decimal::MAX).to_minor(), None);
    }

    #[test]
    fn test_checked_arithmetic() {
        let huge = Money::from_decimal(Decimal::MAX);
        assert_eq!(huge.checked_add(Money::from_major(1_000)), None);
        assert_eq!(huge.checked_mul_rounded(dec!(2)), None);
        assert_eq!(
            Money::CENT.checked_add(Money::CENT),
            Some(Money::from_minor(2))
        );
    }

    #[test]
    fn test_sum_and_percentage() {
        let total: Money = [Money::from_minor(1), Money::from_minor(2), Money::from_minor(3)]
            .iter()
            .sum();
        assert_eq!(total, Money::from_minor(6));

        let price = Money::from_major(1_000);
        assert_eq!(price.percentage(dec!(12.5)), Money::from_str_exact("125").unwrap());
        assert_eq!(price.mul_rounded(dec!(0.00333)), Money::from_str_exact("3.33").unwrap());
        assert_eq!(Money::from_major(100).div_rounded(dec!(3)).to_string(), "33.33");
    }

    #[test]
    fn test_deserialize_rounds_to_cents() {
        let m: Money = serde_json::from_str("\"19.999\"").unwrap();
        assert_eq!(m.to_string(), "20.00");
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"20.00\"");
    }

    #[test]
    fn test_sign_checks() {
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::from_minor(-1).is_negative());
        assert_eq!(Money::from_minor(-1).max(Money::ZERO), Money::ZERO);
    }
}
