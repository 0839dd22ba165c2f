use rust_decimal::Decimal;

use super::Amount;

/// Unit price of a product
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Price(Decimal);

impl Price {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn times(&self, amount: Amount) -> Self {
        Self(self.0.saturating_mul(Decimal::from(u32::from(amount))))
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, price| Self(acc.0.saturating_add(price.0)))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
