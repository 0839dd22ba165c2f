#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("amount out of range")]
    OutOfRange,
    #[error("amount must be positive")]
    NotPositive,
}

/// Quantity of a line item. Always >= 1.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Amount(u32);

impl Amount {
    pub fn one() -> Self {
        Self(1)
    }

    pub fn next(&self) -> Result<Self, Error> {
        self.0.checked_add(1).map(Self).ok_or(Error::OutOfRange)
    }
}

impl TryFrom<u32> for Amount {
    type Error = Error;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        if n == 0 {
            return Err(Error::NotPositive);
        }
        Ok(Self(n))
    }
}

impl TryFrom<i64> for Amount {
    type Error = Error;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n <= 0 {
            return Err(Error::NotPositive);
        }
        u32::try_from(n)
            .map(Self)
            .map_err(|_| Error::OutOfRange)
    }
}

impl From<Amount> for u32 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        u64::from(amount.0)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
