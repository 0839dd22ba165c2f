use super::ProductId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("requested amount {requested} exceeds available stock {available} (product id = {product_id})")]
pub struct Error {
    pub available: u32,
    pub product_id: ProductId,
    pub requested: u64,
}

/// Available quantity of a product, as reported by the stock service.
///
/// Fetched for a single operation and never cached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stock {
    amount: u32,
    product_id: ProductId,
}

impl Stock {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { amount, product_id }
    }

    /// `requested` may exceed the range of [`super::Amount`].
    pub fn ensure_available(&self, requested: impl Into<u64>) -> Result<(), Error> {
        let requested = requested.into();
        if requested > u64::from(self.amount) {
            return Err(Error {
                available: self.amount,
                product_id: self.product_id,
                requested,
            });
        }
        Ok(())
    }
}
