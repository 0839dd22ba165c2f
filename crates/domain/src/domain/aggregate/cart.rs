pub mod line_item;

use std::collections::BTreeSet;

use crate::value_object::{amount, Amount, Price, ProductId, Version};

pub use self::line_item::LineItem;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("amount overflow (product id = {0})")]
    AmountOverflow(ProductId, #[source] amount::Error),
    #[error("duplicate line item (product id = {0})")]
    DuplicateLineItem(ProductId),
    #[error("line item not found (product id = {0})")]
    LineItemNotFound(ProductId),
    #[error("version overflow")]
    VersionOverflow,
}

/// Ordered line items, unique by product id.
///
/// Every mutation returns a new state with the next version and leaves `self`
/// untouched, so a rejected mutation never leaves a partial change behind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cart {
    line_items: Vec<LineItem>,
    version: Version,
}

impl Cart {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            line_items: Vec::new(),
            version: Version::initial(),
        }
    }

    pub fn reconstruct(line_items: Vec<LineItem>, version: Version) -> Result<Self, Error> {
        let mut seen = BTreeSet::new();
        for line_item in &line_items {
            if !seen.insert(line_item.product_id()) {
                return Err(Error::DuplicateLineItem(line_item.product_id()));
            }
        }
        Ok(Self {
            line_items,
            version,
        })
    }

    pub fn find(&self, product_id: ProductId) -> Option<&LineItem> {
        self.line_items
            .iter()
            .find(|line_item| line_item.product_id() == product_id)
    }

    pub fn insert(&self, line_item: LineItem) -> Result<Self, Error> {
        if self.find(line_item.product_id()).is_some() {
            return Err(Error::DuplicateLineItem(line_item.product_id()));
        }
        let mut line_items = self.line_items.clone();
        line_items.push(line_item);
        Ok(Self {
            line_items,
            version: self.next_version()?,
        })
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// The amount the line item would have after adding one more unit.
    pub fn next_amount(&self, product_id: ProductId) -> Result<Amount, Error> {
        match self.find(product_id) {
            None => Ok(Amount::one()),
            Some(line_item) => line_item
                .amount()
                .next()
                .map_err(|e| Error::AmountOverflow(product_id, e)),
        }
    }

    pub fn remove(&self, product_id: ProductId) -> Result<Self, Error> {
        let line_items = self
            .line_items
            .iter()
            .filter(|line_item| line_item.product_id() != product_id)
            .cloned()
            .collect::<Vec<LineItem>>();
        if line_items.len() == self.line_items.len() {
            return Err(Error::LineItemNotFound(product_id));
        }
        Ok(Self {
            line_items,
            version: self.next_version()?,
        })
    }

    pub fn total(&self) -> Price {
        self.line_items.iter().map(LineItem::subtotal).sum()
    }

    /// Replaces the amount of the matching line item.
    ///
    /// An unknown product id leaves the line items as they are.
    pub fn update_amount(&self, product_id: ProductId, amount: Amount) -> Result<Self, Error> {
        let line_items = self
            .line_items
            .iter()
            .map(|line_item| {
                if line_item.product_id() == product_id {
                    line_item.with_amount(amount)
                } else {
                    line_item.clone()
                }
            })
            .collect::<Vec<LineItem>>();
        Ok(Self {
            line_items,
            version: self.next_version()?,
        })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    fn next_version(&self) -> Result<Version, Error> {
        self.version.next().map_err(|_| Error::VersionOverflow)
    }
}
