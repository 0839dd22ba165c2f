use super::{Price, ProductId};

/// Product metadata copied into a line item when the product is first added.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub image: String,
    pub price: Price,
    pub title: String,
}
