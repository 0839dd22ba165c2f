use crate::value_object::{Amount, Price, Product, ProductId};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineItem {
    amount: Amount,
    product: Product,
}

impl LineItem {
    pub fn new(product: Product, amount: Amount) -> Self {
        Self { amount, product }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.amount)
    }

    pub(super) fn with_amount(&self, amount: Amount) -> Self {
        Self {
            amount,
            product: self.product.clone(),
        }
    }
}
