use std::sync::Arc;

#[cfg(any(test, feature = "test-util"))]
use crate::port::CartReader;
use crate::port::HasCartReader;

#[derive(Debug)]
pub struct Input;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Output {
    pub line_items: Vec<LineItem>,
    pub total: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineItem {
    pub amount: u32,
    pub image: String,
    pub price: String,
    pub product_id: u64,
    pub subtotal: String,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cart get")]
    CartGet(#[source] crate::port::cart_reader::Error),
}

#[async_trait::async_trait]
pub trait GetCart: HasCartReader {
    #[tracing::instrument(level = tracing::Level::DEBUG, err(Debug), skip(self))]
    async fn execute(&self, _: Input) -> Result<Output, Error> {
        let cart_reader = self.cart_reader();
        let cart = cart_reader.get().await.map_err(Error::CartGet)?;
        Ok(Output {
            line_items: cart
                .line_items()
                .iter()
                .map(|line_item| LineItem {
                    amount: u32::from(line_item.amount()),
                    image: line_item.product().image.clone(),
                    price: line_item.product().price.to_string(),
                    product_id: u64::from(line_item.product_id()),
                    subtotal: line_item.subtotal().to_string(),
                    title: line_item.product().title.clone(),
                })
                .collect(),
            total: cart.total().to_string(),
        })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub GetCart {}

    impl HasCartReader for GetCart {
        fn cart_reader(&self) -> Arc<dyn CartReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl GetCart for GetCart {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasGetCart {
    fn get_cart(&self) -> Arc<dyn GetCart + Send + Sync>;
}
