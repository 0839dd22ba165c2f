use std::sync::Arc;

use domain::{aggregate::LineItem, value_object::ProductId};

#[cfg(any(test, feature = "test-util"))]
use crate::command_use_case::port::{CartRepository, StockService};
use crate::port::{HasCartRepository, HasStockService};

#[derive(Debug)]
pub struct Input {
    pub product_id: u64,
}

#[derive(Debug)]
pub struct Output;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cart find")]
    CartFind(#[source] crate::command_use_case::port::cart_repository::Error),
    #[error("cart store")]
    CartStore(#[source] crate::command_use_case::port::cart_repository::Error),
    #[error("cart update")]
    CartUpdate(#[source] domain::aggregate::cart::Error),
    #[error("product find")]
    ProductFind(#[source] crate::command_use_case::port::stock_service::Error),
    #[error("product not found (id = {0})")]
    ProductNotFound(ProductId),
    #[error("stock exceeded")]
    StockExceeded(#[source] domain::value_object::stock::Error),
    #[error("stock find")]
    StockFind(#[source] crate::command_use_case::port::stock_service::Error),
    #[error("stock not found (product id = {0})")]
    StockNotFound(ProductId),
}

#[async_trait::async_trait]
pub trait AddProduct: HasCartRepository + HasStockService {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, Input { product_id }: Input) -> Result<Output, Error> {
        let cart_repository = self.cart_repository();
        let stock_service = self.stock_service();
        let product_id = ProductId::from(product_id);
        let cart = cart_repository.find().await.map_err(Error::CartFind)?;
        let stock = stock_service
            .find_stock(product_id)
            .await
            .map_err(Error::StockFind)?
            .ok_or(Error::StockNotFound(product_id))?;
        let amount = cart.next_amount(product_id).map_err(Error::CartUpdate)?;
        stock
            .ensure_available(amount)
            .map_err(Error::StockExceeded)?;
        let updated = match cart.find(product_id) {
            Some(_) => cart.update_amount(product_id, amount),
            None => {
                let product = stock_service
                    .find_product(product_id)
                    .await
                    .map_err(Error::ProductFind)?
                    .ok_or(Error::ProductNotFound(product_id))?;
                cart.insert(LineItem::new(product, amount))
            }
        }
        .map_err(Error::CartUpdate)?;
        cart_repository
            .store(cart.version(), &updated)
            .await
            .map_err(Error::CartStore)?;
        Ok(Output)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub AddProduct {}

    impl HasCartRepository for AddProduct {
        fn cart_repository(&self) -> Arc<dyn CartRepository + Send + Sync>;
    }

    impl HasStockService for AddProduct {
        fn stock_service(&self) -> Arc<dyn StockService + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl AddProduct for AddProduct {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasAddProduct {
    fn add_product(&self) -> Arc<dyn AddProduct + Send + Sync>;
}
