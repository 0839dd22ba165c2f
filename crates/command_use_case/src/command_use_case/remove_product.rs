use std::sync::Arc;

use domain::value_object::ProductId;

#[cfg(any(test, feature = "test-util"))]
use crate::command_use_case::port::CartRepository;
use crate::port::HasCartRepository;

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
    #[error("line item not found (product id = {0})")]
    LineItemNotFound(ProductId),
}

#[async_trait::async_trait]
pub trait RemoveProduct: HasCartRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, Input { product_id }: Input) -> Result<Output, Error> {
        let cart_repository = self.cart_repository();
        let product_id = ProductId::from(product_id);
        let cart = cart_repository.find().await.map_err(Error::CartFind)?;
        if cart.find(product_id).is_none() {
            return Err(Error::LineItemNotFound(product_id));
        }
        let updated = cart.remove(product_id).map_err(Error::CartUpdate)?;
        cart_repository
            .store(cart.version(), &updated)
            .await
            .map_err(Error::CartStore)?;
        Ok(Output)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub RemoveProduct {}

    impl HasCartRepository for RemoveProduct {
        fn cart_repository(&self) -> Arc<dyn CartRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl RemoveProduct for RemoveProduct {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasRemoveProduct {
    fn remove_product(&self) -> Arc<dyn RemoveProduct + Send + Sync>;
}
