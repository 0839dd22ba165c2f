use std::sync::Arc;

use domain::value_object::{Product, ProductId, Stock};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait StockService {
    async fn find_product(&self, product_id: ProductId) -> Result<Option<Product>, Error>;
    async fn find_stock(&self, product_id: ProductId) -> Result<Option<Stock>, Error>;
}

pub trait HasStockService {
    fn stock_service(&self) -> Arc<dyn StockService + Send + Sync>;
}
