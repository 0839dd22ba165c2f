use std::{collections::BTreeMap, sync::Arc};

use domain::value_object::{Product, ProductId, Stock};
use tokio::sync::Mutex;

/// Product catalog and stock levels held in memory.
#[derive(Clone)]
pub struct InMemoryStockService {
    products: Arc<Mutex<BTreeMap<ProductId, Product>>>,
    stocks: Arc<Mutex<BTreeMap<ProductId, u32>>>,
}

impl InMemoryStockService {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            products: Arc::new(Mutex::new(BTreeMap::new())),
            stocks: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    pub async fn insert(&self, product: Product, stock: u32) {
        let mut products = self.products.lock().await;
        let mut stocks = self.stocks.lock().await;
        stocks.insert(product.id, stock);
        products.insert(product.id, product);
    }

    pub async fn set_stock(&self, product_id: ProductId, stock: u32) {
        let mut stocks = self.stocks.lock().await;
        stocks.insert(product_id, stock);
    }
}

#[async_trait::async_trait]
impl command_use_case::port::StockService for InMemoryStockService {
    async fn find_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<Product>, command_use_case::port::stock_service::Error> {
        let products = self.products.lock().await;
        Ok(products.get(&product_id).cloned())
    }

    async fn find_stock(
        &self,
        product_id: ProductId,
    ) -> Result<Option<Stock>, command_use_case::port::stock_service::Error> {
        let stocks = self.stocks.lock().await;
        Ok(stocks
            .get(&product_id)
            .map(|amount| Stock::new(product_id, *amount)))
    }
}
