use std::sync::Arc;

use command_use_case::port::{CartRepository, StockService};
use query_use_case::port::CartReader;

/// Wires the persistence and stock service adapters into the use cases.
#[derive(Clone)]
pub struct App {
    cart_reader: Arc<dyn CartReader + Send + Sync>,
    cart_repository: Arc<dyn CartRepository + Send + Sync>,
    stock_service: Arc<dyn StockService + Send + Sync>,
}

impl App {
    pub fn new(
        cart_reader: Arc<dyn CartReader + Send + Sync>,
        cart_repository: Arc<dyn CartRepository + Send + Sync>,
        stock_service: Arc<dyn StockService + Send + Sync>,
    ) -> Self {
        Self {
            cart_reader,
            cart_repository,
            stock_service,
        }
    }
}

impl command_use_case::port::HasCartRepository for App {
    fn cart_repository(&self) -> Arc<dyn CartRepository + Send + Sync> {
        self.cart_repository.clone()
    }
}

impl command_use_case::port::HasStockService for App {
    fn stock_service(&self) -> Arc<dyn StockService + Send + Sync> {
        self.stock_service.clone()
    }
}

impl query_use_case::port::HasCartReader for App {
    fn cart_reader(&self) -> Arc<dyn CartReader + Send + Sync> {
        self.cart_reader.clone()
    }
}

impl command_use_case::add_product::AddProduct for App {}

impl command_use_case::add_product::HasAddProduct for App {
    fn add_product(&self) -> Arc<dyn command_use_case::add_product::AddProduct + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::remove_product::RemoveProduct for App {}

impl command_use_case::remove_product::HasRemoveProduct for App {
    fn remove_product(
        &self,
    ) -> Arc<dyn command_use_case::remove_product::RemoveProduct + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::update_product_amount::UpdateProductAmount for App {}

impl command_use_case::update_product_amount::HasUpdateProductAmount for App {
    fn update_product_amount(
        &self,
    ) -> Arc<dyn command_use_case::update_product_amount::UpdateProductAmount + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl query_use_case::get_cart::GetCart for App {}

impl query_use_case::get_cart::HasGetCart for App {
    fn get_cart(&self) -> Arc<dyn query_use_case::get_cart::GetCart + Send + Sync> {
        Arc::new(self.clone())
    }
}
