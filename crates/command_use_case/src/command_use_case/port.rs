pub mod cart_repository;
pub mod stock_service;

#[cfg(any(test, feature = "test-util"))]
pub use self::cart_repository::MockCartRepository;
pub use self::cart_repository::{CartRepository, HasCartRepository};
#[cfg(any(test, feature = "test-util"))]
pub use self::stock_service::MockStockService;
pub use self::stock_service::{HasStockService, StockService};
