mod in_memory_cart_store;
mod in_memory_stock_service;

pub use self::in_memory_cart_store::*;
pub use self::in_memory_stock_service::*;
