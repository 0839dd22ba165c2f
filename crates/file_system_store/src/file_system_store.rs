mod file_system_cart_store;

pub use self::file_system_cart_store::*;
