pub mod get_cart;
pub mod port;
