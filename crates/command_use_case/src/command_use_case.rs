pub mod add_product;
pub mod port;
pub mod remove_product;
pub mod update_product_amount;
