pub mod amount;
pub mod price;
pub mod product;
pub mod product_id;
pub mod stock;
pub mod version;

pub use self::amount::Amount;
pub use self::price::Price;
pub use self::product::Product;
pub use self::product_id::ProductId;
pub use self::stock::Stock;
pub use self::version::Version;
