mod stock_client;

pub use self::stock_client::*;
