mod cart_store;

pub use self::cart_store::*;
