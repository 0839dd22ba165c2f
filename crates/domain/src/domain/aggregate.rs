pub mod cart;

pub use self::cart::{Cart, LineItem};
