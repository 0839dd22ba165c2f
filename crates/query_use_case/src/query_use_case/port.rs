pub mod cart_reader;

#[cfg(any(test, feature = "test-util"))]
pub use self::cart_reader::MockCartReader;
pub use self::cart_reader::{CartReader, HasCartReader};
