use std::sync::Arc;

use domain::{aggregate::Cart, value_object::Version};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait CartRepository {
    /// Returns the current cart. An empty cart when nothing has been stored yet.
    async fn find(&self) -> Result<Cart, Error>;
    /// Replaces the stored cart. Fails when the stored version is no longer `current`.
    async fn store(&self, current: Version, cart: &Cart) -> Result<(), Error>;
}

pub trait HasCartRepository {
    fn cart_repository(&self) -> Arc<dyn CartRepository + Send + Sync>;
}
