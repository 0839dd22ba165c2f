use std::sync::Arc;

use domain::aggregate::Cart;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait CartReader {
    async fn get(&self) -> Result<Cart, Error>;
}

pub trait HasCartReader {
    fn cart_reader(&self) -> Arc<dyn CartReader + Send + Sync>;
}
