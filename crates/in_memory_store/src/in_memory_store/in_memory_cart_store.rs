use std::sync::Arc;

use domain::{aggregate::Cart, value_object::Version};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct InMemoryCartStore {
    data: Arc<Mutex<Cart>>,
}

impl InMemoryCartStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(Cart::new())),
        }
    }
}

#[async_trait::async_trait]
impl query_use_case::port::CartReader for InMemoryCartStore {
    async fn get(&self) -> Result<Cart, query_use_case::port::cart_reader::Error> {
        let data = self.data.lock().await;
        Ok(data.clone())
    }
}

#[async_trait::async_trait]
impl command_use_case::port::CartRepository for InMemoryCartStore {
    async fn find(&self) -> Result<Cart, command_use_case::port::cart_repository::Error> {
        let data = self.data.lock().await;
        Ok(data.clone())
    }

    async fn store(
        &self,
        current: Version,
        cart: &Cart,
    ) -> Result<(), command_use_case::port::cart_repository::Error> {
        let mut data = self.data.lock().await;
        if data.version() != current {
            return Err(command_use_case::port::cart_repository::Error::from(
                Box::<dyn std::error::Error + Send + Sync>::from(format!(
                    "version conflict (current = {}, stored = {})",
                    current,
                    data.version()
                )),
            ));
        }
        *data = cart.clone();
        Ok(())
    }
}
