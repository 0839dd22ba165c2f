use std::{path::PathBuf, sync::Arc};

use domain::{
    aggregate::{Cart, LineItem},
    value_object::{Amount, Price, Product, ProductId, Version},
};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct LineItemJson {
    id: u64,
    title: String,
    price: Decimal,
    image: String,
    amount: u32,
}

impl From<&LineItem> for LineItemJson {
    fn from(line_item: &LineItem) -> Self {
        let Product {
            id,
            image,
            price,
            title,
        } = line_item.product();
        Self {
            id: u64::from(*id),
            title: title.to_owned(),
            price: Decimal::from(*price),
            image: image.to_owned(),
            amount: u32::from(line_item.amount()),
        }
    }
}

impl TryFrom<LineItemJson> for LineItem {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(
        LineItemJson {
            id,
            title,
            price,
            image,
            amount,
        }: LineItemJson,
    ) -> Result<Self, Self::Error> {
        Ok(LineItem::new(
            Product {
                id: ProductId::from(id),
                image,
                price: Price::from(price),
                title,
            },
            Amount::try_from(amount)?,
        ))
    }
}

/// Keeps the whole cart as a JSON array in `{dir}/{key}.json`.
pub struct FileSystemCartStore {
    cache: Arc<Mutex<Option<Cart>>>,
    dir: PathBuf,
    key: String,
}

impl FileSystemCartStore {
    pub fn new(dir: PathBuf, key: String) -> Self {
        Self {
            cache: Arc::new(Mutex::new(None)),
            dir,
            key,
        }
    }

    async fn find_impl(&self) -> Result<Cart, Box<dyn std::error::Error + Send + Sync>> {
        let mut cache = self.cache.lock().await;
        Ok(cache.get_or_insert_with(|| self.load()).clone())
    }

    /// Falls back to an empty cart when the snapshot is missing, unreadable or malformed.
    fn load(&self) -> Cart {
        let path_buf = self.path();
        if !path_buf.exists() {
            return Cart::new();
        }
        match std::fs::read_to_string(&path_buf)
            .map_err(Box::<dyn std::error::Error + Send + Sync>::from)
            .and_then(|s| Self::parse(&s))
        {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(path = %path_buf.display(), error = %e, "discard cart snapshot");
                Cart::new()
            }
        }
    }

    fn parse(s: &str) -> Result<Cart, Box<dyn std::error::Error + Send + Sync>> {
        let line_items = serde_json::from_str::<Vec<LineItemJson>>(s)?
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<LineItem>, _>>()?;
        Ok(Cart::reconstruct(line_items, Version::initial())?)
    }

    fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    async fn store_impl(
        &self,
        current: Version,
        cart: &Cart,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut cache = self.cache.lock().await;
        let stored = cache.get_or_insert_with(|| self.load());
        if stored.version() != current {
            return Err(format!(
                "version conflict (current = {}, stored = {})",
                current,
                stored.version()
            )
            .into());
        }
        let data = serde_json::to_string(
            &cart
                .line_items()
                .iter()
                .map(LineItemJson::from)
                .collect::<Vec<LineItemJson>>(),
        )?;
        std::fs::create_dir_all(&self.dir)?;
        let path_buf = self.path();
        let temp_path_buf = path_buf.with_extension("json.tmp");
        std::fs::write(&temp_path_buf, data)?;
        if let Err(e) = std::fs::rename(&temp_path_buf, path_buf) {
            if let Err(e) = std::fs::remove_file(&temp_path_buf) {
                tracing::warn!(path = %temp_path_buf.display(), error = %e, "remove temporary cart snapshot");
            }
            return Err(e.into());
        }
        *stored = cart.clone();
        Ok(())
    }
}

#[async_trait::async_trait]
impl command_use_case::port::CartRepository for FileSystemCartStore {
    async fn find(&self) -> Result<Cart, command_use_case::port::cart_repository::Error> {
        self.find_impl()
            .await
            .map_err(command_use_case::port::cart_repository::Error::from)
    }

    async fn store(
        &self,
        current: Version,
        cart: &Cart,
    ) -> Result<(), command_use_case::port::cart_repository::Error> {
        self.store_impl(current, cart)
            .await
            .map_err(command_use_case::port::cart_repository::Error::from)
    }
}

#[async_trait::async_trait]
impl query_use_case::port::CartReader for FileSystemCartStore {
    async fn get(&self) -> Result<Cart, query_use_case::port::cart_reader::Error> {
        self.find_impl()
            .await
            .map_err(query_use_case::port::cart_reader::Error::from)
    }
}
