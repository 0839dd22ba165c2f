//! Stock service over HTTP.
//!
//! - `GET {base_url}/stock/{id}` -> `{ "id": 1, "amount": 3 }`
//! - `GET {base_url}/products/{id}` -> `{ "id": 1, "title": "...", "price": 179.9, "image": "..." }`
//!
//! `404 Not Found` means the product is unknown.

use domain::value_object::{Price, Product, ProductId, Stock};
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("client build")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request (url = {1})")]
    Request(#[source] reqwest::Error, String),
    #[error("response body (url = {1})")]
    ResponseBody(#[source] reqwest::Error, String),
    #[error("unexpected status (url = {url}, status = {status})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, serde::Deserialize)]
struct StockJson {
    amount: u32,
}

#[derive(Debug, serde::Deserialize)]
struct ProductJson {
    image: String,
    price: Decimal,
    title: String,
}

#[derive(Clone)]
pub struct HttpStockService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStockService {
    pub fn new(base_url: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    pub async fn get_product(&self, product_id: ProductId) -> Result<Option<Product>, Error> {
        Ok(self
            .get_json::<ProductJson>(&format!("products/{}", product_id))
            .await?
            .map(
                |ProductJson {
                     image,
                     price,
                     title,
                 }| Product {
                    id: product_id,
                    image,
                    price: Price::from(price),
                    title,
                },
            ))
    }

    pub async fn get_stock(&self, product_id: ProductId) -> Result<Option<Stock>, Error> {
        Ok(self
            .get_json::<StockJson>(&format!("stock/{}", product_id))
            .await?
            .map(|StockJson { amount }| Stock::new(product_id, amount)))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, Error> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Request(e, url.clone()))?;
        match response.status() {
            reqwest::StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(
                response
                    .json::<T>()
                    .await
                    .map_err(|e| Error::ResponseBody(e, url))?,
            )),
            status => Err(Error::Status { status, url }),
        }
    }
}

#[async_trait::async_trait]
impl command_use_case::port::StockService for HttpStockService {
    async fn find_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<Product>, command_use_case::port::stock_service::Error> {
        self.get_product(product_id)
            .await
            .map_err(|e| {
                command_use_case::port::stock_service::Error::from(Box::<
                    dyn std::error::Error + Send + Sync,
                >::from(e))
            })
    }

    async fn find_stock(
        &self,
        product_id: ProductId,
    ) -> Result<Option<Stock>, command_use_case::port::stock_service::Error> {
        self.get_stock(product_id)
            .await
            .map_err(|e| {
                command_use_case::port::stock_service::Error::from(Box::<
                    dyn std::error::Error + Send + Sync,
                >::from(e))
            })
    }
}
