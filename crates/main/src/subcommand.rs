pub mod add;
pub mod remove;
pub mod show;
pub mod update;

use std::{path::PathBuf, sync::Arc};

use cart_store::{App, CartStore};
use file_system_store::FileSystemCartStore;
use query_use_case::get_cart;
use stock_client::HttpStockService;

use crate::console_notifier::ConsoleNotifier;

pub struct Config {
    pub data_dir: PathBuf,
    pub stock_api_url: String,
    pub storage_key: String,
}

fn build_cart_store(
    Config {
        data_dir,
        stock_api_url,
        storage_key,
    }: Config,
) -> anyhow::Result<CartStore<App>> {
    tracing::debug!(data_dir = %data_dir.display(), %storage_key, %stock_api_url, "build cart store");
    let cart_store = Arc::new(FileSystemCartStore::new(data_dir, storage_key));
    let stock_service = Arc::new(HttpStockService::new(stock_api_url)?);
    let app = App::new(cart_store.clone(), cart_store, stock_service);
    Ok(CartStore::new(app, Arc::new(ConsoleNotifier)))
}

async fn print_cart(store: &CartStore<App>) -> anyhow::Result<()> {
    let get_cart::Output { line_items, total } = store.cart().await?;
    for line_item in line_items {
        println!(
            "{}\t{}\t{} x {}\t{}",
            line_item.product_id,
            line_item.title,
            line_item.amount,
            line_item.price,
            line_item.subtotal
        );
    }
    println!("total\t{}", total);
    Ok(())
}
