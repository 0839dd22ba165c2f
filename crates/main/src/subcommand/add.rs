use super::{build_cart_store, print_cart, Config};

pub async fn run(config: Config, product_id: u64) -> anyhow::Result<()> {
    let store = build_cart_store(config)?;
    store.add_product(product_id).await;
    print_cart(&store).await
}
