use super::{build_cart_store, print_cart, Config};

/// Amounts of zero or less leave the cart untouched.
pub async fn run(config: Config, product_id: u64, amount: i64) -> anyhow::Result<()> {
    let store = build_cart_store(config)?;
    store.update_product_amount(product_id, amount).await;
    print_cart(&store).await
}
