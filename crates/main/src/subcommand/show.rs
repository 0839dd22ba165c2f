use super::{build_cart_store, print_cart, Config};

pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = build_cart_store(config)?;
    print_cart(&store).await
}
