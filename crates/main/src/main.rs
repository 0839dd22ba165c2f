use std::path::PathBuf;

use tracing::Level;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt as _};

mod console_notifier;
mod subcommand;

#[derive(clap::Parser)]
struct Args {
    /// Directory that holds the cart snapshots
    #[arg(env = "CART_DATA_DIR", default_value = ".", global = true, long)]
    data_dir: PathBuf,
    /// Name of the cart snapshot
    #[arg(env = "CART_STORAGE_KEY", default_value = "cart", global = true, long)]
    storage_key: String,
    /// Base URL of the stock service
    #[arg(
        env = "STOCK_API_URL",
        default_value = "http://localhost:3333",
        global = true,
        long
    )]
    stock_api_url: String,
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Add one unit of a product
    Add { product_id: u64 },
    /// Remove a product
    Remove { product_id: u64 },
    /// Print the cart
    Show,
    /// Set the amount of a product
    Update {
        product_id: u64,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            Targets::new()
                .with_target("cart", Level::INFO)
                .with_target("cart_store", Level::WARN)
                .with_target("command_use_case", Level::INFO)
                .with_target("file_system_store", Level::WARN)
                .with_target("stock_client", Level::INFO),
        )
        .init();
    let args = <Args as clap::Parser>::parse();
    let config = subcommand::Config {
        data_dir: args.data_dir,
        stock_api_url: args.stock_api_url,
        storage_key: args.storage_key,
    };
    match args.subcommand {
        Subcommand::Add { product_id } => subcommand::add::run(config, product_id).await,
        Subcommand::Remove { product_id } => subcommand::remove::run(config, product_id).await,
        Subcommand::Show => subcommand::show::run(config).await,
        Subcommand::Update { amount, product_id } => {
            subcommand::update::run(config, product_id, amount).await
        }
    }
}
