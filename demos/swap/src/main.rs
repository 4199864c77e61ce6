// demos/swap/src/main.rs

use anyhow::Result;
use jupswap::swap_flow;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Loads .env (RPC_URL, JUPITER_API_URL, SECRET_KEY or KEYPAIR_PATH, ...)
    let signature = swap_flow().await?;
    println!("Swap submitted: {signature}");

    Ok(())
}
