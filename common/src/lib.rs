// common/src/lib.rs
//! One-shot aggregator swap: quote, build, refresh blockhash, sign, submit.

pub mod config;
pub mod error;
pub mod jupiter;
pub mod rpc;
pub mod transaction;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{keypair, load_config, Config};
pub use error::{SwapError, SwapResult};
pub use jupiter::JupiterClient;
pub use rpc::{rpc_client, ChainRpc};
pub use transaction::{assemble_transaction, sign_and_submit, AssembledTransaction, SignedTransaction};
pub use types::{PriorityFee, Quote, SwapParams, SwapResponse};

use log::info;
use solana_sdk::signature::{Keypair, Signature, Signer};

// ─────────────────── Swap Flow (/quote -> /swap -> blockhash -> sign -> send) ───────────────────

/// Run every stage once, in order, stopping at the first failure.
pub async fn execute_swap<R>(
    jupiter: &JupiterClient,
    rpc: &R,
    kp: &Keypair,
    params: &SwapParams,
) -> SwapResult<Signature>
where
    R: ChainRpc + ?Sized,
{
    // 1. Quote
    let quote = jupiter.get_quote(params).await?;

    // 2. Build swap transaction for our wallet
    let swap = jupiter.build_swap(&quote, &kp.pubkey(), params).await?;

    // 3. Decode and patch the blockhash
    let assembled = assemble_transaction(&swap, rpc).await?;

    // 4. Sign and send
    sign_and_submit(assembled, kp, rpc).await
}

/// Wire everything from the environment and swap with the fixed parameters.
pub async fn swap_flow() -> SwapResult<Signature> {
    let cfg = load_config()?;
    let jupiter = JupiterClient::from_config(&cfg)?;
    let rpc = rpc_client(&cfg);
    let kp = keypair(&cfg)?;
    info!("wallet {}", kp.pubkey());

    execute_swap(&jupiter, &rpc, &kp, &SwapParams::default()).await
}
