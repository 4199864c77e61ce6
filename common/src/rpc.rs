// common/src/rpc.rs
use crate::{
    config::Config,
    error::{SwapError, SwapResult},
    transaction::SignedTransaction,
};
use async_trait::async_trait;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{hash::Hash, signature::Signature};

/// The two chain calls a swap needs.
#[async_trait]
pub trait ChainRpc: Send + Sync {
    async fn latest_blockhash(&self) -> SwapResult<Hash>;

    /// Submit with the node's default preflight. Anything the node refuses
    /// comes back as `SwapError::Rejection`.
    async fn submit_transaction(&self, tx: &SignedTransaction) -> SwapResult<Signature>;
}

pub fn rpc_client(cfg: &Config) -> RpcClient {
    RpcClient::new(cfg.rpc_url.clone())
}

#[async_trait]
impl ChainRpc for RpcClient {
    async fn latest_blockhash(&self) -> SwapResult<Hash> {
        let hash = self.get_latest_blockhash().await?;
        debug!("latest blockhash from {}: {hash}", self.url());
        Ok(hash)
    }

    async fn submit_transaction(&self, tx: &SignedTransaction) -> SwapResult<Signature> {
        self.send_transaction(tx.as_versioned())
            .await
            .map_err(SwapError::from_submit_error)
    }
}
