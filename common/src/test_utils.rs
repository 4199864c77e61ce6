// common/src/test_utils.rs
use crate::{
    error::{SwapError, SwapResult},
    rpc::ChainRpc,
    transaction::{AssembledTransaction, SignedTransaction},
};
use async_trait::async_trait;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use solana_sdk::{
    hash::Hash,
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::VersionedTransaction,
};
use std::sync::Mutex;

pub(crate) const QUOTE_JSON: &str = r#"{
    "inputMint": "So11111111111111111111111111111111111111112",
    "inAmount": "10000",
    "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
    "outAmount": "1712",
    "otherAmountThreshold": "1704",
    "swapMode": "ExactIn",
    "slippageBps": 50,
    "platformFee": null,
    "priceImpactPct": "0",
    "routePlan": [{
        "swapInfo": {
            "ammKey": "BZtgQEyS6eXUXicYPHecYQ7PybqodXQMvkjUbP4R8mUU",
            "label": "Whirlpool",
            "inputMint": "So11111111111111111111111111111111111111112",
            "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "inAmount": "10000",
            "outAmount": "1712",
            "feeAmount": "1",
            "feeMint": "So11111111111111111111111111111111111111112"
        },
        "percent": 100,
        "bps": 10000
    }],
    "contextSlot": 299283763,
    "timeTaken": 0.0123,
    "swapUsdValue": "0.0017"
}"#;

/// What the aggregator would hand back: a v0 transfer paid by `payer`,
/// with an empty signature slot and a stale blockhash.
pub(crate) fn unsigned_fixture(payer: &Keypair) -> VersionedTransaction {
    let ix = system_instruction::transfer(&payer.pubkey(), &Pubkey::new_unique(), 1_000);
    let message = v0::Message::try_compile(&payer.pubkey(), &[ix], &[], Hash::new_unique())
        .expect("compile fixture message");
    VersionedTransaction {
        signatures: vec![Signature::default(); 1],
        message: VersionedMessage::V0(message),
    }
}

pub(crate) fn signed_fixture() -> (SignedTransaction, Keypair) {
    let kp = Keypair::new();
    let signed = AssembledTransaction::with_blockhash(unsigned_fixture(&kp), Hash::new_unique())
        .sign(&kp)
        .expect("sign fixture");
    (signed, kp)
}

/// getVersion is consulted by the RPC client before most calls.
pub(crate) async fn mock_rpc_version(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "method": "getVersion" })))
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "result": { "solana-core": "1.18.26", "feature-set": 3241752014u32 },
                "id": 1
            })
            .to_string(),
        )
        .create_async()
        .await
}

/// In-memory node: fixed blockhash, accepts or refuses every submission.
pub(crate) struct FakeRpc {
    pub blockhash: Hash,
    reject_with: Option<String>,
    submitted: Mutex<Vec<VersionedTransaction>>,
}

impl FakeRpc {
    pub fn accepting() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            reject_with: None,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            reject_with: Some(reason.to_string()),
            ..Self::accepting()
        }
    }

    pub fn submitted(&self) -> Vec<VersionedTransaction> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainRpc for FakeRpc {
    async fn latest_blockhash(&self) -> SwapResult<Hash> {
        Ok(self.blockhash)
    }

    async fn submit_transaction(&self, tx: &SignedTransaction) -> SwapResult<Signature> {
        if let Some(reason) = &self.reject_with {
            return Err(SwapError::Rejection(reason.clone()));
        }
        self.submitted.lock().unwrap().push(tx.as_versioned().clone());
        Ok(*tx.signature())
    }
}
