// common/src/transaction.rs
use crate::{
    error::{SwapError, SwapResult},
    rpc::ChainRpc,
    types::SwapResponse,
};
use base64::{decode, encode};
use bincode::{deserialize, serialize};
use log::{debug, info};
use solana_sdk::{
    hash::Hash,
    signature::{Keypair, Signature, Signer},
    transaction::VersionedTransaction,
};

/// base64 payload -> `VersionedTransaction` (legacy or v0 message).
pub fn decode_transaction(payload: &str) -> SwapResult<VersionedTransaction> {
    let raw = decode(payload)?;
    deserialize(&raw).map_err(SwapError::Deserialization)
}

pub fn encode_transaction(tx: &VersionedTransaction) -> SwapResult<String> {
    let raw = serialize(tx).map_err(SwapError::Serialization)?;
    Ok(encode(raw))
}

/// An aggregator-built transaction whose recent blockhash has been replaced
/// with one fetched from the chain. The only thing that can be signed.
#[derive(Debug, Clone)]
pub struct AssembledTransaction {
    tx: VersionedTransaction,
}

impl AssembledTransaction {
    pub fn with_blockhash(mut tx: VersionedTransaction, blockhash: Hash) -> Self {
        tx.message.set_recent_blockhash(blockhash);
        Self { tx }
    }

    pub fn recent_blockhash(&self) -> &Hash {
        self.tx.message.recent_blockhash()
    }

    /// The exact bytes the fee payer signs.
    pub fn message_bytes(&self) -> SwapResult<Vec<u8>> {
        serialize(&self.tx.message).map_err(SwapError::Serialization)
    }

    /// Sign as fee payer: the keypair must own static account 0, and its
    /// signature replaces slot 0.
    pub fn sign(self, kp: &Keypair) -> SwapResult<SignedTransaction> {
        let mut tx = self.tx;

        let signer = kp.pubkey();
        match tx.message.static_account_keys().first() {
            Some(fee_payer) if *fee_payer == signer => {}
            Some(fee_payer) => {
                return Err(SwapError::Signing(format!(
                    "keypair {signer} is not the fee payer {fee_payer}"
                )))
            }
            None => return Err(SwapError::Signing("message has no account keys".to_string())),
        }
        if tx.signatures.is_empty() {
            return Err(SwapError::Signing(
                "transaction has no signature slot".to_string(),
            ));
        }

        let data = serialize(&tx.message).map_err(SwapError::Serialization)?;
        let signature = kp.try_sign_message(&data)?;
        tx.signatures[0] = signature;
        debug!("signed {} message bytes as {signer}", data.len());

        Ok(SignedTransaction { tx })
    }
}

/// Fully signed and ready for submission.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    tx: VersionedTransaction,
}

impl SignedTransaction {
    pub fn as_versioned(&self) -> &VersionedTransaction {
        &self.tx
    }

    /// The fee payer's signature, which is also the transaction id.
    pub fn signature(&self) -> &Signature {
        &self.tx.signatures[0]
    }

    pub fn into_inner(self) -> VersionedTransaction {
        self.tx
    }
}

/// Decode the swap payload and patch in the chain's current blockhash.
/// Aggregator transactions go stale fast, so the hash is fetched right
/// before signing.
pub async fn assemble_transaction<R>(swap: &SwapResponse, rpc: &R) -> SwapResult<AssembledTransaction>
where
    R: ChainRpc + ?Sized,
{
    let tx = decode_transaction(&swap.swap_transaction)?;
    let stale = *tx.message.recent_blockhash();
    let blockhash = rpc.latest_blockhash().await?;
    info!("refreshing blockhash {stale} -> {blockhash}");
    Ok(AssembledTransaction::with_blockhash(tx, blockhash))
}

/// Sign the assembled transaction and hand it to the node.
pub async fn sign_and_submit<R>(
    assembled: AssembledTransaction,
    kp: &Keypair,
    rpc: &R,
) -> SwapResult<Signature>
where
    R: ChainRpc + ?Sized,
{
    let signed = assembled.sign(kp)?;
    let signature = rpc.submit_transaction(&signed).await?;
    info!("submitted {signature}");
    Ok(signature)
}
