// common/src/error.rs
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    rpc_request::RpcError,
};
use solana_sdk::signer::SignerError;
use thiserror::Error;

pub type SwapResult<T> = Result<T, SwapError>;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Aggregator returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid base64 transaction payload: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Invalid transaction layout: {0}")]
    Deserialization(#[source] bincode::Error),

    #[error("Failed to serialize transaction message: {0}")]
    Serialization(#[source] bincode::Error),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Transaction rejected by RPC node: {0}")]
    Rejection(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SwapError {
    fn from(err: reqwest::Error) -> Self {
        SwapError::Network(err.to_string())
    }
}

impl From<SignerError> for SwapError {
    fn from(err: SignerError) -> Self {
        SwapError::Signing(err.to_string())
    }
}

impl SwapError {
    /// Classify an RPC client error raised while submitting a transaction.
    /// Anything the node itself answered with is a rejection; the rest is
    /// transport.
    pub fn from_submit_error(err: ClientError) -> Self {
        match err.kind() {
            ClientErrorKind::RpcError(RpcError::RpcResponseError { code, message, .. }) => {
                SwapError::Rejection(format!("{message} (code {code})"))
            }
            ClientErrorKind::TransactionError(tx_err) => SwapError::Rejection(tx_err.to_string()),
            _ => SwapError::Network(err.to_string()),
        }
    }
}

impl From<ClientError> for SwapError {
    fn from(err: ClientError) -> Self {
        SwapError::Network(err.to_string())
    }
}
