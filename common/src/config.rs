// common/src/config.rs
use crate::error::{SwapError, SwapResult};
use dotenv::dotenv;
use log::debug;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};
use std::{env, fmt, str::FromStr};

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_JUPITER_API_URL: &str = "https://lite-api.jup.ag/swap/v1";

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// Where the signing key comes from. Secrets never live in code.
#[derive(Clone, PartialEq, Eq)]
pub enum KeySource {
    /// base58-encoded 64-byte keypair (`SECRET_KEY`)
    SecretKey(String),
    /// JSON keypair file (`KEYPAIR_PATH`)
    KeypairFile(String),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::SecretKey(_) => f.write_str("SecretKey(<redacted>)"),
            KeySource::KeypairFile(path) => f.debug_tuple("KeypairFile").field(path).finish(),
        }
    }
}

/// Optional integrator fee, active only when both halves are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegratorFee {
    pub account: Pubkey,
    pub bps: u16,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub jupiter_api_url: String,
    pub api_key: Option<String>,
    pub key_source: KeySource,
    pub integrator_fee: Option<IntegratorFee>,
}

/// Load `.env`, then read the process environment.
pub fn load_config() -> SwapResult<Config> {
    dotenv().ok();
    Config::from_lookup(|name| env::var(name).ok())
}

impl Config {
    /// Build a config from any variable lookup; `load_config` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> SwapResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let rpc_url = var("RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let jupiter_api_url = var("JUPITER_API_URL")
            .unwrap_or_else(|| DEFAULT_JUPITER_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let api_key = var("API_KEY");

        let key_source = match (var("SECRET_KEY"), var("KEYPAIR_PATH")) {
            (Some(secret), _) => KeySource::SecretKey(secret),
            (None, Some(path)) => KeySource::KeypairFile(path),
            (None, None) => {
                return Err(SwapError::Config(
                    "either SECRET_KEY or KEYPAIR_PATH must be set".to_string(),
                ))
            }
        };

        let integrator_fee = match (var("FEE_ACCOUNT"), var("FEE_BPS")) {
            (Some(account), Some(bps)) => {
                let bps: u16 = bps
                    .parse()
                    .map_err(|_| SwapError::Config(format!("FEE_BPS is not a number: {bps}")))?;
                if bps == 0 {
                    None
                } else {
                    let account = Pubkey::from_str(&account).map_err(|e| {
                        SwapError::Config(format!("FEE_ACCOUNT is not a valid address: {e}"))
                    })?;
                    Some(IntegratorFee { account, bps })
                }
            }
            _ => None,
        };

        debug!("rpc_url={rpc_url} jupiter_api_url={jupiter_api_url} fee={integrator_fee:?}");

        Ok(Config {
            rpc_url,
            jupiter_api_url,
            api_key,
            key_source,
            integrator_fee,
        })
    }
}

/// Load the signing keypair from the configured source.
pub fn keypair(cfg: &Config) -> SwapResult<Keypair> {
    match &cfg.key_source {
        KeySource::SecretKey(secret_b58) => {
            let bytes = bs58::decode(secret_b58.trim())
                .into_vec()
                .map_err(|e| SwapError::Config(format!("invalid base58 in SECRET_KEY: {e}")))?;
            Keypair::from_bytes(&bytes)
                .map_err(|e| SwapError::Config(format!("SECRET_KEY is not a keypair: {e}")))
        }
        KeySource::KeypairFile(path) => read_keypair_file(path)
            .map_err(|e| SwapError::Config(format!("failed to read keypair from {path}: {e}"))),
    }
}
