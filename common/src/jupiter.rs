// common/src/jupiter.rs
use crate::{
    config::{Config, IntegratorFee},
    error::{SwapError, SwapResult},
    types::{Quote, SwapParams, SwapRequest, SwapResponse},
};
use log::{debug, info};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use solana_sdk::pubkey::Pubkey;

trait JupiterReqExt {
    fn with_jupiter_key(self, api_key: Option<&str>) -> Self;
}

/// Attach the API key, when one is configured, as `X-API-KEY`.
impl JupiterReqExt for RequestBuilder {
    fn with_jupiter_key(self, api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) => self.header("X-API-KEY", key),
            None => self,
        }
    }
}

/// Thin client for the aggregator's `/quote` and `/swap` endpoints.
#[derive(Debug, Clone)]
pub struct JupiterClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    fee: Option<IntegratorFee>,
}

impl JupiterClient {
    pub fn new(base_url: impl Into<String>) -> SwapResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            fee: None,
        })
    }

    pub fn from_config(cfg: &Config) -> SwapResult<Self> {
        let mut client = Self::new(cfg.jupiter_api_url.clone())?;
        client.api_key = cfg.api_key.clone();
        client.fee = cfg.integrator_fee.clone();
        Ok(client)
    }

    pub fn quote_url(&self, params: &SwapParams) -> String {
        let fee_q = self
            .fee
            .as_ref()
            .map(|fee| format!("&platformFeeBps={}", fee.bps))
            .unwrap_or_default();
        format!(
            "{}/quote?inputMint={}&outputMint={}&amount={}&slippageBps={}&onlyDirectRoutes={}{}",
            self.base_url,
            params.input_mint,
            params.output_mint,
            params.amount,
            params.slippage_bps,
            params.only_direct_routes,
            fee_q
        )
    }

    /// GET /quote
    pub async fn get_quote(&self, params: &SwapParams) -> SwapResult<Quote> {
        let url = self.quote_url(params);
        debug!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .with_jupiter_key(self.api_key.as_deref())
            .send()
            .await?;
        let quote: Quote = read_json(resp, "quote").await?;
        info!(
            "quote: {} {} -> {} {} via [{}]",
            quote.in_amount,
            quote.input_mint,
            quote.out_amount,
            quote.output_mint,
            quote.route_labels().join(" > ")
        );
        Ok(quote)
    }

    /// POST /swap: the aggregator builds an unsigned transaction for `user`.
    pub async fn build_swap(
        &self,
        quote: &Quote,
        user: &Pubkey,
        params: &SwapParams,
    ) -> SwapResult<SwapResponse> {
        let body = SwapRequest {
            quote_response: quote,
            user_public_key: user.to_string(),
            wrap_and_unwrap_sol: params.wrap_and_unwrap_sol,
            compute_unit_price_micro_lamports: params.priority_fee,
            fee_account: self.fee.as_ref().map(|fee| fee.account.to_string()),
        };
        let url = format!("{}/swap", self.base_url);
        debug!("POST {url}");
        let resp = self
            .http
            .post(&url)
            .with_jupiter_key(self.api_key.as_deref())
            .json(&body)
            .send()
            .await?;
        let swap: SwapResponse = read_json(resp, "swap response").await?;
        info!(
            "swap built, last valid block height {}",
            swap.last_valid_block_height
        );
        Ok(swap)
    }
}

/// Read the whole body, then parse it: a body that can't be read is a
/// network failure, one that doesn't match `T` is a parse failure.
async fn read_json<T: DeserializeOwned>(resp: Response, what: &'static str) -> SwapResult<T> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(SwapError::Api {
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|source| SwapError::Parse { what, source })
}
