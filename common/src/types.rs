// common/src/types.rs
use crate::config::{SOL_MINT, USDC_MINT};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

// ─────────────────── Request parameters ───────────────────

/// What to swap. The defaults are the fixed parameters this tool runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapParams {
    pub input_mint: String,
    pub output_mint: String,
    /// in base units of the input mint
    pub amount: u64,
    pub slippage_bps: u16,
    pub only_direct_routes: bool,
    pub wrap_and_unwrap_sol: bool,
    pub priority_fee: PriorityFee,
}

impl Default for SwapParams {
    fn default() -> Self {
        Self {
            input_mint: SOL_MINT.to_string(),
            output_mint: USDC_MINT.to_string(),
            amount: 10_000,
            slippage_bps: 50,
            only_direct_routes: false,
            wrap_and_unwrap_sol: true,
            priority_fee: PriorityFee::Auto,
        }
    }
}

/// Compute unit price for the built transaction: `"auto"` lets the
/// aggregator pick, otherwise a fixed price in micro-lamports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFee {
    Auto,
    MicroLamports(u64),
}

impl Serialize for PriorityFee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PriorityFee::Auto => serializer.serialize_str("auto"),
            PriorityFee::MicroLamports(price) => serializer.serialize_u64(*price),
        }
    }
}

// ─────────────────── /quote ───────────────────

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub input_mint: String,
    pub in_amount: String,
    pub output_mint: String,
    pub out_amount: String,
    pub other_amount_threshold: String,
    pub swap_mode: String,
    pub slippage_bps: u16,
    #[serde(default)]
    pub platform_fee: Option<Value>,
    pub price_impact_pct: String,
    pub route_plan: Vec<RoutePlanStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_slot: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
    /// Fields this crate doesn't model, forwarded untouched to /swap.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanStep {
    pub swap_info: SwapInfo,
    pub percent: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    pub amm_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub input_mint: String,
    pub output_mint: String,
    pub in_amount: String,
    pub out_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_mint: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quote {
    /// AMM labels along the route, in order ("?" when the aggregator omits one).
    pub fn route_labels(&self) -> Vec<&str> {
        self.route_plan
            .iter()
            .map(|step| step.swap_info.label.as_deref().unwrap_or("?"))
            .collect()
    }
}

// ─────────────────── /swap ───────────────────

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest<'a> {
    pub quote_response: &'a Quote,
    pub user_public_key: String,
    pub wrap_and_unwrap_sol: bool,
    pub compute_unit_price_micro_lamports: PriorityFee,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_account: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    /// base64-encoded unsigned `VersionedTransaction`
    pub swap_transaction: String,
    pub last_valid_block_height: u64,
    #[serde(default)]
    pub prioritization_fee_lamports: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
