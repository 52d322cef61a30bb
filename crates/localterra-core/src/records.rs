use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Coins, Extra};

// ── Auth / Bank ───────────────────────────────────────────────────────────────

/// `x/auth` base account as it appears in `app_state.auth.accounts`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BaseAccount {
    #[serde(rename = "@type")]
    pub type_url: String,
    pub address: String,
    /// Unset until the account signs its first transaction.
    pub pub_key: Option<Value>,
    pub account_number: String,
    pub sequence: String,
}

/// One entry of `app_state.bank.balances`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub address: String,
    pub coins: Coins,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Balance {
    pub fn new(address: impl Into<String>, coins: Coins) -> Self {
        Self {
            address: address.into(),
            coins,
            extra: Extra::new(),
        }
    }
}

// ── Consensus ─────────────────────────────────────────────────────────────────

/// Entry of the top-level `validators` list read by the consensus engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Validator {
    /// Node ID (hex of the consensus address).
    pub address: String,
    pub name: String,
    pub power: String,
    pub pub_key: ValidatorPubKey,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidatorPubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

// ── Staking ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Delegation {
    pub delegator_address: String,
    pub shares: String,
    pub validator_address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidatorPower {
    pub address: String,
    pub power: String,
}

/// Full validator descriptor kept by `x/staking`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StakingValidator {
    pub commission: StakingCommission,
    pub consensus_pubkey: ConsensusPubkey,
    pub delegator_shares: String,
    pub description: StakingDescription,
    pub jailed: bool,
    pub min_self_delegation: String,
    pub operator_address: String,
    pub status: String,
    pub tokens: String,
    pub unbonding_height: String,
    pub unbonding_time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConsensusPubkey {
    #[serde(rename = "@type")]
    pub type_url: String,
    pub key: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StakingDescription {
    pub details: String,
    pub identity: String,
    pub moniker: String,
    pub security_contact: String,
    pub website: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StakingCommission {
    pub commission_rates: CommissionRates,
    pub update_time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommissionRates {
    pub max_change_rate: String,
    pub max_rate: String,
    pub rate: String,
}

// ── Slashing ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MissedBlocks {
    pub address: String,
    pub missed_blocks: Vec<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SigningInfo {
    pub address: String,
    pub validator_signing_info: ValidatorSigningInfo,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidatorSigningInfo {
    pub address: String,
    pub index_offset: String,
    pub jailed_until: String,
    pub missed_blocks_counter: String,
    pub start_height: String,
    pub tombstoned: bool,
}

// ── Distribution ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DelegatorStartingInfo {
    pub delegator_address: String,
    pub validator_address: String,
    pub starting_info: StartingInfo,
}

/// Where a delegation's reward accounting begins.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StartingInfo {
    pub height: String,
    pub previous_period: String,
    pub stake: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutstandingRewards {
    pub validator_address: String,
    pub outstanding_rewards: Vec<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidatorAccumulatedCommission {
    pub validator_address: String,
    pub accumulated: AccumulatedCommission,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccumulatedCommission {
    pub commission: Vec<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidatorCurrentRewards {
    pub rewards: CurrentRewards,
    pub validator_address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurrentRewards {
    pub period: String,
    pub rewards: Vec<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidatorHistoricalRewards {
    pub period: String,
    pub validator_address: String,
    pub rewards: HistoricalRewards,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoricalRewards {
    pub cumulative_reward_ratio: Vec<Value>,
    pub reference_count: u32,
}
