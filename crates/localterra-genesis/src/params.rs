use std::collections::HashSet;

use localterra_core::constants::{
    BONDED_POOL_ADDR, BOND_DENOM, INITIAL_BALANCE, LOCALTERRA_ACC_ADDR, LOCALTERRA_ADDRS,
    LOCALTERRA_CHAIN_ID, LOCALTERRA_CONS_ADDR, LOCALTERRA_MONIKER, LOCALTERRA_NODE_ID,
    LOCALTERRA_PUB_KEY, LOCALTERRA_VAL_ADDR, LOCALTERRA_WEBSITE, SUPPLY_INCREMENT,
};
use localterra_core::{Amount, Coin, Coins, GenesisError};
use serde::{Deserialize, Serialize};

/// Everything the local-network migration writes that is not derived from
/// the voting power.
///
/// The default is the LocalTerra validator. A JSON file with any subset of
/// these fields can override it; missing fields keep their default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalValidatorProfile {
    pub chain_id: String,
    pub moniker: String,
    pub website: String,
    /// Consensus node ID (hex address of the consensus key).
    pub node_id: String,
    /// Base64 ed25519 consensus public key.
    pub pub_key: String,
    /// Delegator account of the validator.
    pub account_address: String,
    pub operator_address: String,
    pub consensus_address: String,
    /// Balance of the bonded-tokens module account, topped up by the stake.
    pub bonded_pool_address: String,
    pub bond_denom: String,
    pub seed_addresses: Vec<String>,
    /// Credited to every seed address.
    pub initial_balance: Coins,
    /// Added to total supply for the seeded balances. Must equal
    /// `initial_balance` times the number of seed addresses.
    pub supply_increment: Coins,
}

impl Default for LocalValidatorProfile {
    fn default() -> Self {
        Self {
            chain_id: LOCALTERRA_CHAIN_ID.into(),
            moniker: LOCALTERRA_MONIKER.into(),
            website: LOCALTERRA_WEBSITE.into(),
            node_id: LOCALTERRA_NODE_ID.into(),
            pub_key: LOCALTERRA_PUB_KEY.into(),
            account_address: LOCALTERRA_ACC_ADDR.into(),
            operator_address: LOCALTERRA_VAL_ADDR.into(),
            consensus_address: LOCALTERRA_CONS_ADDR.into(),
            bonded_pool_address: BONDED_POOL_ADDR.into(),
            bond_denom: BOND_DENOM.into(),
            seed_addresses: LOCALTERRA_ADDRS.iter().map(|a| a.to_string()).collect(),
            initial_balance: bundle(&INITIAL_BALANCE),
            supply_increment: bundle(&SUPPLY_INCREMENT),
        }
    }
}

fn bundle(pairs: &[(&str, u128)]) -> Coins {
    Coins::new(pairs.iter().map(|(d, a)| Coin::new(*d, Amount(*a))).collect())
}

impl LocalValidatorProfile {
    /// Parse a profile override and validate it.
    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        let profile: Self =
            serde_json::from_str(json).map_err(|e| GenesisError::Profile(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), GenesisError> {
        let required = [
            ("chain_id", &self.chain_id),
            ("node_id", &self.node_id),
            ("pub_key", &self.pub_key),
            ("account_address", &self.account_address),
            ("operator_address", &self.operator_address),
            ("consensus_address", &self.consensus_address),
            ("bonded_pool_address", &self.bonded_pool_address),
            ("bond_denom", &self.bond_denom),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(GenesisError::Profile(format!("{name} must not be empty")));
            }
        }

        let mut seen = HashSet::new();
        for addr in &self.seed_addresses {
            if !seen.insert(addr.as_str()) {
                return Err(GenesisError::Profile(format!(
                    "duplicate seed address {addr}"
                )));
            }
        }

        // Supply must grow by exactly what the seeded balances receive.
        let n = self.seed_addresses.len() as u128;
        let mut expected = Coins::default();
        for coin in &self.initial_balance {
            let total = Coin::new(coin.denom.clone(), coin.amount.checked_mul(n)?);
            expected = expected.merge(&Coins::new(vec![total]))?;
        }
        if self.supply_increment.merge(&Coins::default())? != expected {
            return Err(GenesisError::Profile(format!(
                "supply_increment must equal initial_balance x {n} seed addresses"
            )));
        }

        Ok(())
    }
}
