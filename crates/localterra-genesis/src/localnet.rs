//! Turn an exported genesis into a single-validator local network.
//!
//! The profile validator is bonded with `voting_power × 1_000_000` of the
//! bond denom, the seed accounts are funded, and every module that tracks
//! validators gets a matching record:
//!
//! 1. bank      — bonded pool top-up, seed balances, total supply
//! 2. auth      — base accounts for seeds that had no balance yet
//! 3. consensus — validator entry with the requested power
//! 4. staking   — delegation, last powers, validator descriptor
//! 5. slashing  — missed blocks and signing info
//! 6. distribution — starting info, rewards and commission records
//!
//! Every section is decoded into a working copy and the copies are written
//! back in a single commit, so any failure leaves the genesis untouched.

use std::collections::HashSet;

use localterra_core::constants::{
    BASE_ACCOUNT_TYPE, BOND_STATUS_BONDED, COMMISSION_MAX_CHANGE_RATE, COMMISSION_MAX_RATE,
    COMMISSION_RATE, COMMISSION_UPDATE_TIME, COSMOS_ED25519_TYPE, CURRENT_PERIOD, EPOCH_TIME,
    HISTORICAL_REFERENCE_COUNT, KEEP_INITIAL_HEIGHT, MIN_SELF_DELEGATION, STARTING_PERIOD,
    TENDERMINT_ED25519_TYPE, TOKENS_PER_POWER,
};
use localterra_core::{
    AccumulatedCommission, Amount, Balance, BaseAccount, Coin, Coins, CommissionRates,
    ConsensusPubkey, CurrentRewards, Delegation, DelegatorStartingInfo, GenesisError,
    HistoricalRewards, MissedBlocks, OutstandingRewards, SigningInfo, StakingCommission,
    StakingDescription, StakingValidator, StartingInfo, Validator, ValidatorAccumulatedCommission,
    ValidatorCurrentRewards, ValidatorHistoricalRewards, ValidatorPower, ValidatorPubKey,
    ValidatorSigningInfo,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::document::{
    decode, AuthState, BankState, DistributionState, Genesis, SlashingState, Staged,
    StakingState,
};
use crate::params::LocalValidatorProfile;

const CHAIN_ID: &str = "chain_id";
const INITIAL_HEIGHT: &str = "initial_height";
const VALIDATORS: &str = "validators";
const AUTH: &str = "app_state.auth";
const BANK: &str = "app_state.bank";
const STAKING: &str = "app_state.staking";
const SLASHING: &str = "app_state.slashing";
const DISTRIBUTION: &str = "app_state.distribution";

/// What a migration changed, for logging and callers that want to report it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Tokens bonded to the local validator (`voting_power × 1_000_000`).
    pub bonded_tokens: Amount,
    /// Seed addresses that already had a balance and were topped up.
    pub seeded_existing: usize,
    /// Seed addresses that got a fresh account and balance.
    pub accounts_created: usize,
    /// `initial_height` after the migration.
    pub initial_height: String,
}

/// Migrate `genesis` into a local network run by `profile`'s validator.
///
/// `initial_height` is the raw `--initial-height` flag: the literal `"0"`
/// keeps the genesis value, anything else replaces it verbatim.
pub fn migrate_into_localterra(
    genesis: &mut Genesis,
    profile: &LocalValidatorProfile,
    voting_power: u64,
    initial_height: &str,
) -> Result<MigrationSummary, GenesisError> {
    let bonded = Amount::from(voting_power).checked_mul(TOKENS_PER_POWER)?;

    // ── Resolve sections ─────────────────────────────────────────────────────
    let mut validators: Vec<Value> = genesis.field(VALIDATORS)?;
    let mut auth: AuthState = genesis.section(AUTH)?;
    let mut bank: BankState = genesis.section(BANK)?;
    let mut staking: StakingState = genesis.section(STAKING)?;
    let mut slashing: SlashingState = genesis.section(SLASHING)?;
    let mut distribution: DistributionState = genesis.section(DISTRIBUTION)?;

    let height = if initial_height == KEEP_INITIAL_HEIGHT {
        genesis
            .optional_field::<String>(INITIAL_HEIGHT)?
            .ok_or_else(|| GenesisError::MissingField(INITIAL_HEIGHT.into()))?
    } else {
        initial_height.to_string()
    };

    ensure_not_migrated(&validators, &staking, profile)?;

    // ── Migrate working copies ───────────────────────────────────────────────
    top_up_bonded_pool(&mut bank, profile, bonded)?;
    let (seeded_existing, accounts_created) = seed_accounts(&mut auth, &mut bank, profile)?;
    increment_supply(&mut bank, profile, bonded)?;

    push_record(
        &mut validators,
        &Validator {
            address: profile.node_id.clone(),
            name: profile.moniker.clone(),
            power: voting_power.to_string(),
            pub_key: ValidatorPubKey {
                key_type: TENDERMINT_ED25519_TYPE.into(),
                value: profile.pub_key.clone(),
            },
        },
    )?;
    debug!(node_id = %profile.node_id, power = voting_power, "consensus validator added");

    register_staking(&mut staking, profile, voting_power, bonded)?;
    register_slashing(&mut slashing, profile)?;
    register_distribution(&mut distribution, profile, &height, bonded)?;

    // ── Commit ───────────────────────────────────────────────────────────────
    let mut staged = Staged::default();
    staged.put(INITIAL_HEIGHT, &height)?;
    staged.put(VALIDATORS, &validators)?;
    staged.put(AUTH, &auth)?;
    staged.put(BANK, &bank)?;
    staged.put(STAKING, &staking)?;
    staged.put(SLASHING, &slashing)?;
    staged.put(DISTRIBUTION, &distribution)?;
    staged.put(CHAIN_ID, &profile.chain_id)?;
    genesis.commit(staged);

    let summary = MigrationSummary {
        bonded_tokens: bonded,
        seeded_existing,
        accounts_created,
        initial_height: height,
    };
    info!(
        chain_id = %profile.chain_id,
        voting_power,
        bonded = %summary.bonded_tokens,
        seeded = summary.seeded_existing,
        created = summary.accounts_created,
        initial_height = %summary.initial_height,
        "genesis migrated into local network"
    );
    Ok(summary)
}

/// Refuse a genesis that already carries the profile validator; migrating
/// twice would register it twice and double-fund the seeds.
fn ensure_not_migrated(
    validators: &[Value],
    staking: &StakingState,
    profile: &LocalValidatorProfile,
) -> Result<(), GenesisError> {
    let has = |records: &[Value], field: &str, expected: &str| {
        records
            .iter()
            .any(|r| r.get(field).and_then(Value::as_str) == Some(expected))
    };
    if has(validators, "address", &profile.node_id) {
        return Err(GenesisError::AlreadyMigrated(profile.node_id.clone()));
    }
    if has(&staking.validators, "operator_address", &profile.operator_address) {
        return Err(GenesisError::AlreadyMigrated(
            profile.operator_address.clone(),
        ));
    }
    Ok(())
}

// ── Bank / auth ──────────────────────────────────────────────────────────────

fn top_up_bonded_pool(
    bank: &mut BankState,
    profile: &LocalValidatorProfile,
    bonded: Amount,
) -> Result<(), GenesisError> {
    let index = bank
        .position(&profile.bonded_pool_address)
        .ok_or_else(|| GenesisError::BondedPoolNotFound(profile.bonded_pool_address.clone()))?;
    let mut pool = balance_at(bank, index)?;
    let stake = Coins::new(vec![Coin::new(profile.bond_denom.clone(), bonded)]);
    pool.coins = pool.coins.merge(&stake)?;
    debug!(address = %pool.address, bonded = %bonded, "bonded pool topped up");
    bank.balances[index] = serde_json::to_value(&pool)?;
    Ok(())
}

/// Credit every seed address once: merge into an existing balance, or
/// create a base account and balance for it.
fn seed_accounts(
    auth: &mut AuthState,
    bank: &mut BankState,
    profile: &LocalValidatorProfile,
) -> Result<(usize, usize), GenesisError> {
    let mut pending: HashSet<&str> = profile.seed_addresses.iter().map(String::as_str).collect();

    let mut seeded = 0;
    for index in 0..bank.balances.len() {
        let Some(address) = bank.balances[index].get("address").and_then(Value::as_str) else {
            continue;
        };
        if !pending.remove(address) {
            continue;
        }
        let mut balance = balance_at(bank, index)?;
        balance.coins = profile.initial_balance.merge(&balance.coins)?;
        bank.balances[index] = serde_json::to_value(&balance)?;
        seeded += 1;
    }

    let first_number = auth.accounts.len();
    let new_addresses = profile
        .seed_addresses
        .iter()
        .filter(|addr| pending.contains(addr.as_str()));

    let mut created = 0;
    for (i, addr) in new_addresses.enumerate() {
        push_record(
            &mut auth.accounts,
            &BaseAccount {
                type_url: BASE_ACCOUNT_TYPE.into(),
                address: addr.clone(),
                pub_key: None,
                account_number: (first_number + i).to_string(),
                sequence: "0".into(),
            },
        )?;
        push_record(
            &mut bank.balances,
            &Balance::new(addr.clone(), profile.initial_balance.clone()),
        )?;
        created += 1;
    }

    debug!(seeded, created, "seed accounts funded");
    Ok((seeded, created))
}

fn balance_at(bank: &BankState, index: usize) -> Result<Balance, GenesisError> {
    decode(bank.balances[index].clone(), &format!("{BANK}.balances[{index}]"))
}

fn increment_supply(
    bank: &mut BankState,
    profile: &LocalValidatorProfile,
    bonded: Amount,
) -> Result<(), GenesisError> {
    let stake = Coins::new(vec![Coin::new(profile.bond_denom.clone(), bonded)]);
    let increment = profile.supply_increment.merge(&stake)?;
    bank.supply = increment.merge(&bank.supply)?;
    debug!(
        bond_denom = %profile.bond_denom,
        total = %bank.supply.amount_of(&profile.bond_denom),
        "total supply increased"
    );
    Ok(())
}

// ── Staking ──────────────────────────────────────────────────────────────────

fn register_staking(
    staking: &mut StakingState,
    profile: &LocalValidatorProfile,
    voting_power: u64,
    bonded: Amount,
) -> Result<(), GenesisError> {
    let shares = bonded.to_dec_string();

    push_record(
        &mut staking.delegations,
        &Delegation {
            delegator_address: profile.account_address.clone(),
            shares: shares.clone(),
            validator_address: profile.operator_address.clone(),
        },
    )?;

    staking.last_total_power = staking
        .last_total_power
        .checked_add(Amount::from(voting_power))?;

    push_record(
        &mut staking.last_validator_powers,
        &ValidatorPower {
            address: profile.operator_address.clone(),
            power: voting_power.to_string(),
        },
    )?;

    push_record(
        &mut staking.validators,
        &StakingValidator {
            commission: StakingCommission {
                commission_rates: CommissionRates {
                    max_change_rate: COMMISSION_MAX_CHANGE_RATE.into(),
                    max_rate: COMMISSION_MAX_RATE.into(),
                    rate: COMMISSION_RATE.into(),
                },
                update_time: COMMISSION_UPDATE_TIME.into(),
            },
            consensus_pubkey: ConsensusPubkey {
                type_url: COSMOS_ED25519_TYPE.into(),
                key: profile.pub_key.clone(),
            },
            delegator_shares: shares,
            description: StakingDescription {
                moniker: profile.moniker.clone(),
                website: profile.website.clone(),
                ..Default::default()
            },
            jailed: false,
            min_self_delegation: MIN_SELF_DELEGATION.into(),
            operator_address: profile.operator_address.clone(),
            status: BOND_STATUS_BONDED.into(),
            tokens: bonded.to_string(),
            unbonding_height: "0".into(),
            unbonding_time: EPOCH_TIME.into(),
        },
    )?;

    debug!(
        operator = %profile.operator_address,
        last_total_power = %staking.last_total_power,
        "staking validator registered"
    );
    Ok(())
}

// ── Slashing ─────────────────────────────────────────────────────────────────

fn register_slashing(
    slashing: &mut SlashingState,
    profile: &LocalValidatorProfile,
) -> Result<(), GenesisError> {
    let cons = &profile.consensus_address;

    push_record(
        &mut slashing.missed_blocks,
        &MissedBlocks {
            address: cons.clone(),
            missed_blocks: Vec::new(),
        },
    )?;
    push_record(
        &mut slashing.signing_infos,
        &SigningInfo {
            address: cons.clone(),
            validator_signing_info: ValidatorSigningInfo {
                address: cons.clone(),
                index_offset: "0".into(),
                jailed_until: EPOCH_TIME.into(),
                missed_blocks_counter: "0".into(),
                start_height: "0".into(),
                tombstoned: false,
            },
        },
    )?;

    debug!(consensus = %cons, "signing info registered");
    Ok(())
}

// ── Distribution ─────────────────────────────────────────────────────────────

fn register_distribution(
    distribution: &mut DistributionState,
    profile: &LocalValidatorProfile,
    height: &str,
    bonded: Amount,
) -> Result<(), GenesisError> {
    let operator = &profile.operator_address;

    push_record(
        &mut distribution.delegator_starting_infos,
        &DelegatorStartingInfo {
            delegator_address: profile.account_address.clone(),
            validator_address: operator.clone(),
            starting_info: StartingInfo {
                height: height.to_string(),
                previous_period: STARTING_PERIOD.into(),
                stake: bonded.to_dec_string(),
            },
        },
    )?;
    push_record(
        &mut distribution.outstanding_rewards,
        &OutstandingRewards {
            validator_address: operator.clone(),
            outstanding_rewards: Vec::new(),
        },
    )?;
    push_record(
        &mut distribution.validator_accumulated_commissions,
        &ValidatorAccumulatedCommission {
            validator_address: operator.clone(),
            accumulated: AccumulatedCommission {
                commission: Vec::new(),
            },
        },
    )?;
    push_record(
        &mut distribution.validator_current_rewards,
        &ValidatorCurrentRewards {
            rewards: CurrentRewards {
                period: CURRENT_PERIOD.into(),
                rewards: Vec::new(),
            },
            validator_address: operator.clone(),
        },
    )?;
    push_record(
        &mut distribution.validator_historical_rewards,
        &ValidatorHistoricalRewards {
            period: STARTING_PERIOD.into(),
            validator_address: operator.clone(),
            rewards: HistoricalRewards {
                cumulative_reward_ratio: Vec::new(),
                reference_count: HISTORICAL_REFERENCE_COUNT,
            },
        },
    )?;

    debug!(operator = %operator, height, "distribution records registered");
    Ok(())
}

fn push_record<T: Serialize>(list: &mut Vec<Value>, record: &T) -> Result<(), GenesisError> {
    list.push(serde_json::to_value(record)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use localterra_core::constants::{BONDED_POOL_ADDR, LOCALTERRA_ADDRS, LOCALTERRA_VAL_ADDR};
    use serde_json::json;

    const OTHER_ADDR: &str = "terra1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq";

    fn exported_json() -> Value {
        json!({
            "chain_id": "columbus-5",
            "genesis_time": "2021-09-30T00:00:00Z",
            "initial_height": "4724001",
            "validators": [{
                "address": "0000000000000000000000000000000000000001",
                "name": "mainnet-0",
                "power": "10",
                "pub_key": { "type": "tendermint/PubKeyEd25519", "value": "AAAA" }
            }],
            "app_state": {
                "auth": {
                    "params": { "max_memo_characters": "256" },
                    "accounts": [
                        { "@type": "/cosmos.auth.v1beta1.BaseAccount", "address": OTHER_ADDR,
                          "pub_key": null, "account_number": "0", "sequence": "3" },
                        { "@type": "/cosmos.auth.v1beta1.ModuleAccount", "name": "bonded_tokens_pool",
                          "base_account": { "address": BONDED_POOL_ADDR } }
                    ]
                },
                "bank": {
                    "params": { "default_send_enabled": true },
                    "balances": [
                        { "address": BONDED_POOL_ADDR, "coins": [{ "denom": "uluna", "amount": "10000000" }] },
                        { "address": LOCALTERRA_ADDRS[1], "coins": [
                            { "denom": "uluna", "amount": "5" },
                            { "denom": "uusd", "amount": "3" }
                        ] },
                        { "address": OTHER_ADDR, "coins": [{ "denom": "uusd", "amount": "0007" }] }
                    ],
                    "supply": [
                        { "denom": "uluna", "amount": "10000005" },
                        { "denom": "uusd", "amount": "10" }
                    ],
                    "denom_metadata": []
                },
                "staking": {
                    "params": { "bond_denom": "uluna" },
                    "delegations": [],
                    "last_total_power": "10",
                    "last_validator_powers": [],
                    "validators": [],
                    "redelegations": []
                },
                "slashing": { "params": {}, "missed_blocks": [], "signing_infos": [] },
                "distribution": {
                    "fee_pool": { "community_pool": [] },
                    "delegator_starting_infos": [],
                    "outstanding_rewards": [],
                    "validator_accumulated_commissions": [],
                    "validator_current_rewards": [],
                    "validator_historical_rewards": []
                },
                "gov": { "starting_proposal_id": "1" }
            }
        })
    }

    fn genesis_from(value: Value) -> Genesis {
        serde_json::from_value(value).unwrap()
    }

    fn exported_genesis() -> Genesis {
        genesis_from(exported_json())
    }

    fn migrate(genesis: &mut Genesis, power: u64, height: &str) -> MigrationSummary {
        migrate_into_localterra(genesis, &LocalValidatorProfile::default(), power, height).unwrap()
    }

    fn migrate_err(genesis: &mut Genesis, height: &str) -> GenesisError {
        migrate_into_localterra(genesis, &LocalValidatorProfile::default(), 1, height).unwrap_err()
    }

    fn at<'a>(genesis: &'a Genesis, path: &str) -> &'a Value {
        genesis.get(path).unwrap_or_else(|| panic!("{path} missing"))
    }

    fn list<'a>(genesis: &'a Genesis, path: &str) -> &'a Vec<Value> {
        at(genesis, path).as_array().unwrap()
    }

    fn balance_of(genesis: &Genesis, addr: &str) -> Coins {
        let entry = list(genesis, "app_state.bank.balances")
            .iter()
            .find(|b| b["address"] == addr)
            .unwrap();
        serde_json::from_value(entry["coins"].clone()).unwrap()
    }

    fn supply_of(genesis: &Genesis) -> Coins {
        serde_json::from_value(at(genesis, "app_state.bank.supply").clone()).unwrap()
    }

    #[test]
    fn bonds_voting_power_into_pool_and_supply() {
        let mut genesis = exported_genesis();
        let summary = migrate(&mut genesis, 1_000_000, "0");
        assert_eq!(summary.bonded_tokens, Amount(1_000_000_000_000));

        assert_eq!(
            balance_of(&genesis, BONDED_POOL_ADDR).amount_of("uluna"),
            Amount(10_000_000 + 1_000_000_000_000)
        );

        let supply = supply_of(&genesis);
        assert_eq!(
            supply.amount_of("uluna"),
            Amount(10_000_005 + 11_000_000_000_000_000 + 1_000_000_000_000)
        );
        assert_eq!(supply.amount_of("ukrw"), Amount(11_000_000_000_000_000_000));
        let denoms: Vec<&str> = supply.iter().map(|c| c.denom.as_str()).collect();
        assert_eq!(denoms, ["ueur", "ukrw", "uluna", "usdr", "uusd"]);
    }

    #[test]
    fn registers_one_consensus_validator_and_delegation() {
        let mut genesis = exported_genesis();
        migrate(&mut genesis, 1_000_000, "0");

        let local: Vec<_> = list(&genesis, "validators")
            .iter()
            .filter(|v| v["name"] == "localterra")
            .collect();
        assert_eq!(local.len(), 1);
        assert_eq!(local[0]["power"], "1000000");
        assert_eq!(local[0]["pub_key"]["type"], "tendermint/PubKeyEd25519");

        let staking = at(&genesis, "app_state.staking");
        assert_eq!(staking["delegations"].as_array().unwrap().len(), 1);
        assert_eq!(staking["delegations"][0]["shares"], "1000000000000.000000000000000000");
        assert_eq!(staking["delegations"][0]["validator_address"], LOCALTERRA_VAL_ADDR);
        assert_eq!(staking["last_total_power"], "1000010");
        assert_eq!(staking["last_validator_powers"][0]["power"], "1000000");
        let validator = &staking["validators"][0];
        assert_eq!(validator["tokens"], "1000000000000");
        assert_eq!(validator["status"], "BOND_STATUS_BONDED");
        assert_eq!(validator["commission"]["commission_rates"]["rate"], "0.100000000000000000");
        assert_eq!(validator["description"]["moniker"], "localterra");
        assert_eq!(at(&genesis, "chain_id").as_str(), Some("localterra"));
    }

    #[test]
    fn seeds_each_address_exactly_once() {
        let mut genesis = exported_genesis();
        let summary = migrate(&mut genesis, 1, "0");
        assert_eq!(summary.seeded_existing, 1);
        assert_eq!(summary.accounts_created, 10);

        let existing = balance_of(&genesis, LOCALTERRA_ADDRS[1]);
        assert_eq!(existing.amount_of("uluna"), Amount(1_000_000_000_000_000 + 5));
        assert_eq!(existing.amount_of("uusd"), Amount(10_000_000_000_000_000 + 3));
        assert_eq!(existing.len(), 5);

        // Unrelated balances are left alone.
        assert_eq!(balance_of(&genesis, OTHER_ADDR).amount_of("uusd"), Amount(7));

        let balances = list(&genesis, "app_state.bank.balances");
        assert_eq!(balances.len(), 3 + 10);
        for addr in LOCALTERRA_ADDRS {
            assert_eq!(balances.iter().filter(|b| b["address"] == addr).count(), 1);
        }

        let accounts = list(&genesis, "app_state.auth.accounts");
        assert_eq!(accounts.len(), 2 + 10);
        let numbers: Vec<&str> = accounts[2..]
            .iter()
            .map(|a| a["account_number"].as_str().unwrap())
            .collect();
        assert_eq!(numbers, ["2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]);
        assert_eq!(accounts[2]["address"], LOCALTERRA_ADDRS[0]);
        assert_eq!(accounts[3]["address"], LOCALTERRA_ADDRS[2]);
        assert!(accounts[2]["pub_key"].is_null());
    }

    #[test]
    fn untouched_balances_keep_their_text() {
        let mut raw = exported_json();
        raw["app_state"]["bank"]["balances"]
            .as_array_mut()
            .unwrap()
            .push(json!({ "address": "terra1vesting", "coins": [{ "denom": "uluna", "amount": "1.5" }] }));
        let mut genesis = genesis_from(raw);
        migrate(&mut genesis, 1, "0");

        let balances = list(&genesis, "app_state.bank.balances");
        assert_eq!(balances[2]["coins"][0]["amount"], "0007");
        assert_eq!(balances[3]["coins"][0]["amount"], "1.5");
    }

    #[test]
    fn zero_flag_keeps_initial_height() {
        let mut genesis = exported_genesis();
        migrate(&mut genesis, 1, "0");
        assert_eq!(at(&genesis, "initial_height").as_str(), Some("4724001"));

        let info = &list(&genesis, "app_state.distribution.delegator_starting_infos")[0]["starting_info"];
        assert_eq!(info["height"], "4724001");
        assert_eq!(info["previous_period"], "1");
        assert_eq!(info["stake"], "1000000.000000000000000000");
    }

    #[test]
    fn other_flag_values_override_verbatim() {
        for flag in ["42", "00"] {
            let mut genesis = exported_genesis();
            migrate(&mut genesis, 1, flag);
            assert_eq!(at(&genesis, "initial_height").as_str(), Some(flag));

            let infos = list(&genesis, "app_state.distribution.delegator_starting_infos");
            assert_eq!(infos[0]["starting_info"]["height"], flag);
        }
    }

    #[test]
    fn zero_flag_without_initial_height_fails() {
        let mut raw = exported_json();
        raw.as_object_mut().unwrap().remove("initial_height");
        let mut genesis = genesis_from(raw.clone());

        let err = migrate_err(&mut genesis, "0");
        assert!(matches!(&err, GenesisError::MissingField(field) if field == "initial_height"));
        assert_eq!(err.to_string(), "malformed genesis: missing field `initial_height`");
        assert_eq!(genesis, genesis_from(raw));

        // An explicit height fills the gap instead.
        migrate(&mut genesis, 1, "7");
        assert_eq!(at(&genesis, "initial_height").as_str(), Some("7"));
    }

    #[test]
    fn writes_slashing_and_distribution_bookkeeping() {
        let mut genesis = exported_genesis();
        migrate(&mut genesis, 5, "0");

        let slashing = at(&genesis, "app_state.slashing");
        assert_eq!(slashing["missed_blocks"][0]["missed_blocks"], json!([]));
        let info = &slashing["signing_infos"][0]["validator_signing_info"];
        assert_eq!(info["tombstoned"], false);
        assert_eq!(info["jailed_until"], "1970-01-01T00:00:00Z");

        let dist = at(&genesis, "app_state.distribution");
        assert_eq!(dist["outstanding_rewards"][0]["outstanding_rewards"], json!([]));
        assert_eq!(dist["validator_accumulated_commissions"][0]["accumulated"]["commission"], json!([]));
        assert_eq!(dist["validator_current_rewards"][0]["rewards"]["period"], "2");
        assert_eq!(dist["validator_historical_rewards"][0]["period"], "1");
        assert_eq!(dist["validator_historical_rewards"][0]["rewards"]["reference_count"], 2);
        assert_eq!(dist["fee_pool"], json!({ "community_pool": [] }));
    }

    #[test]
    fn second_run_is_rejected() {
        let mut genesis = exported_genesis();
        migrate(&mut genesis, 1_000_000, "0");
        let before = genesis.clone();

        let err = migrate_err(&mut genesis, "0");
        assert!(matches!(err, GenesisError::AlreadyMigrated(_)));
        assert_eq!(genesis, before);
    }

    #[test]
    fn missing_section_fails_before_any_change() {
        let mut raw = exported_json();
        raw["app_state"].as_object_mut().unwrap().remove("slashing");
        let mut genesis = genesis_from(raw);
        let before = genesis.clone();

        let err = migrate_err(&mut genesis, "0");
        assert_eq!(err.to_string(), "malformed genesis: missing field `app_state.slashing`");
        assert_eq!(genesis, before);
    }

    #[test]
    fn missing_bonded_pool_fails_before_any_change() {
        let mut raw = exported_json();
        raw["app_state"]["bank"]["balances"].as_array_mut().unwrap().remove(0);
        let mut genesis = genesis_from(raw);
        let before = genesis.clone();

        let err = migrate_err(&mut genesis, "0");
        assert!(matches!(err, GenesisError::BondedPoolNotFound(_)));
        assert_eq!(genesis, before);
    }

    #[test]
    fn overflow_mid_migration_leaves_genesis_unchanged() {
        let mut raw = exported_json();
        raw["app_state"]["bank"]["balances"][1]["coins"][0]["amount"] = json!(u128::MAX.to_string());
        let mut genesis = genesis_from(raw);
        let before = genesis.clone();

        let err = migrate_err(&mut genesis, "42");
        assert!(matches!(err, GenesisError::Overflow(_)), "{err}");
        assert_eq!(genesis, before);
        assert_eq!(balance_of(&genesis, BONDED_POOL_ADDR).amount_of("uluna"), Amount(10_000_000));
    }

    #[test]
    fn malformed_touched_balance_is_named() {
        let mut raw = exported_json();
        raw["app_state"]["bank"]["balances"][0]["coins"][0]["amount"] = json!("1e6");
        let mut genesis = genesis_from(raw);

        let err = migrate_err(&mut genesis, "0");
        assert!(
            err.to_string()
                .starts_with("malformed genesis: invalid field `app_state.bank.balances[0]`"),
            "{err}"
        );
    }

    #[test]
    fn custom_profile_drives_every_record() {
        let profile = LocalValidatorProfile {
            chain_id: "devnet".into(),
            operator_address: "terravaloper1dev".into(),
            ..Default::default()
        };
        let mut genesis = exported_genesis();
        migrate_into_localterra(&mut genesis, &profile, 1, "0").unwrap();

        assert_eq!(at(&genesis, "chain_id").as_str(), Some("devnet"));
        assert_eq!(
            at(&genesis, "app_state.staking.validators")[0]["operator_address"],
            "terravaloper1dev"
        );
        assert_eq!(
            at(&genesis, "app_state.distribution.validator_current_rewards")[0]["validator_address"],
            "terravaloper1dev"
        );
    }
}
