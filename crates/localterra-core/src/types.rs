use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::GenesisError;

/// Fields of a genesis object that this tool does not model. Carried through
/// unchanged so the rewritten document keeps everything it was given.
pub type Extra = serde_json::Map<String, serde_json::Value>;

// ── Amount ───────────────────────────────────────────────────────────────────

/// Non-negative token amount. The genesis format encodes big integers as
/// decimal strings; this type keeps that wire form and does checked math.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(pub u128);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn new(v: u128) -> Self {
        Self(v)
    }

    pub fn get(&self) -> u128 {
        self.0
    }

    pub fn checked_add(self, other: Amount) -> Result<Amount, GenesisError> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or_else(|| GenesisError::Overflow(format!("{} + {}", self.0, other.0)))
    }

    pub fn checked_mul(self, factor: u128) -> Result<Amount, GenesisError> {
        self.0
            .checked_mul(factor)
            .map(Amount)
            .ok_or_else(|| GenesisError::Overflow(format!("{} * {}", self.0, factor)))
    }

    /// SDK `Dec` rendering: the integer followed by 18 zero fractional digits.
    pub fn to_dec_string(&self) -> String {
        format!("{}.{}", self.0, "0".repeat(crate::constants::DEC_PRECISION))
    }
}

impl From<u128> for Amount {
    fn from(v: u128) -> Self {
        Self(v)
    }
}

impl From<u64> for Amount {
    fn from(v: u64) -> Self {
        Self(v as u128)
    }
}

impl FromStr for Amount {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // u128::from_str accepts a leading '+', the genesis format does not.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GenesisError::InvalidAmount(s.to_string()));
        }
        s.parse::<u128>()
            .map(Amount)
            .map_err(|_| GenesisError::InvalidAmount(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Coin ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Amount,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

// ── Coins ────────────────────────────────────────────────────────────────────

/// A multi-denomination amount as it appears in balances and supply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(pub Vec<Coin>);

impl Coins {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Amount held of `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> Amount {
        self.0
            .iter()
            .filter(|c| c.denom == denom)
            .fold(Amount::ZERO, |acc, c| Amount(acc.0.saturating_add(c.amount.0)))
    }

    /// Sum both sets per denomination.
    ///
    /// The result has one entry per denomination, sorted ascending by denom,
    /// so the output only depends on the multiset of input coins.
    pub fn merge(&self, other: &Coins) -> Result<Coins, GenesisError> {
        let mut totals: BTreeMap<&str, Amount> = BTreeMap::new();
        for coin in self.0.iter().chain(other.0.iter()) {
            let slot = totals.entry(coin.denom.as_str()).or_default();
            *slot = slot.checked_add(coin.amount)?;
        }
        Ok(Coins(
            totals
                .into_iter()
                .map(|(denom, amount)| Coin::new(denom, amount))
                .collect(),
        ))
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
