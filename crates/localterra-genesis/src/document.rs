//! The genesis document and the typed sections this tool edits.
//!
//! A loaded [`Genesis`] is the raw JSON object. Sections are decoded on
//! demand with [`Genesis::section`], so an operation only validates what it
//! touches, and every decoding error names the dotted path of the offending
//! field. Fields that are not modelled land in a flattened `extra` map and
//! survive a load/store cycle unchanged.
//!
//! Operations edit decoded copies and hand the results to a [`Staged`] set of
//! writes; [`Genesis::commit`] applies them once nothing can fail any more.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use localterra_core::{Amount, Coins, Extra, GenesisError};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genesis(Extra);

// ── Sections ─────────────────────────────────────────────────────────────────

/// A part of the genesis decoded as a unit.
pub trait Section: Serialize + Sized {
    /// Decode `value`, found at `path`, naming the failing field on error.
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError>;
}

#[derive(Clone, Debug, Serialize)]
pub struct AuthState {
    /// Heterogeneous account records (base, module, vesting), kept as-is.
    pub accounts: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Balances stay raw JSON; only the entries a migration edits are decoded,
/// so every other entry is written back byte for byte.
#[derive(Clone, Debug, Serialize)]
pub struct BankState {
    pub balances: Vec<Value>,
    pub supply: Coins,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize)]
pub struct StakingState {
    pub delegations: Vec<Value>,
    pub last_total_power: Amount,
    pub last_validator_powers: Vec<Value>,
    pub validators: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize)]
pub struct SlashingState {
    pub missed_blocks: Vec<Value>,
    pub signing_infos: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize)]
pub struct DistributionState {
    pub delegator_starting_infos: Vec<Value>,
    pub outstanding_rewards: Vec<Value>,
    pub validator_accumulated_commissions: Vec<Value>,
    pub validator_current_rewards: Vec<Value>,
    pub validator_historical_rewards: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Stored codes stay raw JSON until one is addressed.
#[derive(Clone, Debug, Serialize)]
pub struct WasmState {
    pub codes: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One stored contract: base64 bytecode plus its metadata.
#[derive(Clone, Debug, Serialize)]
pub struct Code {
    pub code_bytes: String,
    pub code_info: CodeInfo,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize)]
pub struct CodeInfo {
    pub code_hash: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl BankState {
    /// Index of the balance entry held by `address`.
    pub fn position(&self, address: &str) -> Option<usize> {
        self.balances
            .iter()
            .position(|b| b.get("address").and_then(Value::as_str) == Some(address))
    }
}

impl Code {
    /// The `code_id` recorded in the entry itself, if any. Exports put it in
    /// `code_info` or next to it, as a string or a number.
    pub fn declared_code_id(&self) -> Option<u64> {
        let raw = self
            .code_info
            .extra
            .get("code_id")
            .or_else(|| self.extra.get("code_id"))?;
        match raw {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }
}

impl Section for AuthState {
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError> {
        let mut fields = Fields::open(value, path)?;
        Ok(Self {
            accounts: fields.take("accounts")?,
            extra: fields.rest(),
        })
    }
}

impl Section for BankState {
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError> {
        let mut fields = Fields::open(value, path)?;
        Ok(Self {
            balances: fields.take("balances")?,
            supply: fields.take("supply")?,
            extra: fields.rest(),
        })
    }
}

impl Section for StakingState {
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError> {
        let mut fields = Fields::open(value, path)?;
        Ok(Self {
            delegations: fields.take("delegations")?,
            last_total_power: fields.take("last_total_power")?,
            last_validator_powers: fields.take("last_validator_powers")?,
            validators: fields.take("validators")?,
            extra: fields.rest(),
        })
    }
}

impl Section for SlashingState {
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError> {
        let mut fields = Fields::open(value, path)?;
        Ok(Self {
            missed_blocks: fields.take("missed_blocks")?,
            signing_infos: fields.take("signing_infos")?,
            extra: fields.rest(),
        })
    }
}

impl Section for DistributionState {
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError> {
        let mut fields = Fields::open(value, path)?;
        Ok(Self {
            delegator_starting_infos: fields.take("delegator_starting_infos")?,
            outstanding_rewards: fields.take("outstanding_rewards")?,
            validator_accumulated_commissions: fields.take("validator_accumulated_commissions")?,
            validator_current_rewards: fields.take("validator_current_rewards")?,
            validator_historical_rewards: fields.take("validator_historical_rewards")?,
            extra: fields.rest(),
        })
    }
}

impl Section for WasmState {
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError> {
        let mut fields = Fields::open(value, path)?;
        Ok(Self {
            codes: fields.take("codes")?,
            extra: fields.rest(),
        })
    }
}

impl Section for Code {
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError> {
        let mut fields = Fields::open(value, path)?;
        Ok(Self {
            code_bytes: fields.take("code_bytes")?,
            code_info: fields.section("code_info")?,
            extra: fields.rest(),
        })
    }
}

impl Section for CodeInfo {
    fn resolve(value: Value, path: &str) -> Result<Self, GenesisError> {
        let mut fields = Fields::open(value, path)?;
        Ok(Self {
            code_hash: fields.take("code_hash")?,
            extra: fields.rest(),
        })
    }
}

/// Pulls typed fields out of one JSON object, naming `path.field` on failure.
struct Fields<'p> {
    path: &'p str,
    map: Extra,
}

impl<'p> Fields<'p> {
    fn open(value: Value, path: &'p str) -> Result<Self, GenesisError> {
        match value {
            Value::Object(map) => Ok(Self { path, map }),
            other => Err(not_an_object(path, &other)),
        }
    }

    fn remove(&mut self, name: &str) -> Result<(Value, String), GenesisError> {
        let path = format!("{}.{name}", self.path);
        match self.map.remove(name) {
            Some(value) => Ok((value, path)),
            None => Err(GenesisError::MissingField(path)),
        }
    }

    fn take<T: DeserializeOwned>(&mut self, name: &str) -> Result<T, GenesisError> {
        let (value, path) = self.remove(name)?;
        decode(value, &path)
    }

    fn section<T: Section>(&mut self, name: &str) -> Result<T, GenesisError> {
        let (value, path) = self.remove(name)?;
        T::resolve(value, &path)
    }

    fn rest(self) -> Extra {
        self.map
    }
}

/// Decode a single value found at `path`.
pub fn decode<T: DeserializeOwned>(value: Value, path: &str) -> Result<T, GenesisError> {
    serde_json::from_value(value).map_err(|e| GenesisError::InvalidField {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn not_an_object(path: &str, value: &Value) -> GenesisError {
    GenesisError::InvalidField {
        path: path.to_string(),
        reason: format!("expected an object, found {}", kind(value)),
    }
}

// ── Staged writes ────────────────────────────────────────────────────────────

/// Values to write back into a [`Genesis`], in order. Encoding happens when a
/// value is staged, so committing cannot fail.
#[derive(Debug, Default)]
pub struct Staged(Vec<(String, Value)>);

impl Staged {
    pub fn put<T: Serialize>(&mut self, path: &str, value: &T) -> Result<(), GenesisError> {
        self.0.push((path.to_string(), serde_json::to_value(value)?));
        Ok(())
    }
}

// ── Load / store ─────────────────────────────────────────────────────────────

impl Genesis {
    /// Parse a genesis document. Only the JSON syntax and the top-level
    /// object are checked here; sections are checked when resolved.
    pub fn from_slice(data: &[u8]) -> Result<Self, GenesisError> {
        let value: Value = serde_json::from_slice(data)
            .map_err(|e| GenesisError::Serialization(format!("failed to parse genesis: {e}")))?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(GenesisError::InvalidGenesis(format!(
                "expected an object at the top level, found {}",
                kind(&other)
            ))),
        }
    }

    /// Serialize with keys sorted at every level; `indent` selects
    /// tab-indented output over compact.
    pub fn to_json(&self, indent: bool) -> Result<Vec<u8>, GenesisError> {
        // `Extra` is a BTreeMap-backed map, so keys come out sorted.
        if !indent {
            return Ok(serde_json::to_vec(&self.0)?);
        }
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.0.serialize(&mut ser)?;
        Ok(out)
    }

    /// Raw value at a dotted path, if every segment exists.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut keys = path.split('.');
        let mut value = self.0.get(keys.next()?)?;
        for key in keys {
            value = value.get(key)?;
        }
        Some(value)
    }

    /// Value at a dotted path, naming the first segment that is missing or
    /// not an object.
    fn lookup(&self, path: &str) -> Result<&Value, GenesisError> {
        let keys: Vec<&str> = path.split('.').collect();
        let mut map = &self.0;
        for (depth, key) in keys.iter().enumerate() {
            let here = keys[..=depth].join(".");
            let value = map
                .get(*key)
                .ok_or_else(|| GenesisError::MissingField(here.clone()))?;
            if depth + 1 == keys.len() {
                return Ok(value);
            }
            map = value
                .as_object()
                .ok_or_else(|| not_an_object(&here, value))?;
        }
        Err(GenesisError::MissingField(path.to_string()))
    }

    /// Decode the required field at `path`.
    pub fn field<T: DeserializeOwned>(&self, path: &str) -> Result<T, GenesisError> {
        decode(self.lookup(path)?.clone(), path)
    }

    /// Decode the field at `path` if present.
    pub fn optional_field<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, GenesisError> {
        self.get(path).map(|v| decode(v.clone(), path)).transpose()
    }

    /// Decode the section at `path` into a working copy.
    pub fn section<T: Section>(&self, path: &str) -> Result<T, GenesisError> {
        T::resolve(self.lookup(path)?.clone(), path)
    }

    /// Apply staged writes in order.
    pub fn commit(&mut self, staged: Staged) {
        for (path, value) in staged.0 {
            self.set(&path, value);
        }
    }

    fn set(&mut self, path: &str, value: Value) {
        let mut map = &mut self.0;
        let mut keys = path.split('.').peekable();
        while let Some(key) = keys.next() {
            if keys.peek().is_none() {
                map.insert(key.to_string(), value);
                return;
            }
            let slot = map
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Extra::new()));
            if !slot.is_object() {
                *slot = Value::Object(Extra::new());
            }
            let Value::Object(inner) = slot else {
                return;
            };
            map = inner;
        }
    }
}
