use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenesisError {
    // ── Input errors ─────────────────────────────────────────────────────────
    #[error("invalid code argument `{arg}`: {reason}")]
    InvalidCodeArg { arg: String, reason: String },

    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    // ── Structural errors ────────────────────────────────────────────────────
    #[error("malformed genesis: missing field `{0}`")]
    MissingField(String),

    #[error("malformed genesis: invalid field `{path}`: {reason}")]
    InvalidField { path: String, reason: String },

    #[error("malformed genesis: {0}")]
    InvalidGenesis(String),

    #[error("bonded pool balance not found for address {0}")]
    BondedPoolNotFound(String),

    // ── Code errors ──────────────────────────────────────────────────────────
    #[error("failed to compile code: {0}")]
    Compile(String),

    #[error("code ID {code_id} out of range: genesis holds {count} codes")]
    CodeIdOutOfRange { code_id: u64, count: usize },

    // ── Arithmetic errors ────────────────────────────────────────────────────
    #[error("invalid amount `{0}`: expected a non-negative decimal integer")]
    InvalidAmount(String),

    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    // ── Migration errors ─────────────────────────────────────────────────────
    #[error("genesis already contains the local validator {0}")]
    AlreadyMigrated(String),

    #[error("invalid validator profile: {0}")]
    Profile(String),
}

impl From<serde_json::Error> for GenesisError {
    fn from(e: serde_json::Error) -> Self {
        GenesisError::Serialization(e.to_string())
    }
}
