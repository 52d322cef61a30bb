//! Overwrite stored contract bytecode in `app_state.wasm.codes`.

use std::path::PathBuf;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use localterra_core::GenesisError;
use localterra_wasm::Checksum;
use tracing::{info, warn};

use crate::document::{Code, Genesis, Section, Staged, WasmState};

const WASM: &str = "app_state.wasm";

/// A `codeID=path` command-line argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeArg {
    /// 1-based code ID.
    pub code_id: u64,
    pub path: PathBuf,
}

impl FromStr for CodeArg {
    type Err = GenesisError;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| GenesisError::InvalidCodeArg {
            arg: arg.to_string(),
            reason: reason.to_string(),
        };

        let (id, path) = arg
            .split_once('=')
            .ok_or_else(|| invalid("expected codeID=path"))?;
        let code_id: u64 = id
            .trim()
            .parse()
            .map_err(|_| invalid("code ID is not a number"))?;
        if code_id == 0 {
            return Err(invalid("code IDs start at 1"));
        }
        if path.is_empty() {
            return Err(invalid("empty path"));
        }
        Ok(Self {
            code_id,
            path: PathBuf::from(path),
        })
    }
}

/// Replace the bytecode and hash of code `code_id` with `code`.
///
/// The bytecode is compiled first; nothing in the document changes unless it
/// is a loadable contract and `code_id` addresses an existing entry.
pub fn migrate_code(
    genesis: &mut Genesis,
    code_id: u64,
    code: &[u8],
) -> Result<Checksum, GenesisError> {
    let checksum = localterra_wasm::create(code)?;

    let mut wasm: WasmState = genesis.section(WASM)?;
    let count = wasm.codes.len();
    let index = code_id
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i < count)
        .ok_or(GenesisError::CodeIdOutOfRange { code_id, count })?;

    let path = format!("{WASM}.codes[{index}]");
    let mut entry = Code::resolve(std::mem::take(&mut wasm.codes[index]), &path)?;
    if let Some(declared) = entry.declared_code_id() {
        if declared != code_id {
            warn!(code_id, declared, "code entry declares a different code ID");
        }
    }

    entry.code_bytes = STANDARD.encode(code);
    entry.code_info.code_hash = STANDARD.encode(checksum.as_bytes());
    wasm.codes[index] = serde_json::to_value(&entry)?;

    let mut staged = Staged::default();
    staged.put(WASM, &wasm)?;
    genesis.commit(staged);

    info!(code_id, checksum = %checksum, size = code.len(), "code overwritten");
    Ok(checksum)
}
