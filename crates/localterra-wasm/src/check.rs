//! Static checks a contract host applies before it stores bytecode.

use localterra_core::GenesisError;
use wasmparser::{ExternalKind, Parser, Payload, Validator};

/// Functions the host calls to move data in and out of contract memory.
pub const REQUIRED_EXPORTS: [&str; 2] = ["allocate", "deallocate"];

/// Validate `code` as a WebAssembly module and check it exposes what the
/// contract host needs: a linear memory and the [`REQUIRED_EXPORTS`].
pub fn check_code(code: &[u8]) -> Result<(), GenesisError> {
    Validator::new()
        .validate_all(code)
        .map_err(|e| GenesisError::Compile(format!("invalid wasm module: {e}")))?;

    let mut exported_functions: Vec<&str> = Vec::new();
    let mut exports_memory = false;

    for payload in Parser::new(0).parse_all(code) {
        let payload = payload.map_err(|e| GenesisError::Compile(e.to_string()))?;
        if let Payload::ExportSection(reader) = payload {
            for export in reader {
                let export = export.map_err(|e| GenesisError::Compile(e.to_string()))?;
                match export.kind {
                    ExternalKind::Func => exported_functions.push(export.name),
                    ExternalKind::Memory => exports_memory = true,
                    _ => {}
                }
            }
        }
    }

    if !exports_memory {
        return Err(GenesisError::Compile(
            "module does not export a linear memory".into(),
        ));
    }

    let missing: Vec<&str> = REQUIRED_EXPORTS
        .iter()
        .copied()
        .filter(|name| !exported_functions.contains(name))
        .collect();
    if !missing.is_empty() {
        return Err(GenesisError::Compile(format!(
            "missing required exports: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}
