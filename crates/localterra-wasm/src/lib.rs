pub mod check;
pub mod hash;

pub use check::check_code;
pub use hash::Checksum;

use localterra_core::GenesisError;
use tracing::debug;

/// Load `code` the way the contract host does on upload and return the
/// checksum it would store. Fails if the module is not a loadable contract.
pub fn create(code: &[u8]) -> Result<Checksum, GenesisError> {
    check_code(code)?;
    let checksum = Checksum::generate(code);
    debug!(size = code.len(), checksum = %checksum, "code compiled");
    Ok(checksum)
}
