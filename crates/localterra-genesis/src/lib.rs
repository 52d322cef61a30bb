//! localterra-genesis
//!
//! Edits an exported Terra genesis so it can boot a local network:
//!
//! - [`migrate_code`] swaps the bytecode of stored contracts by code ID.
//! - [`migrate_into_localterra`] adds a single local validator, funds the
//!   LocalTerra test accounts, and keeps supply, staking, slashing and
//!   distribution state consistent with it.
//!
//! Both operate on a loaded [`Genesis`] in memory. Reading the input and
//! writing the result are left to the caller.

pub mod code;
pub mod document;
pub mod localnet;
pub mod params;

pub use code::{migrate_code, CodeArg};
pub use document::Genesis;
pub use localnet::{migrate_into_localterra, MigrationSummary};
pub use params::LocalValidatorProfile;
