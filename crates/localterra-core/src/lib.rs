pub mod constants;
pub mod error;
pub mod types;
pub mod records;

pub use constants::*;
pub use error::GenesisError;
pub use types::*;
pub use records::*;
