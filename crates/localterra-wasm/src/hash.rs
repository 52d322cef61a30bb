use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte code checksum: SHA-256 of the raw bytecode. This is the value
/// stored as `code_info.code_hash`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Checksum(pub [u8; 32]);

impl Checksum {
    pub fn generate(code: &[u8]) -> Self {
        Self(Sha256::digest(code).into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({}…)", &self.to_hex()[..16])
    }
}
