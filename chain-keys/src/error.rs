//! Error type shared by the key, address and network modules.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Entropy source failed: {0}")]
    Entropy(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Network {network} has no {kind} prefix")]
    MissingPrefix {
        network: &'static str,
        kind: &'static str,
    },

    #[error("Invalid base58: {0}")]
    InvalidBase58(String),

    #[error("Base58Check checksum mismatch")]
    ChecksumMismatch,

    #[error("Invalid {what} length: {len} bytes")]
    InvalidLength { what: &'static str, len: usize },

    #[error("Invalid WIF compression flag: {0:#04x}")]
    InvalidCompressionFlag(u8),

    #[error("Prefix mismatch: expected {expected:#04x}, got {actual:#04x}")]
    PrefixMismatch { expected: u8, actual: u8 },

    #[error("Unknown chain: {0}")]
    UnknownChain(String),
}

pub type Result<T> = std::result::Result<T, KeyError>;
