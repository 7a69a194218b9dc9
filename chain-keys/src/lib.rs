//! Key material and byte helpers for Bitcoin-family regression-test networks.
//!
//! - `bytes`: endianness conversion between wire-order and display-order hashes
//! - `network`: static regtest parameter tables per chain
//! - `hash` / `base58`: Hash160, double SHA-256 and Base58Check
//! - `keys`: secp256k1 private keys, WIF and P2PKH addresses

pub mod base58;
pub mod bytes;
pub mod error;
pub mod hash;
pub mod keys;
pub mod network;

pub use bytes::{reverse_bytes, reversed, reversed_hex};
pub use error::{KeyError, Result};
pub use keys::{PrivateKey, PubKeyHashAddress, Wif};
pub use network::{Chain, NetworkParams};
