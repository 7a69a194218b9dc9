//! secp256k1 private keys, Wallet Import Format and P2PKH addresses.
//!
//! A keygen run is `PrivateKey::generate` -> `Wif::new` -> `PubKeyHashAddress::from_pub_key`
//! over one chain's [`NetworkParams`].

use std::fmt;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::base58::{check_decode, check_encode};
use crate::error::{KeyError, Result};
use crate::hash::hash160;
use crate::network::NetworkParams;

/// Length of a serialized private key in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Byte appended to a WIF payload when the public key is compressed.
const COMPRESS_MAGIC: u8 = 0x01;

/// Entropy draws before giving up on finding a valid scalar.
const MAX_GENERATE_ATTEMPTS: usize = 16;

/// A secp256k1 private key.
/// Debug output never shows the scalar.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    inner: SecretKey,
}

impl PrivateKey {
    /// Generate a fresh key from the OS entropy source.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a key from `rng`, redrawing while the bytes are not a valid
    /// scalar (zero or >= the curve order).
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; PRIVATE_KEY_LEN];
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes)
                .map_err(|e| KeyError::Entropy(e.to_string()))?;
            match Self::from_bytes(&bytes) {
                Ok(key) => {
                    bytes.fill(0);
                    return Ok(key);
                }
                Err(_) => tracing::debug!(attempt, "Drew out-of-range scalar, retrying"),
            }
        }
        bytes.fill(0);
        Err(KeyError::Entropy(format!(
            "no valid scalar after {MAX_GENERATE_ATTEMPTS} draws"
        )))
    }

    /// Create a private key from its 32 big-endian bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(KeyError::InvalidLength {
                what: "private key",
                len: bytes.len(),
            });
        }
        let inner = SecretKey::from_slice(bytes)
            .map_err(|_| KeyError::InvalidPrivateKey("scalar is zero or out of range".into()))?;
        Ok(Self { inner })
    }

    /// The 32 big-endian scalar bytes.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        let mut out = [0u8; PRIVATE_KEY_LEN];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// SEC1 public key: 33 bytes compressed, 65 bytes uncompressed.
    pub fn public_key(&self, compressed: bool) -> Vec<u8> {
        self.inner
            .public_key()
            .to_encoded_point(compressed)
            .as_bytes()
            .to_vec()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &hex::encode(self.public_key(true)))
            .finish_non_exhaustive()
    }
}

/// A private key in Wallet Import Format for a specific network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wif {
    key: PrivateKey,
    prefix: u8,
    compress_pub_key: bool,
}

impl Wif {
    /// Tag `key` with the network's WIF prefix.
    /// Fails when `params` has no private-key prefix.
    pub fn new(key: PrivateKey, params: &NetworkParams, compress_pub_key: bool) -> Result<Self> {
        let prefix = params.private_key_id.ok_or(KeyError::MissingPrefix {
            network: params.name,
            kind: "private key",
        })?;
        Ok(Self {
            key,
            prefix,
            compress_pub_key,
        })
    }

    /// Parse a WIF string. The checksum and compression flag are validated;
    /// the network is not (see [`Wif::is_for_network`]).
    pub fn decode(s: &str) -> Result<Self> {
        let payload = check_decode(s)?;
        let compress_pub_key = match payload.len() {
            33 => false,
            34 => match payload[33] {
                COMPRESS_MAGIC => true,
                flag => return Err(KeyError::InvalidCompressionFlag(flag)),
            },
            len => return Err(KeyError::InvalidLength { what: "WIF", len }),
        };
        let key = PrivateKey::from_bytes(&payload[1..33])?;
        Ok(Self {
            key,
            prefix: payload[0],
            compress_pub_key,
        })
    }

    /// Base58Check of `prefix || key || [0x01 if compressed]`.
    pub fn encode(&self) -> String {
        let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_LEN + 1);
        payload.push(self.prefix);
        payload.extend_from_slice(&self.key.to_bytes());
        if self.compress_pub_key {
            payload.push(COMPRESS_MAGIC);
        }
        let encoded = check_encode(&payload);
        payload.fill(0);
        encoded
    }

    /// Whether the WIF prefix matches `params`.
    pub fn is_for_network(&self, params: &NetworkParams) -> bool {
        params.private_key_id == Some(self.prefix)
    }

    /// Public key in the encoding selected by the compression flag.
    pub fn serialize_pub_key(&self) -> Vec<u8> {
        self.key.public_key(self.compress_pub_key)
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.key
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn compress_pub_key(&self) -> bool {
        self.compress_pub_key
    }
}

impl fmt::Display for Wif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Pay-to-public-key-hash address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PubKeyHashAddress {
    hash: [u8; 20],
    prefix: u8,
}

impl PubKeyHashAddress {
    /// Address for `hash` on the network described by `params`.
    /// Fails when `params` has no P2PKH prefix.
    pub fn new(hash: [u8; 20], params: &NetworkParams) -> Result<Self> {
        let prefix = params.pub_key_hash_addr_id.ok_or(KeyError::MissingPrefix {
            network: params.name,
            kind: "pubkey-hash address",
        })?;
        Ok(Self { hash, prefix })
    }

    /// Address paying to the Hash160 of a SEC1 public key.
    pub fn from_pub_key(pub_key: &[u8], params: &NetworkParams) -> Result<Self> {
        Self::new(hash160(pub_key), params)
    }

    /// Parse an address and check that it belongs to `params`.
    pub fn decode(s: &str, params: &NetworkParams) -> Result<Self> {
        let payload = check_decode(s)?;
        if payload.len() != 21 {
            return Err(KeyError::InvalidLength {
                what: "pubkey-hash address",
                len: payload.len(),
            });
        }
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);
        let address = Self::new(hash, params)?;
        if address.prefix != payload[0] {
            return Err(KeyError::PrefixMismatch {
                expected: address.prefix,
                actual: payload[0],
            });
        }
        Ok(address)
    }

    /// Base58Check of `prefix || hash160`.
    pub fn encode(&self) -> String {
        let mut payload = [0u8; 21];
        payload[0] = self.prefix;
        payload[1..].copy_from_slice(&self.hash);
        check_encode(&payload)
    }

    /// The 20-byte pubkey hash.
    pub fn hash160(&self) -> &[u8; 20] {
        &self.hash
    }
}

impl fmt::Display for PubKeyHashAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
