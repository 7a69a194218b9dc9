//! Base58Check with the Bitcoin alphabet.

use crate::error::{KeyError, Result};
use crate::hash::sha256d;

const CHECKSUM_LEN: usize = 4;

/// Encode `payload || sha256d(payload)[..4]` as base58.
pub fn check_encode(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode a Base58Check string and return the payload without its checksum.
pub fn check_decode(s: &str) -> Result<Vec<u8>> {
    let mut data = bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| KeyError::InvalidBase58(e.to_string()))?;
    if data.len() < CHECKSUM_LEN {
        return Err(KeyError::InvalidLength {
            what: "base58check",
            len: data.len(),
        });
    }

    let checksum = data.split_off(data.len() - CHECKSUM_LEN);
    if sha256d(&data)[..CHECKSUM_LEN] != checksum[..] {
        return Err(KeyError::ChecksumMismatch);
    }
    Ok(data)
}
