//! Byte-order helpers.
//!
//! Bitcoin-family nodes serialise hashes little-endian on the wire but show
//! them big-endian in RPCs and explorers. These helpers toggle between the two.

/// Reverse `bytes` in place and hand the same buffer back.
///
/// Nothing is allocated: the caller's buffer is the result, so anyone holding
/// it observes the new order. Copy first (or use [`reversed`]) to keep the
/// original. Reversing twice restores the input.
pub fn reverse_bytes(bytes: &mut [u8]) -> &mut [u8] {
    let len = bytes.len();
    for i in 0..len / 2 {
        bytes.swap(i, len - 1 - i);
    }
    bytes
}

/// Copying variant of [`reverse_bytes`].
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    reverse_bytes(&mut out);
    out
}

/// Display form of a wire-order hash.
pub fn reversed_hex(bytes: &[u8]) -> String {
    hex::encode(reversed(bytes))
}
