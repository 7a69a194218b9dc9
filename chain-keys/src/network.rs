//! Regression-test network parameters for the supported Bitcoin-family chains.
//!
//! Only the prefix bytes needed for WIF and base58 addresses are modelled.
//! A prefix of `None` is unset, and encoders refuse to use it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::KeyError;

/// Address and key prefix bytes of one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    pub name: &'static str,
    pub symbol: &'static str,
    /// P2PKH version byte.
    pub pub_key_hash_addr_id: Option<u8>,
    /// P2SH version byte.
    pub script_hash_addr_id: Option<u8>,
    /// WIF version byte.
    pub private_key_id: Option<u8>,
}

pub const BITCOIN_REGTEST: NetworkParams = NetworkParams {
    name: "bitcoin-regtest",
    symbol: "BITCOIN",
    pub_key_hash_addr_id: Some(0x6f), // starts with m or n
    script_hash_addr_id: Some(0xc4),  // starts with 2
    private_key_id: Some(0xef),       // starts with 9 (uncompressed) or c (compressed)
};

pub const FLO_REGTEST: NetworkParams = NetworkParams {
    name: "flo-regtest",
    symbol: "FLO",
    pub_key_hash_addr_id: Some(0x6f),
    script_hash_addr_id: Some(0x3a),
    private_key_id: Some(0xef),
};

pub const QTUM_REGTEST: NetworkParams = NetworkParams {
    name: "qtum-regtest",
    symbol: "QTUM",
    pub_key_hash_addr_id: Some(120), // starts with q
    script_hash_addr_id: Some(110),
    private_key_id: Some(239),
};

pub const LITECOIN_REGTEST: NetworkParams = NetworkParams {
    name: "litecoin-regtest",
    symbol: "LITECOIN",
    pub_key_hash_addr_id: Some(111),
    script_hash_addr_id: Some(196),
    private_key_id: Some(239),
};

pub const DASH_REGTEST: NetworkParams = NetworkParams {
    name: "dash-regtest",
    symbol: "DASH",
    pub_key_hash_addr_id: Some(0x6f),
    script_hash_addr_id: Some(0xc4),
    private_key_id: Some(0xef),
};

pub const LBRY_REGTEST: NetworkParams = NetworkParams {
    name: "lbry-regtest",
    symbol: "LBRY",
    pub_key_hash_addr_id: Some(111),
    script_hash_addr_id: Some(196),
    private_key_id: Some(239),
};

pub const DOGECOIN_REGTEST: NetworkParams = NetworkParams {
    name: "dogecoin-regtest",
    symbol: "DOGECOIN",
    pub_key_hash_addr_id: Some(111),
    script_hash_addr_id: Some(196),
    private_key_id: Some(239),
};

pub const DIGIBYTE_REGTEST: NetworkParams = NetworkParams {
    name: "digibyte-regtest",
    symbol: "DIGIBYTE",
    pub_key_hash_addr_id: Some(0x7e), // starts with s
    script_hash_addr_id: Some(0x8c),
    private_key_id: Some(0xfe),
};

/// Chains with a regtest keygen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Bitcoin,
    Flo,
    Qtum,
    Litecoin,
    Dash,
    Lbry,
    Dogecoin,
    DigiByte,
}

impl Chain {
    pub const ALL: [Chain; 8] = [
        Chain::Bitcoin,
        Chain::Flo,
        Chain::Qtum,
        Chain::Litecoin,
        Chain::Dash,
        Chain::Lbry,
        Chain::Dogecoin,
        Chain::DigiByte,
    ];

    /// Regtest parameters for this chain.
    pub fn params(self) -> &'static NetworkParams {
        match self {
            Chain::Bitcoin => &BITCOIN_REGTEST,
            Chain::Flo => &FLO_REGTEST,
            Chain::Qtum => &QTUM_REGTEST,
            Chain::Litecoin => &LITECOIN_REGTEST,
            Chain::Dash => &DASH_REGTEST,
            Chain::Lbry => &LBRY_REGTEST,
            Chain::Dogecoin => &DOGECOIN_REGTEST,
            Chain::DigiByte => &DIGIBYTE_REGTEST,
        }
    }

    /// Prefix used for the `<SYMBOL>_PK` / `<SYMBOL>_ADDRESS` variables.
    pub fn symbol(self) -> &'static str {
        self.params().symbol
    }

    pub fn name(self) -> &'static str {
        match self {
            Chain::Bitcoin => "bitcoin",
            Chain::Flo => "flo",
            Chain::Qtum => "qtum",
            Chain::Litecoin => "litecoin",
            Chain::Dash => "dash",
            Chain::Lbry => "lbry",
            Chain::Dogecoin => "dogecoin",
            Chain::DigiByte => "digibyte",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitcoin" | "btc" => Ok(Chain::Bitcoin),
            "flo" => Ok(Chain::Flo),
            "qtum" => Ok(Chain::Qtum),
            "litecoin" | "ltc" => Ok(Chain::Litecoin),
            "dash" => Ok(Chain::Dash),
            "lbry" | "lbc" => Ok(Chain::Lbry),
            "dogecoin" | "doge" => Ok(Chain::Dogecoin),
            "digibyte" | "dgb" => Ok(Chain::DigiByte),
            _ => Err(KeyError::UnknownChain(s.to_string())),
        }
    }
}
