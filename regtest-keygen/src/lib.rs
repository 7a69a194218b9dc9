//! Regtest keygen: generate a private key, encode it as WIF, derive the
//! P2PKH address and print both.

pub mod config;

use std::io::Write;

use anyhow::{Context, Result};
use chain_keys::{Chain, NetworkParams, PrivateKey, PubKeyHashAddress, Wif};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::{KeygenConfig, OutputFormat};

/// One generated key pair, encoded for its chain's regtest network.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedKey {
    pub chain: Chain,
    #[serde(rename = "pk")]
    pub wif: String,
    pub address: String,
}

impl GeneratedKey {
    /// `<SYMBOL>_PK=<wif>` and `<SYMBOL>_ADDRESS=<address>`, one per line.
    pub fn to_env(&self) -> String {
        let symbol = self.chain.symbol();
        format!(
            "{symbol}_PK={}\n{symbol}_ADDRESS={}\n",
            self.wif, self.address
        )
    }

    /// Pretty-printed JSON object with `chain`, `pk` and `address`.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).context("Failed to serialize key")?;
        json.push('\n');
        Ok(json)
    }

    /// Render in the configured output format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Env => Ok(self.to_env()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

/// Generate key -> WIF -> address with `chain`'s regtest table.
pub fn generate(chain: Chain, compressed: bool) -> Result<GeneratedKey> {
    generate_for(chain, chain.params(), compressed)
}

/// Generate key -> WIF -> address against an explicit parameter set.
/// Stops at the first failure.
pub fn generate_for(
    chain: Chain,
    params: &NetworkParams,
    compressed: bool,
) -> Result<GeneratedKey> {
    let private_key = PrivateKey::generate().context("Failed to generate private key")?;
    let wif = Wif::new(private_key, params, compressed)
        .with_context(|| format!("Failed to encode WIF for {chain}"))?;
    let address = PubKeyHashAddress::from_pub_key(&wif.serialize_pub_key(), params)
        .with_context(|| format!("Failed to derive address for {chain}"))?;

    tracing::debug!(%chain, network = params.name, compressed, "Derived key pair");

    Ok(GeneratedKey {
        chain,
        wif: wif.encode(),
        address: address.encode(),
    })
}

/// Install the stderr log subscriber. Stdout is reserved for key output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Generate a key for `chain` and write it to stdout in the configured format.
pub fn run(chain: Chain, config: &KeygenConfig) -> Result<()> {
    tracing::info!(%chain, "Generating regtest key");
    let mut stdout = std::io::stdout().lock();
    write_key(chain, chain.params(), config, &mut stdout)
}

/// Generate a key and write it to `out`.
///
/// Output is rendered completely before anything is written, so a failure
/// leaves `out` untouched.
pub fn write_key<W: Write>(
    chain: Chain,
    params: &NetworkParams,
    config: &KeygenConfig,
    out: &mut W,
) -> Result<()> {
    let key = generate_for(chain, params, config.compressed)?;
    let rendered = key.render(config.format)?;

    out.write_all(rendered.as_bytes())
        .and_then(|_| out.flush())
        .context("Failed to write key output")?;
    Ok(())
}

/// Entry point shared by the per-chain binaries.
pub fn main_for(chain: Chain) -> Result<()> {
    init_tracing();
    let config = KeygenConfig::from_env()?;
    run(chain, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_keys::KeyError;

    const NO_PREFIXES: NetworkParams = NetworkParams {
        name: "no-prefixes",
        symbol: "BITCOIN",
        pub_key_hash_addr_id: None,
        script_hash_addr_id: None,
        private_key_id: None,
    };

    const NO_ADDRESS_PREFIX: NetworkParams = NetworkParams {
        name: "no-address-prefix",
        symbol: "BITCOIN",
        pub_key_hash_addr_id: None,
        script_hash_addr_id: None,
        private_key_id: Some(0xef),
    };

    #[test]
    fn test_generated_key_is_valid_for_its_chain() {
        for chain in Chain::ALL {
            let key = generate(chain, true).unwrap();
            let params = chain.params();

            let wif = Wif::decode(&key.wif).unwrap();
            assert!(wif.is_for_network(params), "{chain} WIF has wrong prefix");
            assert!(wif.compress_pub_key());

            let address = PubKeyHashAddress::decode(&key.address, params).unwrap();
            let expected =
                PubKeyHashAddress::from_pub_key(&wif.serialize_pub_key(), params).unwrap();
            assert_eq!(address, expected);
        }
    }

    #[test]
    fn test_uncompressed_keys_use_uncompressed_pub_key() {
        let key = generate(Chain::Bitcoin, false).unwrap();
        let wif = Wif::decode(&key.wif).unwrap();
        assert!(!wif.compress_pub_key());
        assert_eq!(wif.serialize_pub_key().len(), 65);
        // Uncompressed regtest WIFs start with 9
        assert!(key.wif.starts_with('9'));
    }

    #[test]
    fn test_regtest_prefixes_show_in_encodings() {
        let bitcoin = generate(Chain::Bitcoin, true).unwrap();
        assert!(bitcoin.wif.starts_with('c'));
        assert!(bitcoin.address.starts_with('m') || bitcoin.address.starts_with('n'));

        let qtum = generate(Chain::Qtum, true).unwrap();
        assert!(qtum.address.starts_with('q'));
    }

    #[test]
    fn test_two_runs_give_different_keys() {
        let a = generate(Chain::Flo, true).unwrap();
        let b = generate(Chain::Flo, true).unwrap();
        assert_ne!(a.wif, b.wif);
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn test_env_output_has_two_prefixed_lines() {
        let key = GeneratedKey {
            chain: Chain::Flo,
            wif: "cWIF".into(),
            address: "mADDR".into(),
        };
        assert_eq!(key.to_env(), "FLO_PK=cWIF\nFLO_ADDRESS=mADDR\n");
        assert_eq!(key.render(OutputFormat::Env).unwrap(), key.to_env());
    }

    #[test]
    fn test_json_output_fields() {
        let key = GeneratedKey {
            chain: Chain::Qtum,
            wif: "cWIF".into(),
            address: "qADDR".into(),
        };
        let value: serde_json::Value = serde_json::from_str(&key.to_json().unwrap()).unwrap();
        assert_eq!(value["chain"], "qtum");
        assert_eq!(value["pk"], "cWIF");
        assert_eq!(value["address"], "qADDR");
    }

    #[test]
    fn test_missing_wif_prefix_stops_before_address() {
        let err = generate_for(Chain::Bitcoin, &NO_PREFIXES, true).unwrap_err();
        assert_eq!(err.to_string(), "Failed to encode WIF for bitcoin");
        assert_eq!(
            err.downcast_ref::<KeyError>(),
            Some(&KeyError::MissingPrefix {
                network: "no-prefixes",
                kind: "private key"
            })
        );
    }

    #[test]
    fn test_missing_address_prefix_is_reported() {
        let err = generate_for(Chain::Bitcoin, &NO_ADDRESS_PREFIX, true).unwrap_err();
        assert_eq!(err.to_string(), "Failed to derive address for bitcoin");
        assert!(matches!(
            err.downcast_ref::<KeyError>(),
            Some(KeyError::MissingPrefix { .. })
        ));
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let config = KeygenConfig::default();
        for params in [&NO_PREFIXES, &NO_ADDRESS_PREFIX] {
            let mut out = Vec::new();
            assert!(write_key(Chain::Bitcoin, params, &config, &mut out).is_err());
            assert!(out.is_empty(), "{} wrote partial output", params.name);
        }
    }

    #[test]
    fn test_successful_run_writes_both_lines() {
        let config = KeygenConfig::default();
        let mut out = Vec::new();
        write_key(Chain::Qtum, Chain::Qtum.params(), &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let wif = lines[0].strip_prefix("QTUM_PK=").unwrap();
        let address = lines[1].strip_prefix("QTUM_ADDRESS=").unwrap();
        assert!(Wif::decode(wif).unwrap().is_for_network(Chain::Qtum.params()));
        assert!(PubKeyHashAddress::decode(address, Chain::Qtum.params()).is_ok());
    }
}
