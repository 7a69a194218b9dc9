//! Print a fresh Bitcoin regtest key as `BITCOIN_PK` / `BITCOIN_ADDRESS`.

use chain_keys::Chain;

fn main() -> anyhow::Result<()> {
    regtest_keygen::main_for(Chain::Bitcoin)
}
