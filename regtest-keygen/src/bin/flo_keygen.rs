//! Print a fresh Flo regtest key as `FLO_PK` / `FLO_ADDRESS`.

use chain_keys::Chain;

fn main() -> anyhow::Result<()> {
    regtest_keygen::main_for(Chain::Flo)
}
