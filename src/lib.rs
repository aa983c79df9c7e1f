#![allow(clippy::large_enum_variant)]
#![allow(clippy::result_large_err)]

use {
  self::{
    arguments::Arguments,
    commitment::Commitment,
    decimal::Decimal,
    error::InscriptionError,
    esplora::Esplora,
    funding::Funding,
    inscriptions::envelope,
    options::Options,
    subcommand::{print_json, Subcommand},
  },
  anyhow::{anyhow, bail, ensure, Context, Error},
  clap::Parser,
  elements::{
    confidential, encode, opcodes, script,
    secp256k1_zkp::{self, Keypair, Message, Secp256k1, XOnlyPublicKey},
    sighash::{Prevouts, SchnorrSighashType, SighashCache},
    taproot::{ControlBlock, LeafVersion, TapLeafHash, TaprootBuilder, TaprootSpendInfo},
    Address, AddressParams, AssetId, AssetIssuance, BlockHash, LockTime, OutPoint, Script,
    Sequence, Transaction, TxIn, TxInWitness, TxOut, TxOutWitness, Txid,
  },
  serde::{Deserialize, Serialize},
  snafu::Snafu,
  std::{
    collections::BTreeMap,
    env,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    str::{self, FromStr},
    time::Duration,
  },
};

pub use crate::{
  chain::Chain,
  inscriptions::{Inscription, ParsedEnvelope},
};

mod arguments;
mod chain;
mod commitment;
mod decimal;
mod error;
mod esplora;
mod funding;
mod inscriptions;
mod media;
mod options;
mod reveal;
mod subcommand;
#[cfg(test)]
mod test;

#[cfg(test)]
use self::test::*;

type Result<T = (), E = Error> = std::result::Result<T, E>;

const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

const DEFAULT_REVEAL_FEE: u64 = 500;

fn default<T: Default>() -> T {
  Default::default()
}

/// Key material and unbroadcast reveal transactions are written with owner-only
/// permissions and never clobber an existing file.
fn write_secret_file(path: &Path, contents: &str) -> Result {
  let mut open_options = fs::OpenOptions::new();
  open_options.write(true).create_new(true);

  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    open_options.mode(0o600);
  }

  let mut file = open_options
    .open(path)
    .with_context(|| format!("failed to create `{}`", path.display()))?;

  file.write_all(contents.as_bytes())?;

  Ok(())
}

fn load_keypair(secp: &Secp256k1<secp256k1_zkp::All>, path: &Path) -> Result<Keypair> {
  let contents =
    fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;

  let bytes = hex::decode(contents.trim())
    .with_context(|| format!("key in `{}` is not valid hex", path.display()))?;

  ensure!(
    bytes.len() == 32,
    "key in `{}` must be 32 bytes, found {}",
    path.display(),
    bytes.len(),
  );

  Keypair::from_seckey_slice(secp, &bytes)
    .with_context(|| format!("key in `{}` is not a valid secret key", path.display()))
}

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  if let Err(err) = args.run() {
    eprintln!("error: {err}");

    err
      .chain()
      .skip(1)
      .for_each(|cause| eprintln!("because: {cause}"));

    if env::var_os("RUST_BACKTRACE")
      .map(|val| val == "1")
      .unwrap_or_default()
    {
      eprintln!("{}", err.backtrace());
    }

    process::exit(1);
  }
}
