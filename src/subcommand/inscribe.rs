use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Inscribe {
  #[arg(help = "Inscribe the contents of <FILE>.")]
  file: PathBuf,
  #[arg(
    long,
    default_value = "inscription.key",
    help = "Sign with the key in <KEY>. See `generate-key`."
  )]
  key: PathBuf,
  #[arg(
    long,
    default_value_t = DEFAULT_REVEAL_FEE,
    help = "Pay <FEE> sats to the explicit fee output."
  )]
  fee: u64,
  #[arg(long, help = "Spend funding output <TXID>. Requires the other funding flags.")]
  txid: Option<String>,
  #[arg(long, help = "Spend funding output index <VOUT>.")]
  vout: Option<u32>,
  #[arg(long, help = "The funding output holds <AMOUNT>, in whole units.")]
  amount: Option<Decimal>,
  #[arg(long, help = "Send change to <CHANGE_ADDRESS>.")]
  change_address: Option<Address>,
  #[arg(
    long,
    help = "The funding output holds <ASSET>. Defaults to the chain's policy asset."
  )]
  asset: Option<AssetId>,
  #[arg(long, help = "Broadcast the reveal transaction.")]
  broadcast: bool,
  #[arg(
    long,
    default_value = "reveal-tx.hex",
    help = "Write the reveal transaction hex to <REVEAL_FILE>. Refuses to overwrite an existing file."
  )]
  reveal_file: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Output {
  pub commit_address: String,
  pub content_type: String,
  pub content_length: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reveal: Option<Reveal>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Reveal {
  pub txid: Txid,
  pub change: u64,
  pub fee: u64,
  pub reveal_file: PathBuf,
  pub broadcast: bool,
}

impl Inscribe {
  pub(crate) fn run(self, options: Options) -> Result {
    let secp = Secp256k1::new();

    let keypair = load_keypair(&secp, &self.key)?;
    let (public_key, _parity) = XOnlyPublicKey::from_keypair(&keypair);

    let inscription = Inscription::from_file(&self.file)?;

    let reveal_script = inscription.reveal_script(public_key);

    let commitment = Commitment::build(public_key, &reveal_script);

    let commit_address = commitment.address(options.chain.address_params());

    let reveal = match (self.txid, self.vout, self.amount, self.change_address) {
      (Some(txid), Some(vout), Some(amount), Some(change_address)) => {
        ensure!(
          change_address.params == options.chain.address_params(),
          "change address {change_address} is not valid for {}",
          options.chain,
        );

        let funding = Funding::parse(
          &txid,
          vout,
          amount,
          self.asset.unwrap_or_else(|| options.chain.policy_asset()),
        )?;

        let change = funding.value.saturating_sub(self.fee);

        let transaction = reveal::build_reveal_transaction(
          &funding,
          &commitment,
          &reveal_script,
          &change_address,
          self.fee,
          &keypair,
          options.genesis_hash()?,
        )?;

        let transaction_hex = encode::serialize_hex(&transaction);

        write_secret_file(&self.reveal_file, &format!("{transaction_hex}\n"))?;

        if self.broadcast {
          let txid = options.esplora()?.broadcast(&transaction_hex)?;
          log::info!("broadcast reveal transaction {txid}");
        }

        Some(Reveal {
          txid: transaction.txid(),
          change,
          fee: self.fee,
          reveal_file: self.reveal_file,
          broadcast: self.broadcast,
        })
      }
      (None, None, None, None) => None,
      _ => bail!("--txid, --vout, --amount, and --change-address must be given together"),
    };

    print_json(Output {
      commit_address: commit_address.to_string(),
      content_type: inscription.content_type().unwrap_or_default().into(),
      content_length: inscription.body.len(),
      reveal,
    })
  }
}
