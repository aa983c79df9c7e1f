use {super::*, rand::RngCore};

#[derive(Debug, Parser)]
pub(crate) struct GenerateKey {
  #[arg(
    long,
    default_value = "inscription.key",
    help = "Write the key to <OUTPUT>. Refuses to overwrite an existing file."
  )]
  output: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Output {
  pub key_file: PathBuf,
  pub public_key: String,
}

impl GenerateKey {
  pub(crate) fn run(self) -> Result {
    let secp = Secp256k1::new();
    let mut rng = rand::thread_rng();

    let secret_key = loop {
      let mut bytes = [0; 32];
      rng.fill_bytes(&mut bytes);
      if let Ok(secret_key) = secp256k1_zkp::SecretKey::from_slice(&bytes) {
        break secret_key;
      }
    };

    let keypair = Keypair::from_secret_key(&secp, &secret_key);
    let (public_key, _parity) = XOnlyPublicKey::from_keypair(&keypair);

    write_secret_file(
      &self.output,
      &format!("{}\n", hex::encode(secret_key.secret_bytes())),
    )?;

    print_json(Output {
      key_file: self.output,
      public_key: public_key.to_string(),
    })
  }
}
