use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Decode {
  #[arg(help = "Decode <TRANSACTION>, a file of raw or hex-encoded transaction bytes.")]
  transaction: PathBuf,
  #[arg(long, help = "Write the first inscription's body to <EXTRACT>.")]
  extract: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub inscriptions: Vec<DecodedInscription>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DecodedInscription {
  pub input: u32,
  pub content_type: String,
  pub content_length: usize,
}

impl Decode {
  pub(crate) fn run(self) -> Result {
    let contents = fs::read(&self.transaction)
      .with_context(|| format!("failed to read `{}`", self.transaction.display()))?;

    let transaction = encode::deserialize::<Transaction>(&transaction_bytes(contents)?)
      .map_err(|source| InscriptionError::TransactionParse { source })?;

    let envelopes = ParsedEnvelope::from_transaction(&transaction);

    if let Some(path) = &self.extract {
      let envelope = envelopes
        .first()
        .ok_or_else(|| anyhow!("transaction contains no inscriptions"))?;

      fs::write(path, &envelope.payload.body)
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    }

    print_json(Output {
      inscriptions: envelopes
        .iter()
        .map(|envelope| DecodedInscription {
          input: envelope.input,
          content_type: String::from_utf8_lossy(&envelope.payload.content_type).into_owned(),
          content_length: envelope.payload.body.len(),
        })
        .collect(),
    })
  }
}

fn transaction_bytes(contents: Vec<u8>) -> Result<Vec<u8>> {
  match str::from_utf8(&contents) {
    Ok(text)
      if !text.trim().is_empty() && text.trim().chars().all(|c| c.is_ascii_hexdigit()) =>
    {
      Ok(hex::decode(text.trim())?)
    }
    _ => Ok(contents),
  }
}
