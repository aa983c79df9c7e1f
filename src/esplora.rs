use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utxo {
  pub txid: Txid,
  pub vout: u32,
  #[serde(default)]
  pub value: Option<u64>,
  #[serde(default)]
  pub asset: Option<AssetId>,
  pub status: UtxoStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtxoStatus {
  pub confirmed: bool,
  #[serde(default)]
  pub block_height: Option<u64>,
}

/// Thin blocking client for the Esplora REST API. Requests are not retried;
/// callers decide what a failure means.
#[derive(Debug)]
pub(crate) struct Esplora {
  base_url: String,
  client: reqwest::blocking::Client,
}

impl Esplora {
  pub(crate) fn new(base_url: String) -> Result<Self> {
    let base_url = if base_url.ends_with('/') {
      base_url
    } else {
      format!("{base_url}/")
    };

    Ok(Self {
      base_url,
      client: reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?,
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  pub(crate) fn utxos(&self, address: &Address) -> Result<Vec<Utxo>> {
    let url = self.url(&format!("address/{address}/utxo"));

    log::info!("GET {url}");

    Ok(
      self
        .client
        .get(&url)
        .send()?
        .error_for_status()
        .with_context(|| format!("failed to fetch utxos for {address}"))?
        .json()?,
    )
  }

  pub(crate) fn fee_estimates(&self) -> Result<BTreeMap<String, f64>> {
    let url = self.url("fee-estimates");

    log::info!("GET {url}");

    Ok(
      self
        .client
        .get(&url)
        .send()?
        .error_for_status()
        .context("failed to fetch fee estimates")?
        .json()?,
    )
  }

  pub(crate) fn broadcast(&self, transaction_hex: &str) -> Result<Txid> {
    let url = self.url("tx");

    log::info!("POST {url}");

    let response = self
      .client
      .post(&url)
      .body(transaction_hex.trim().to_string())
      .send()?;

    let status = response.status();
    let text = response.text()?;

    ensure!(
      status.is_success(),
      "broadcast failed with status {status}: {}",
      text.trim(),
    );

    text
      .trim()
      .parse()
      .with_context(|| format!("unexpected broadcast response: {}", text.trim()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_url_gains_a_trailing_slash() {
    let esplora = Esplora::new("http://localhost:3000".into()).unwrap();

    assert_eq!(esplora.url("tx"), "http://localhost:3000/tx");

    let esplora = Esplora::new("http://localhost:3000/".into()).unwrap();

    assert_eq!(esplora.url("tx"), "http://localhost:3000/tx");
  }

  #[test]
  fn utxo_deserializes_from_esplora_json() {
    let utxo = serde_json::from_str::<Utxo>(
      r#"{
        "txid": "fffefdfcfbfaf9f8f7f6f5f4f3f2f1f0efeeedecebeae9e8e7e6e5e4e3e2e1e0",
        "vout": 1,
        "value": 10000,
        "asset": "6f0279e9ed041c3d710a9f57d0c02928416460c4b722ae3457a11eec381c526d",
        "status": { "confirmed": true, "block_height": 123 }
      }"#,
    )
    .unwrap();

    assert_eq!(utxo.vout, 1);
    assert_eq!(utxo.value, Some(10000));
    assert!(utxo.status.confirmed);
  }

  #[test]
  fn confidential_utxo_omits_value_and_asset() {
    let utxo = serde_json::from_str::<Utxo>(
      r#"{
        "txid": "fffefdfcfbfaf9f8f7f6f5f4f3f2f1f0efeeedecebeae9e8e7e6e5e4e3e2e1e0",
        "vout": 0,
        "status": { "confirmed": false }
      }"#,
    )
    .unwrap();

    assert_eq!(utxo.value, None);
    assert_eq!(utxo.asset, None);
    assert_eq!(utxo.status.block_height, None);
  }
}
