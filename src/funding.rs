use {super::*, crate::error::InvalidFundingReference};

/// A funding outpoint named on the command line. The transaction it spends is
/// never fetched, so the caller-supplied value and asset are trusted as the
/// prevout for signing.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Funding {
  pub(crate) outpoint: OutPoint,
  pub(crate) value: u64,
  pub(crate) asset: AssetId,
}

impl Funding {
  pub(crate) fn parse(
    txid: &str,
    vout: u32,
    amount: Decimal,
    asset: AssetId,
  ) -> Result<Self, InscriptionError> {
    if txid.len() != 64 {
      return InvalidFundingReference {
        reason: format!("txid must be 64 hex characters, found {}", txid.len()),
      }
      .fail();
    }

    let txid = txid.parse::<Txid>().map_err(|err| {
      InvalidFundingReference {
        reason: format!("invalid txid: {err}"),
      }
      .build()
    })?;

    Ok(Self {
      outpoint: OutPoint::new(txid, vout),
      value: amount.to_sat()?,
      asset,
    })
  }
}
