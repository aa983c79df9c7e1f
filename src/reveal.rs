use {super::*, crate::error::InsufficientFunds};

/// Builds and signs the reveal transaction: a single script-path spend of the
/// commitment output, paying explicit change and an explicit fee output in the
/// funding asset. Signatures commit to `genesis_hash`, so a reveal signed for
/// one chain is invalid on every other.
pub(crate) fn build_reveal_transaction(
  funding: &Funding,
  commitment: &Commitment,
  leaf_script: &Script,
  change_address: &Address,
  fee: u64,
  keypair: &Keypair,
  genesis_hash: BlockHash,
) -> Result<Transaction, InscriptionError> {
  let Some(change) = funding.value.checked_sub(fee).filter(|change| *change > 0) else {
    return InsufficientFunds {
      value: funding.value,
      fee,
    }
    .fail();
  };

  let mut reveal = Transaction {
    version: 2,
    lock_time: LockTime::ZERO,
    input: vec![TxIn {
      previous_output: funding.outpoint,
      is_pegin: false,
      script_sig: Script::new(),
      sequence: Sequence::MAX,
      asset_issuance: AssetIssuance::default(),
      witness: TxInWitness::default(),
    }],
    output: vec![
      TxOut {
        asset: confidential::Asset::Explicit(funding.asset),
        value: confidential::Value::Explicit(change),
        nonce: confidential::Nonce::Null,
        script_pubkey: change_address.script_pubkey(),
        witness: TxOutWitness::default(),
      },
      TxOut::new_fee(fee, funding.asset),
    ],
  };

  let prevout = TxOut {
    asset: confidential::Asset::Explicit(funding.asset),
    value: confidential::Value::Explicit(funding.value),
    nonce: confidential::Nonce::Null,
    script_pubkey: commitment.script_pubkey(),
    witness: TxOutWitness::default(),
  };

  let signature = {
    let mut sighash_cache = SighashCache::new(&reveal);

    let sighash = sighash_cache
      .taproot_script_spend_signature_hash(
        0,
        &Prevouts::All(&[prevout]),
        commitment.leaf_hash(),
        SchnorrSighashType::Default,
        genesis_hash,
      )
      .expect("signature hash of a single complete input computes");

    let secp = Secp256k1::new();

    secp.sign_schnorr_no_aux_rand(
      &Message::from_digest_slice(sighash.as_ref()).expect("sighash is 32 bytes"),
      keypair,
    )
  };

  reveal.input[0].witness = TxInWitness {
    script_witness: vec![
      signature.as_ref().to_vec(),
      leaf_script.as_bytes().to_vec(),
      commitment.control_block().serialize(),
    ],
    ..default()
  };

  Ok(reveal)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn context() -> (Keypair, Inscription, Script, Commitment) {
    let keypair = keypair(1);
    let key = XOnlyPublicKey::from_keypair(&keypair).0;
    let inscription = inscription("text/plain;charset=utf-8", "reveal me");
    let leaf_script = inscription.reveal_script(key);
    let commitment = Commitment::build(key, &leaf_script);
    (keypair, inscription, leaf_script, commitment)
  }

  fn funding(value: u64) -> Funding {
    Funding {
      outpoint: OutPoint::new(txid(1), 0),
      value,
      asset: asset(),
    }
  }

  fn build(value: u64, fee: u64) -> Result<Transaction, InscriptionError> {
    let (keypair, _, leaf_script, commitment) = context();

    build_reveal_transaction(
      &funding(value),
      &commitment,
      &leaf_script,
      &change_address(),
      fee,
      &keypair,
      genesis_hash(),
    )
  }

  #[test]
  fn value_is_conserved_exactly() {
    let reveal = build(10_000, 500).unwrap();

    assert_eq!(reveal.input.len(), 1);
    assert_eq!(reveal.output.len(), 2);

    assert_eq!(reveal.output[0].value.explicit(), Some(9_500));
    assert_eq!(
      reveal.output[0].script_pubkey,
      change_address().script_pubkey()
    );
    assert_eq!(
      reveal.output[0].asset,
      confidential::Asset::Explicit(asset())
    );

    assert!(reveal.output[1].is_fee());
    assert_eq!(reveal.output[1].value.explicit(), Some(500));
    assert!(reveal.output[1].script_pubkey.is_empty());
  }

  #[test]
  fn funding_equal_to_fee_is_insufficient() {
    assert_eq!(
      build(500, 500).unwrap_err().to_string(),
      "funding value 500 sat does not cover reveal fee 500 sat",
    );
  }

  #[test]
  fn funding_below_fee_is_insufficient() {
    assert!(matches!(
      build(499, 500),
      Err(InscriptionError::InsufficientFunds {
        value: 499,
        fee: 500
      }),
    ));
  }

  #[test]
  fn input_spends_the_funding_outpoint() {
    let reveal = build(10_000, 500).unwrap();

    assert_eq!(reveal.version, 2);
    assert_eq!(reveal.lock_time, LockTime::ZERO);
    assert_eq!(reveal.input[0].previous_output, OutPoint::new(txid(1), 0));
    assert_eq!(reveal.input[0].sequence, Sequence::MAX);
    assert!(reveal.input[0].script_sig.is_empty());
  }

  #[test]
  fn witness_is_signature_script_control_block() {
    let (_, _, leaf_script, commitment) = context();

    let reveal = build(10_000, 500).unwrap();

    let witness = &reveal.input[0].witness.script_witness;

    assert_eq!(witness.len(), 3);
    assert_eq!(witness[0].len(), 64);
    assert_eq!(witness[1], leaf_script.as_bytes());
    assert_eq!(witness[2], commitment.control_block().serialize());
  }

  #[test]
  fn construction_is_deterministic() {
    assert_eq!(
      encode::serialize_hex(&build(10_000, 500).unwrap()),
      encode::serialize_hex(&build(10_000, 500).unwrap()),
    );
  }

  #[test]
  fn signature_commits_to_the_genesis_hash() {
    let (keypair, _, leaf_script, commitment) = context();

    let liquid = build_reveal_transaction(
      &funding(10_000),
      &commitment,
      &leaf_script,
      &change_address(),
      500,
      &keypair,
      Chain::Liquid.genesis_hash().unwrap(),
    )
    .unwrap();

    let testnet = build_reveal_transaction(
      &funding(10_000),
      &commitment,
      &leaf_script,
      &change_address(),
      500,
      &keypair,
      Chain::LiquidTestnet.genesis_hash().unwrap(),
    )
    .unwrap();

    assert_ne!(
      liquid.input[0].witness.script_witness[0],
      testnet.input[0].witness.script_witness[0],
    );
  }

  #[test]
  fn reveal_transaction_scans_back_to_the_inscription() {
    let (_, inscription, _, _) = context();

    assert_eq!(
      ParsedEnvelope::from_transaction(&build(10_000, 500).unwrap()),
      [ParsedEnvelope {
        input: 0,
        payload: inscription,
      }]
    );
  }
}
