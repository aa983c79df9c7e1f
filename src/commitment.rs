use super::*;

/// Elements tapscript leaf version, 0xc4.
pub(crate) fn leaf_version() -> LeafVersion {
  LeafVersion::from_u8(0xc4).expect("0xc4 is a valid leaf version")
}

/// A taproot output committing to a single reveal-script leaf. The merkle
/// root of the degenerate tree is the leaf hash itself.
#[derive(Debug, Clone)]
pub(crate) struct Commitment {
  leaf_hash: TapLeafHash,
  spend_info: TaprootSpendInfo,
  control_block: ControlBlock,
}

impl Commitment {
  pub(crate) fn build(internal_key: XOnlyPublicKey, leaf_script: &Script) -> Self {
    let secp = Secp256k1::verification_only();

    let leaf_hash = TapLeafHash::from_script(leaf_script, leaf_version());

    let spend_info = TaprootBuilder::new()
      .add_leaf_with_ver(0, leaf_script.clone(), leaf_version())
      .expect("a single leaf fits at depth zero")
      .finalize(&secp, internal_key)
      .expect("a single-leaf tree always finalizes");

    let control_block = spend_info
      .control_block(&(leaf_script.clone(), leaf_version()))
      .expect("spend info contains the committed leaf");

    Self {
      leaf_hash,
      spend_info,
      control_block,
    }
  }

  pub(crate) fn leaf_hash(&self) -> TapLeafHash {
    self.leaf_hash
  }

  pub(crate) fn control_block(&self) -> &ControlBlock {
    &self.control_block
  }

  pub(crate) fn script_pubkey(&self) -> Script {
    script::Builder::new()
      .push_opcode(opcodes::all::OP_PUSHNUM_1)
      .push_slice(&self.spend_info.output_key().as_inner().serialize())
      .into_script()
  }

  pub(crate) fn address(&self, params: &'static AddressParams) -> Address {
    Address::p2tr_tweaked(self.spend_info.output_key(), None, params)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn commitment(body: &str) -> Commitment {
    let key = internal_key(1);
    Commitment::build(
      key,
      &inscription("text/plain;charset=utf-8", body).reveal_script(key),
    )
  }

  #[test]
  fn build_is_deterministic() {
    let a = commitment("hello");
    let b = commitment("hello");

    assert_eq!(a.leaf_hash(), b.leaf_hash());
    assert_eq!(
      a.control_block().serialize(),
      b.control_block().serialize()
    );
    assert_eq!(
      a.address(&AddressParams::LIQUID),
      b.address(&AddressParams::LIQUID)
    );
  }

  #[test]
  fn leaf_script_changes_the_commitment() {
    assert_ne!(
      commitment("hello").address(&AddressParams::LIQUID),
      commitment("world").address(&AddressParams::LIQUID),
    );
  }

  #[test]
  fn address_matches_script_pubkey() {
    let commitment = commitment("hello");

    assert_eq!(
      commitment.address(&AddressParams::LIQUID).script_pubkey(),
      commitment.script_pubkey(),
    );
  }

  #[test]
  fn single_leaf_control_block_has_no_merkle_path() {
    assert_eq!(commitment("hello").control_block().serialize().len(), 33);
  }

  #[test]
  fn address_renders_for_the_given_network() {
    let commitment = commitment("hello");

    assert_ne!(
      commitment.address(&AddressParams::LIQUID).to_string(),
      commitment.address(&AddressParams::LIQUID_TESTNET).to_string(),
    );
  }
}
