pub(crate) use {super::*, elements::hashes::Hash};

pub(crate) fn inscription(content_type: &str, body: impl AsRef<[u8]>) -> Inscription {
  Inscription::new(content_type, body.as_ref().to_vec()).unwrap()
}

pub(crate) fn keypair(n: u8) -> Keypair {
  Keypair::from_seckey_slice(&Secp256k1::new(), &[n; 32]).unwrap()
}

pub(crate) fn internal_key(n: u8) -> XOnlyPublicKey {
  XOnlyPublicKey::from_keypair(&keypair(n)).0
}

pub(crate) fn txid(n: u8) -> Txid {
  Txid::from_slice(&[n; 32]).unwrap()
}

pub(crate) fn asset() -> AssetId {
  "5ac9f65c0efcc4775e0baec4ec03abdde22473cd3cf33c0419ca290e0751b225"
    .parse()
    .unwrap()
}

pub(crate) fn genesis_hash() -> BlockHash {
  Chain::Liquid.genesis_hash().unwrap()
}

pub(crate) fn change_address() -> Address {
  Address::p2tr(
    &Secp256k1::verification_only(),
    internal_key(9),
    None,
    None,
    &AddressParams::LIQUID,
  )
}
