//! Wallets: a WIF private key and the P2PKH address it controls.

use bitcoin::secp256k1::SecretKey;
use bitcoin::{Address as BtcAddress, NetworkKind, PrivateKey, PublicKey};
use rand::RngCore;

use crate::error::SigningError;
use crate::shared::Address;
use crate::signing::secp;

/// An address plus the secp256k1 key that signs for it.
///
/// Immutable once created. `Debug` output redacts the key.
#[derive(Clone)]
pub struct Wallet {
    address: Address,
    private_key: PrivateKey,
}

impl Wallet {
    /// Generate a fresh random key (compressed, mainnet WIF).
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 32];
        // Out-of-range scalars are astronomically rare; draw again.
        let secret = loop {
            rng.fill_bytes(&mut bytes);
            if let Ok(sk) = SecretKey::from_slice(&bytes) {
                break sk;
            }
        };
        let private_key = PrivateKey::new(secret, NetworkKind::Main);
        let address = address_of(&private_key.public_key(secp()));
        Self {
            address,
            private_key,
        }
    }

    /// Generate `count` independent wallets.
    pub fn generate_many(count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::generate()).collect()
    }

    /// Import a WIF key and derive its address.
    pub fn from_wif(wif: &str) -> Result<Self, SigningError> {
        let private_key = parse_wif(wif)?;
        let address = address_of(&private_key.public_key(secp()));
        Ok(Self {
            address,
            private_key,
        })
    }

    /// Pair a caller-supplied address with a WIF key, as given.
    ///
    /// The address is not checked against the key; the service decides whether
    /// the pairing is acceptable.
    pub fn new(address: impl Into<Address>, wif: &str) -> Result<Self, SigningError> {
        Ok(Self {
            address: address.into(),
            private_key: parse_wif(wif)?,
        })
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The private key in wallet-import format.
    pub fn to_wif(&self) -> String {
        self.private_key.to_wif()
    }

    pub fn public_key(&self) -> PublicKey {
        self.private_key.public_key(secp())
    }

    /// Hex of the serialized public key, compressed per the WIF flag.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key().to_bytes())
    }

    /// Whether the stored address is the one derived from the key.
    pub fn address_matches_key(&self) -> bool {
        address_of(&self.public_key()) == self.address
    }

    pub(crate) fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

fn parse_wif(wif: &str) -> Result<PrivateKey, SigningError> {
    PrivateKey::from_wif(wif.trim()).map_err(|e| SigningError::InvalidWif(e.to_string()))
}

/// Mainnet P2PKH address of a public key.
pub(crate) fn address_of(public_key: &PublicKey) -> Address {
    Address::new(BtcAddress::p2pkh(public_key.pubkey_hash(), NetworkKind::Main).to_string())
}
