// Copyright 2025 PRAGMA
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use pallas_crypto::hash::{Hash, Hasher};
use thiserror::Error;

use crate::{PlutusData, ToPlutusData};

/// Errors that may occur when parsing an identifier from its hex representation.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("invalid hex identifier: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

// Identifiers are opaque byte strings on-chain: validators never check their length. Tests
// commonly rely on this and use readable names (e.g. "TxInHash") in place of real digests.
macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Vec<u8>);

        impl $name {
            pub const EMPTY: Self = Self(Vec::new());

            pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
                Self(bytes.into())
            }

            pub fn from_hex(s: &str) -> Result<Self, HashError> {
                Ok(Self(hex::decode(s)?))
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        /// The raw UTF-8 bytes of the text; use [`Self::from_hex`] for hex-encoded digests.
        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.as_bytes().to_vec())
            }
        }

        impl From<&[u8]> for $name {
            fn from(bytes: &[u8]) -> Self {
                Self(bytes.to_vec())
            }
        }

        impl From<Vec<u8>> for $name {
            fn from(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }
        }

        impl<const BYTES: usize> From<Hash<BYTES>> for $name {
            fn from(hash: Hash<BYTES>) -> Self {
                Self(hash.to_vec())
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(&self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(&self.0))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&hex::encode(&self.0))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_hex(&text).map_err(serde::de::Error::custom)
            }
        }

        impl ToPlutusData for $name {
            fn to_plutus_data(&self) -> PlutusData {
                PlutusData::BoundedBytes(self.0.clone().into())
            }
        }
    };
}

identifier!(
    /// Hash of a transaction body, `Hash<Blake2b_256, Transaction>` on-chain.
    TransactionId
);

identifier!(
    /// Hash of a minting policy script; the empty policy id stands for Ada.
    PolicyId
);

identifier!(
    /// Name of an asset under a policy, at most 32 bytes on-chain.
    AssetName
);

identifier!(
    /// Blake2b-224 hash of a verification key. Also the type of extra signatories.
    VerificationKeyHash
);

identifier!(
    /// Blake2b-224 hash of a script (validator or native).
    ScriptHash
);

identifier!(
    /// Blake2b-256 hash of a datum.
    DatumHash
);

impl DatumHash {
    /// Hash a datum the way the ledger does: blake2b-256 of its CBOR serialisation.
    pub fn of(datum: &PlutusData) -> Self {
        Self::from(Hasher::<256>::hash_cbor(datum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn text_identifiers_keep_their_bytes() {
        let policy = PolicyId::from("NftPolicy");
        assert_eq!(policy.as_bytes(), b"NftPolicy");
        assert_eq!(policy.to_string(), hex::encode("NftPolicy"));
    }

    #[test_case("", &[]; "empty")]
    #[test_case("00ff", &[0x00, 0xff]; "lowercase")]
    #[test_case("ABCD", &[0xab, 0xcd]; "uppercase")]
    fn from_hex_success(s: &str, expected: &[u8]) {
        assert_eq!(ScriptHash::from_hex(s).unwrap().as_bytes(), expected);
    }

    #[test_case("0"; "odd length")]
    #[test_case("zz"; "not hex")]
    fn from_hex_failures(s: &str) {
        assert!(matches!(
            ScriptHash::from_hex(s),
            Err(HashError::InvalidHex(..))
        ));
    }

    #[test]
    fn from_pallas_hash() {
        let hash: Hash<28> = Hash::new([7; 28]);
        assert_eq!(VerificationKeyHash::from(hash).as_bytes(), &[7; 28]);
    }

    #[test]
    fn serialises_as_hex_string() {
        let id = TransactionId::from("TxInHash");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", hex::encode("TxInHash")));
        assert_eq!(serde_json::from_str::<TransactionId>(&json).unwrap(), id);
    }

    #[test]
    fn datum_hash_is_32_bytes() {
        let datum = 42_i64.to_plutus_data();
        let hash = DatumHash::of(&datum);
        assert_eq!(hash.as_bytes().len(), 32);
        assert_eq!(hash, DatumHash::of(&datum));
        assert_ne!(hash, DatumHash::of(&43_i64.to_plutus_data()));
    }
}
