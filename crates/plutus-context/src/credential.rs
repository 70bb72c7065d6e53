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

use pallas_addresses::{ShelleyAddress, ShelleyDelegationPart, ShelleyPaymentPart};
use thiserror::Error;

use crate::{PlutusData, ScriptHash, ToPlutusData, VerificationKeyHash, constr};

/// Errors that may occur when converting a ledger address into an [`Address`].
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("byron addresses cannot be represented in a script context")]
    ByronAddress,
    #[error("stake addresses have no payment credential")]
    StakeAddress,
    #[error("malformed address: {0}")]
    Malformed(#[from] pallas_addresses::Error),
}

/// A payment or delegation credential: the hash of either a verification key or a script.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Credential {
    VerificationKey(VerificationKeyHash),
    Script(ScriptHash),
}

impl ToPlutusData for Credential {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            Credential::VerificationKey(hash) => constr!(0, [hash]),
            Credential::Script(hash) => constr!(1, [hash]),
        }
    }
}

/// The staking part of an address, either a credential or a pointer to the certificate that
/// registered it.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum StakeCredential {
    Inline(Credential),
    Pointer {
        slot_number: u64,
        transaction_index: u64,
        certificate_index: u64,
    },
}

impl ToPlutusData for StakeCredential {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            StakeCredential::Inline(credential) => constr!(0, [credential]),
            StakeCredential::Pointer {
                slot_number,
                transaction_index,
                certificate_index,
            } => constr!(1, [slot_number, transaction_index, certificate_index]),
        }
    }
}

/// A Shelley address, as seen by a script: no network tag, no Byron addresses.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Address {
    pub payment_credential: Credential,
    pub stake_credential: Option<StakeCredential>,
}

impl Address {
    /// An address locked by a verification key, without delegation part.
    pub fn from_verification_key(hash: impl Into<VerificationKeyHash>) -> Self {
        Self {
            payment_credential: Credential::VerificationKey(hash.into()),
            stake_credential: None,
        }
    }

    /// An address locked by a script, without delegation part.
    pub fn from_script(hash: impl Into<ScriptHash>) -> Self {
        Self {
            payment_credential: Credential::Script(hash.into()),
            stake_credential: None,
        }
    }

    pub fn with_delegation_key(self, hash: impl Into<VerificationKeyHash>) -> Self {
        self.with_stake_credential(StakeCredential::Inline(Credential::VerificationKey(
            hash.into(),
        )))
    }

    pub fn with_delegation_script(self, hash: impl Into<ScriptHash>) -> Self {
        self.with_stake_credential(StakeCredential::Inline(Credential::Script(hash.into())))
    }

    pub fn with_stake_credential(self, stake_credential: StakeCredential) -> Self {
        Self {
            stake_credential: Some(stake_credential),
            ..self
        }
    }

    /// Parse a bech32-encoded Shelley address (e.g. `addr_test1...`).
    pub fn from_bech32(s: &str) -> Result<Self, AddressError> {
        Self::try_from(&pallas_addresses::Address::from_bech32(s)?)
    }

    pub fn is_locked_by_script(&self) -> bool {
        matches!(self.payment_credential, Credential::Script(_))
    }
}

impl ToPlutusData for Address {
    fn to_plutus_data(&self) -> PlutusData {
        constr!(0, [self.payment_credential, self.stake_credential])
    }
}

impl From<&ShelleyAddress> for Address {
    fn from(address: &ShelleyAddress) -> Self {
        let payment_credential = match address.payment() {
            ShelleyPaymentPart::Key(hash) => Credential::VerificationKey((*hash).into()),
            ShelleyPaymentPart::Script(hash) => Credential::Script((*hash).into()),
        };

        let stake_credential = match address.delegation() {
            ShelleyDelegationPart::Key(hash) => Some(StakeCredential::Inline(
                Credential::VerificationKey((*hash).into()),
            )),
            ShelleyDelegationPart::Script(hash) => {
                Some(StakeCredential::Inline(Credential::Script((*hash).into())))
            }
            ShelleyDelegationPart::Pointer(pointer) => Some(StakeCredential::Pointer {
                slot_number: pointer.slot(),
                transaction_index: pointer.tx_idx(),
                certificate_index: pointer.cert_idx(),
            }),
            ShelleyDelegationPart::Null => None,
        };

        Self {
            payment_credential,
            stake_credential,
        }
    }
}

impl TryFrom<&pallas_addresses::Address> for Address {
    type Error = AddressError;

    fn try_from(address: &pallas_addresses::Address) -> Result<Self, Self::Error> {
        match address {
            pallas_addresses::Address::Shelley(shelley) => Ok(Self::from(shelley)),
            pallas_addresses::Address::Stake(_) => Err(AddressError::StakeAddress),
            pallas_addresses::Address::Byron(_) => Err(AddressError::ByronAddress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pallas_addresses::Network;
    use pallas_crypto::hash::Hash;

    #[test]
    fn from_shelley_address() {
        let payment: Hash<28> = Hash::new([1; 28]);
        let delegation: Hash<28> = Hash::new([2; 28]);
        let shelley = ShelleyAddress::new(
            Network::Testnet,
            ShelleyPaymentPart::Script(payment),
            ShelleyDelegationPart::Key(delegation),
        );

        let address = Address::try_from(&pallas_addresses::Address::Shelley(shelley)).unwrap();

        assert_eq!(
            address,
            Address::from_script(payment).with_delegation_key(delegation)
        );
        assert!(address.is_locked_by_script());
    }

    #[test]
    fn enterprise_address_has_no_stake_credential() {
        let shelley = ShelleyAddress::new(
            Network::Mainnet,
            ShelleyPaymentPart::Key(Hash::new([3; 28])),
            ShelleyDelegationPart::Null,
        );

        assert_eq!(Address::from(&shelley).stake_credential, None);
    }

    #[test]
    fn malformed_bech32_is_rejected() {
        assert!(matches!(
            Address::from_bech32("addr_test1notanaddress"),
            Err(AddressError::Malformed(..))
        ));
    }

    #[test]
    fn encodes_as_plutus_address() {
        let address = Address::from_verification_key("PubKeyHash");
        assert_eq!(
            address.to_plutus_data(),
            constr!(
                0,
                [
                    constr!(0, [VerificationKeyHash::from("PubKeyHash")]),
                    constr!(1)
                ]
            )
        );
    }
}
