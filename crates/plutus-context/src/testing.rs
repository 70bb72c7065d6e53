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

use proptest::{collection, prelude::*, prop_compose, prop_oneof};

use crate::{
    Address, AssetName, Credential, Datum, DatumHash, Input, Output, OutputReference, PlutusData,
    PolicyId, Quantity, ScriptHash, StakeCredential, ToPlutusData, TransactionId, Value,
    VerificationKeyHash,
};

pub fn any_policy_id() -> impl Strategy<Value = PolicyId> {
    any::<[u8; 28]>().prop_map(|bytes| PolicyId::from(bytes.as_slice()))
}

pub fn any_asset_name() -> impl Strategy<Value = AssetName> {
    collection::vec(any::<u8>(), 0..=32).prop_map(AssetName::from)
}

pub fn any_transaction_id() -> impl Strategy<Value = TransactionId> {
    any::<[u8; 32]>().prop_map(|bytes| TransactionId::from(bytes.as_slice()))
}

pub fn any_verification_key_hash() -> impl Strategy<Value = VerificationKeyHash> {
    any::<[u8; 28]>().prop_map(|bytes| VerificationKeyHash::from(bytes.as_slice()))
}

pub fn any_script_hash() -> impl Strategy<Value = ScriptHash> {
    any::<[u8; 28]>().prop_map(|bytes| ScriptHash::from(bytes.as_slice()))
}

pub fn any_credential() -> impl Strategy<Value = Credential> {
    prop_oneof![
        any_verification_key_hash().prop_map(Credential::VerificationKey),
        any_script_hash().prop_map(Credential::Script),
    ]
}

pub fn any_stake_credential() -> impl Strategy<Value = StakeCredential> {
    prop_oneof![
        any_credential().prop_map(StakeCredential::Inline),
        (any::<u64>(), any::<u64>(), any::<u64>()).prop_map(
            |(slot_number, transaction_index, certificate_index)| StakeCredential::Pointer {
                slot_number,
                transaction_index,
                certificate_index,
            }
        ),
    ]
}

prop_compose! {
    pub fn any_address()(
        payment_credential in any_credential(),
        stake_credential in proptest::option::of(any_stake_credential()),
    ) -> Address {
        Address { payment_credential, stake_credential }
    }
}

/// Quantities spanning what an output can hold, either way.
pub fn any_quantity() -> impl Strategy<Value = Quantity> {
    -Quantity::from(u64::MAX)..=Quantity::from(u64::MAX)
}

prop_compose! {
    /// Values with a bounded number of assets.
    pub fn any_value()(
        lovelace in any_quantity(),
        assets in collection::vec(
            (any_policy_id(), any_asset_name(), any_quantity()),
            0..8,
        ),
    ) -> Value {
        assets.into_iter().collect::<Value>().merge(&Value::from_lovelace(lovelace))
    }
}

pub fn any_plutus_data() -> impl Strategy<Value = PlutusData> {
    any::<i64>().prop_map(|n| n.to_plutus_data())
}

pub fn any_datum() -> impl Strategy<Value = Datum> {
    prop_oneof![
        Just(Datum::NoDatum),
        any_plutus_data().prop_map(|data| Datum::DatumHash(DatumHash::of(&data))),
        any_plutus_data().prop_map(Datum::InlineDatum),
    ]
}

prop_compose! {
    pub fn any_output_reference()(
        transaction_id in any_transaction_id(),
        output_index in 0..256_u64,
    ) -> OutputReference {
        OutputReference { transaction_id, output_index }
    }
}

prop_compose! {
    pub fn any_output()(
        address in any_address(),
        value in any_value(),
        datum in any_datum(),
        reference_script in proptest::option::of(any_script_hash()),
    ) -> Output {
        Output { address, value, datum, reference_script }
    }
}

prop_compose! {
    pub fn any_input()(
        output_reference in any_output_reference(),
        output in any_output(),
    ) -> Input {
        Input { output_reference, output }
    }
}
