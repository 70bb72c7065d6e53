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

use std::collections::BTreeMap;

use crate::{
    Address, DatumHash, Interval, Lovelace, MintedValue, PlutusData, PolicyId, ScriptHash,
    StakeCredential, ToPlutusData, TransactionId, Value, VerificationKeyHash, constr,
    to_plutus_data::to_plutus_map,
};

/// A reference to an output of some transaction.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct OutputReference {
    pub transaction_id: TransactionId,
    pub output_index: u64,
}

impl ToPlutusData for OutputReference {
    fn to_plutus_data(&self) -> PlutusData {
        constr!(0, [constr!(0, [self.transaction_id]), self.output_index])
    }
}

/// Data attached to an output.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Datum {
    #[default]
    NoDatum,
    DatumHash(DatumHash),
    InlineDatum(PlutusData),
}

impl ToPlutusData for Datum {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            Datum::NoDatum => constr!(0),
            Datum::DatumHash(hash) => constr!(1, [hash]),
            Datum::InlineDatum(data) => constr!(2, [data]),
        }
    }
}

/// A transaction output, produced or consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub address: Address,
    pub value: Value,
    pub datum: Datum,
    pub reference_script: Option<ScriptHash>,
}

impl Output {
    pub fn lovelace(&self) -> Lovelace {
        self.value.lovelace()
    }
}

impl ToPlutusData for Output {
    fn to_plutus_data(&self) -> PlutusData {
        constr!(
            0,
            [
                self.address,
                self.value.to_plutus_data_with_lovelace(),
                self.datum,
                self.reference_script
            ]
        )
    }
}

/// A resolved transaction input: the reference and the output it points to.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub output_reference: OutputReference,
    pub output: Output,
}

impl Input {
    pub fn address(&self) -> &Address {
        &self.output.address
    }

    pub fn lovelace(&self) -> Lovelace {
        self.output.lovelace()
    }

    pub fn value(&self) -> &Value {
        &self.output.value
    }

    pub fn datum(&self) -> &Datum {
        &self.output.datum
    }
}

impl ToPlutusData for Input {
    fn to_plutus_data(&self) -> PlutusData {
        constr!(0, [self.output_reference, self.output])
    }
}

/// Why a script is being executed.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptPurpose {
    Spend(OutputReference),
    Mint(PolicyId),
    WithdrawFrom(StakeCredential),
    /// The certificate is kept opaque, in its data form.
    Publish(PlutusData),
}

/// Spending the output at index 0 of the empty transaction id.
impl Default for ScriptPurpose {
    fn default() -> Self {
        ScriptPurpose::Spend(OutputReference::default())
    }
}

impl ToPlutusData for ScriptPurpose {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            ScriptPurpose::Mint(policy_id) => constr!(0, [policy_id]),
            ScriptPurpose::Spend(output_reference) => constr!(1, [output_reference]),
            ScriptPurpose::WithdrawFrom(stake_credential) => constr!(2, [stake_credential]),
            ScriptPurpose::Publish(certificate) => constr!(3, [certificate]),
        }
    }
}

/// A transaction, as seen by a Plutus V2 script.
///
/// Every field is always present; an empty [`Transaction::default`] is a valid starting point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transaction {
    pub inputs: Vec<Input>,
    pub reference_inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub fee: Value,
    pub mint: MintedValue,
    pub certificates: Vec<PlutusData>,
    pub withdrawals: Vec<(StakeCredential, Lovelace)>,
    pub validity_range: Interval,
    pub extra_signatories: Vec<VerificationKeyHash>,
    pub redeemers: Vec<(ScriptPurpose, PlutusData)>,
    pub datums: BTreeMap<DatumHash, PlutusData>,
    pub id: TransactionId,
}

// Reference: https://github.com/IntersectMBO/plutus/blob/master/plutus-ledger-api/src/PlutusLedgerApi/V2/Contexts.hs
impl ToPlutusData for Transaction {
    fn to_plutus_data(&self) -> PlutusData {
        constr!(
            0,
            [
                self.inputs,
                self.reference_inputs,
                self.outputs,
                self.fee.to_plutus_data_with_lovelace(),
                self.mint,
                self.certificates,
                to_plutus_map(self.withdrawals.iter().map(|(k, v)| (k, v))),
                self.validity_range,
                self.extra_signatories,
                to_plutus_map(self.redeemers.iter().map(|(k, v)| (k, v))),
                self.datums,
                constr!(0, [self.id]),
            ]
        )
    }
}

/// What a validator receives as its last argument.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptContext {
    pub transaction: Transaction,
    pub purpose: ScriptPurpose,
}

impl ToPlutusData for ScriptContext {
    fn to_plutus_data(&self) -> PlutusData {
        constr!(0, [self.transaction, self.purpose])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constr, MaybeIndefArray};

    fn fields(data: PlutusData) -> Vec<PlutusData> {
        match data {
            PlutusData::Constr(Constr {
                fields: MaybeIndefArray::Indef(fields),
                ..
            }) => fields,
            other => panic!("not a constructor: {other:?}"),
        }
    }

    #[test]
    fn script_context_has_transaction_and_purpose() {
        let context = ScriptContext {
            purpose: ScriptPurpose::Mint(PolicyId::from("Policy")),
            ..ScriptContext::default()
        };

        let fields = fields(context.to_plutus_data());
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1], constr!(0, [PolicyId::from("Policy")]));
    }

    #[test]
    fn transaction_has_twelve_fields() {
        let transaction = Transaction {
            id: TransactionId::from("TxId"),
            ..Transaction::default()
        };

        let fields = fields(transaction.to_plutus_data());
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], Vec::<Input>::new().to_plutus_data());
        assert_eq!(fields[7], Interval::everything().to_plutus_data());
        assert_eq!(fields[11], constr!(0, [TransactionId::from("TxId")]));
    }

    #[test]
    fn default_purpose_spends_the_null_reference() {
        assert_eq!(
            ScriptPurpose::default().to_plutus_data(),
            constr!(1, [constr!(0, [constr!(0, [TransactionId::EMPTY]), 0_u64])])
        );
    }

    #[test]
    fn datums_encode_by_constructor() {
        let data = 42_i64.to_plutus_data();
        assert_eq!(Datum::NoDatum.to_plutus_data(), constr!(0));
        assert_eq!(
            Datum::DatumHash(DatumHash::of(&data)).to_plutus_data(),
            constr!(1, [DatumHash::of(&data)])
        );
        assert_eq!(
            Datum::InlineDatum(data.clone()).to_plutus_data(),
            constr!(2, [data])
        );
    }

    #[test]
    fn outputs_always_carry_lovelace() {
        let output = Output {
            address: Address::from_script("Validator"),
            value: Value::zero(),
            datum: Datum::NoDatum,
            reference_script: None,
        };

        let fields = fields(output.to_plutus_data());
        assert_eq!(fields[1], MintedValue::default().to_plutus_data());
        assert_eq!(fields[3], constr!(1));
    }
}
