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

//! Incremental construction of script contexts.
//!
//! Every operation consumes what it refines and hands back the refined value, so that a context
//! reads as a pipeline starting from [`build_txn_context`]. Operations come in two flavours with
//! identical semantics: free functions, and methods of the [`ScriptContextBuilder`],
//! [`InputBuilder`] and [`OutputBuilder`] traits for method chaining.
//!
//! Nothing is validated here. A context may well be inconsistent (e.g. minting without a
//! matching purpose, negative lovelace); that's up to the validator under test to reject.

use plutus_context::{
    Address, Datum, DatumHash, Input, Interval, Lovelace, MintedValue, Output, OutputReference,
    PlutusData, PolicyId, ScriptContext, ScriptHash, ScriptPurpose, StakeCredential, Transaction,
    TransactionId, Value, VerificationKeyHash,
};
use tracing::trace;

const EVENT_TARGET: &str = "tx_util::builder";

/// Output index of inputs built with [`new_tx_input`].
pub const DEFAULT_OUTPUT_INDEX: u64 = 0;

// ----------------------------------------------------------------------------
// Constructors
// ----------------------------------------------------------------------------

/// Construct a transaction input holding only lovelace, at [`DEFAULT_OUTPUT_INDEX`].
pub fn new_tx_input(
    tx_hash: impl Into<TransactionId>,
    address: Address,
    lovelace: Lovelace,
    datum: Datum,
) -> Input {
    new_tx_input_at(tx_hash, DEFAULT_OUTPUT_INDEX, address, lovelace, datum)
}

/// Like [`new_tx_input`], for an output at a specific index of the transaction `tx_hash`.
pub fn new_tx_input_at(
    tx_hash: impl Into<TransactionId>,
    output_index: u64,
    address: Address,
    lovelace: Lovelace,
    datum: Datum,
) -> Input {
    Input {
        output_reference: OutputReference {
            transaction_id: tx_hash.into(),
            output_index,
        },
        output: new_tx_output(address, lovelace, datum),
    }
}

/// Construct a transaction output holding only lovelace.
pub fn new_tx_output(address: Address, lovelace: Lovelace, datum: Datum) -> Output {
    Output {
        address,
        value: Value::from_lovelace(lovelace),
        datum,
        reference_script: None,
    }
}

/// The starting point of every script context: an empty transaction valid over
/// `validity_range`.
pub fn build_txn_context(validity_range: Interval) -> ScriptContext {
    ScriptContext {
        transaction: Transaction {
            validity_range,
            ..Transaction::default()
        },
        purpose: ScriptPurpose::default(),
    }
}

// ----------------------------------------------------------------------------
// Inputs & outputs
// ----------------------------------------------------------------------------

pub trait InputBuilder {
    /// Add asset(s) to the input's value.
    fn with_asset(self, asset: &Value) -> Self;
}

impl InputBuilder for Input {
    fn with_asset(mut self, asset: &Value) -> Self {
        self.output = self.output.add_asset(asset);
        self
    }
}

pub trait OutputBuilder {
    /// Add asset(s) to the output's value.
    fn add_asset(self, asset: &Value) -> Self;

    fn with_reference_script(self, script_hash: impl Into<ScriptHash>) -> Self;
}

impl OutputBuilder for Output {
    fn add_asset(mut self, asset: &Value) -> Self {
        self.value = self.value.merge(asset);
        self
    }

    fn with_reference_script(mut self, script_hash: impl Into<ScriptHash>) -> Self {
        self.reference_script = Some(script_hash.into());
        self
    }
}

/// Add asset(s) to a transaction input.
pub fn with_asset_of_tx_input(input: Input, asset: &Value) -> Input {
    input.with_asset(asset)
}

/// Add asset(s) to a transaction output.
pub fn add_asset_to_tx_output(output: Output, asset: &Value) -> Output {
    output.add_asset(asset)
}

/// Attach a reference script to a transaction output.
pub fn with_reference_script(output: Output, script_hash: impl Into<ScriptHash>) -> Output {
    output.with_reference_script(script_hash)
}

// ----------------------------------------------------------------------------
// Script context
// ----------------------------------------------------------------------------

pub trait ScriptContextBuilder {
    /// Push `tx_in` to `transaction.inputs`.
    fn add_tx_input(self, tx_in: Input) -> Self;

    /// Push `tx_ref_in` to `transaction.reference_inputs`.
    fn add_tx_ref_input(self, tx_ref_in: Input) -> Self;

    /// Push `tx_out` to `transaction.outputs`.
    fn add_tx_output(self, tx_out: Output) -> Self;

    /// Push `signatory` to `transaction.extra_signatories`. Duplicates are kept.
    fn add_signatory(self, signatory: impl Into<VerificationKeyHash>) -> Self;

    /// Set the purpose to `Mint(policy_id)` and the minted value to `assets`, replacing both.
    fn mint_assets(self, policy_id: impl Into<PolicyId>, assets: impl Into<MintedValue>) -> Self;

    /// Set the purpose to spending the output at `output_reference`.
    fn spend(self, output_reference: OutputReference) -> Self;

    fn with_purpose(self, purpose: ScriptPurpose) -> Self;

    fn set_fee(self, lovelace: Lovelace) -> Self;

    /// Push a withdrawal of `amount` from the reward account of `credential`.
    fn add_withdrawal(self, credential: StakeCredential, amount: Lovelace) -> Self;

    /// Add `datum` to the witnessed datums, under its hash.
    fn add_datum(self, datum: PlutusData) -> Self;

    /// Push a redeemer for some (other) script of the transaction.
    fn add_redeemer(self, purpose: ScriptPurpose, redeemer: PlutusData) -> Self;

    fn with_transaction_id(self, id: impl Into<TransactionId>) -> Self;
}

impl ScriptContextBuilder for ScriptContext {
    fn add_tx_input(mut self, tx_in: Input) -> Self {
        self.transaction.inputs.push(tx_in);
        self
    }

    fn add_tx_ref_input(mut self, tx_ref_in: Input) -> Self {
        self.transaction.reference_inputs.push(tx_ref_in);
        self
    }

    fn add_tx_output(mut self, tx_out: Output) -> Self {
        self.transaction.outputs.push(tx_out);
        self
    }

    fn add_signatory(mut self, signatory: impl Into<VerificationKeyHash>) -> Self {
        self.transaction.extra_signatories.push(signatory.into());
        self
    }

    fn mint_assets(
        mut self,
        policy_id: impl Into<PolicyId>,
        assets: impl Into<MintedValue>,
    ) -> Self {
        let policy_id = policy_id.into();

        if !self.transaction.mint.is_zero() {
            trace!(
                target: EVENT_TARGET,
                policy_id = %policy_id,
                previous.purpose = ?self.purpose,
                "mint_assets.replacing"
            );
        }

        self.purpose = ScriptPurpose::Mint(policy_id);
        self.transaction.mint = assets.into();
        self
    }

    fn spend(self, output_reference: OutputReference) -> Self {
        self.with_purpose(ScriptPurpose::Spend(output_reference))
    }

    fn with_purpose(mut self, purpose: ScriptPurpose) -> Self {
        self.purpose = purpose;
        self
    }

    fn set_fee(mut self, lovelace: Lovelace) -> Self {
        if !self.transaction.fee.is_zero() {
            trace!(
                target: EVENT_TARGET,
                previous = self.transaction.fee.lovelace(),
                fee = lovelace,
                "set_fee.replacing"
            );
        }

        self.transaction.fee = Value::from_lovelace(lovelace);
        self
    }

    fn add_withdrawal(mut self, credential: StakeCredential, amount: Lovelace) -> Self {
        self.transaction.withdrawals.push((credential, amount));
        self
    }

    fn add_datum(mut self, datum: PlutusData) -> Self {
        let hash = DatumHash::of(&datum);

        if self.transaction.datums.contains_key(&hash) {
            tracing::event!(target: EVENT_TARGET, tracing::Level::TRACE, datum.hash = %hash, "add_datum.replacing");
        }

        self.transaction.datums.insert(hash, datum);
        self
    }

    fn add_redeemer(mut self, purpose: ScriptPurpose, redeemer: PlutusData) -> Self {
        self.transaction.redeemers.push((purpose, redeemer));
        self
    }

    fn with_transaction_id(mut self, id: impl Into<TransactionId>) -> Self {
        let id = id.into();

        if !self.transaction.id.is_empty() {
            trace!(
                target: EVENT_TARGET,
                previous = %self.transaction.id,
                id = %id,
                "with_transaction_id.replacing"
            );
        }

        self.transaction.id = id;
        self
    }
}

/// Push `tx_in` to `ScriptContext.transaction.inputs`.
pub fn add_tx_input(context: ScriptContext, tx_in: Input) -> ScriptContext {
    context.add_tx_input(tx_in)
}

/// Push `tx_ref_in` to `ScriptContext.transaction.reference_inputs`.
pub fn add_tx_ref_input(context: ScriptContext, tx_ref_in: Input) -> ScriptContext {
    context.add_tx_ref_input(tx_ref_in)
}

/// Push `tx_out` to `ScriptContext.transaction.outputs`.
pub fn add_tx_output(context: ScriptContext, tx_out: Output) -> ScriptContext {
    context.add_tx_output(tx_out)
}

/// Push `signatory` to `ScriptContext.transaction.extra_signatories`.
pub fn add_signatory(
    context: ScriptContext,
    signatory: impl Into<VerificationKeyHash>,
) -> ScriptContext {
    context.add_signatory(signatory)
}

/// Set `ScriptPurpose::Mint(policy_id)` and `Transaction.mint = assets`.
pub fn mint_assets(
    context: ScriptContext,
    policy_id: impl Into<PolicyId>,
    assets: impl Into<MintedValue>,
) -> ScriptContext {
    context.mint_assets(policy_id, assets)
}

/// Set `ScriptPurpose::Spend(output_reference)`.
pub fn spend(context: ScriptContext, output_reference: OutputReference) -> ScriptContext {
    context.spend(output_reference)
}

pub fn with_purpose(context: ScriptContext, purpose: ScriptPurpose) -> ScriptContext {
    context.with_purpose(purpose)
}

pub fn set_fee(context: ScriptContext, lovelace: Lovelace) -> ScriptContext {
    context.set_fee(lovelace)
}

pub fn add_withdrawal(
    context: ScriptContext,
    credential: StakeCredential,
    amount: Lovelace,
) -> ScriptContext {
    context.add_withdrawal(credential, amount)
}

pub fn add_datum(context: ScriptContext, datum: PlutusData) -> ScriptContext {
    context.add_datum(datum)
}

pub fn add_redeemer(
    context: ScriptContext,
    purpose: ScriptPurpose,
    redeemer: PlutusData,
) -> ScriptContext {
    context.add_redeemer(purpose, redeemer)
}

pub fn with_transaction_id(
    context: ScriptContext,
    id: impl Into<TransactionId>,
) -> ScriptContext {
    context.with_transaction_id(id)
}
