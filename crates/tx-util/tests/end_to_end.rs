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

use plutus_context::{
    Address, AssetName, Constr, Datum, Interval, Lovelace, MaybeIndefArray, PlutusData, PolicyId,
    Quantity, ScriptContext, ToPlutusData, Value, VerificationKeyHash, constr,
};
use tx_util::builder::*;

const USER_ADA: Lovelace = 5_000_000;
const INPUT_ADA: Lovelace = 10_000_000;
const OUTPUT_ADA: Lovelace = 9_500_000;

fn triple(
    policy_id: &str,
    asset_name: &str,
    quantity: Quantity,
) -> (PolicyId, AssetName, Quantity) {
    (PolicyId::from(policy_id), AssetName::from(asset_name), quantity)
}

fn fields(data: PlutusData) -> Vec<PlutusData> {
    match data {
        PlutusData::Constr(Constr {
            fields: MaybeIndefArray::Indef(fields),
            ..
        }) => fields,
        other => panic!("not a constructor: {other:?}"),
    }
}

fn arbitrary_validator_scenario() -> ScriptContext {
    let nft = Value::from_asset("NftPolicy", "NftName", 1);
    let token = Value::from_asset("TokenPolicy", "TokenName", 10);
    let asset_1 = Value::from_asset("AssetPolicy1", "AssetName1", 1);
    let asset_2 = Value::from_asset("AssetPolicy2", "AssetName2", 1000);
    let asset_2_partial = Value::from_asset("AssetPolicy2", "AssetName2", 100);

    let old_datum = constr!(0, [1_i64]);
    let new_datum = constr!(0, [2_i64]);

    let tx_ref_in = new_tx_input(
        "TxRefInHash",
        Address::from_verification_key("PubKeyHash"),
        USER_ADA,
        Datum::NoDatum,
    )
    .with_asset(&token);

    let tx_in = new_tx_input(
        "TxInHash",
        Address::from_script("ValidatorHash"),
        INPUT_ADA,
        Datum::InlineDatum(old_datum),
    )
    .with_asset(&nft)
    .with_asset(&asset_1)
    .with_asset(&asset_2);

    let tx_out = new_tx_output(
        Address::from_script("ValidatorHash"),
        OUTPUT_ADA,
        Datum::InlineDatum(new_datum),
    )
    .add_asset(&nft)
    .add_asset(&asset_1)
    .add_asset(&asset_2_partial);

    build_txn_context(Interval::everything())
        .add_tx_ref_input(tx_ref_in)
        .add_tx_input(tx_in)
        .add_tx_output(tx_out)
        .add_signatory("PubKeyHash")
}

#[test]
fn builds_the_documented_scenario() {
    let context = arbitrary_validator_scenario();
    let transaction = &context.transaction;

    assert_eq!(transaction.reference_inputs.len(), 1);
    assert_eq!(transaction.inputs.len(), 1);
    assert_eq!(transaction.outputs.len(), 1);
    assert_eq!(
        transaction.extra_signatories,
        vec![VerificationKeyHash::from("PubKeyHash")]
    );

    let tx_ref_in = &transaction.reference_inputs[0];
    assert_eq!(tx_ref_in.lovelace(), USER_ADA);
    assert_eq!(
        tx_ref_in.value().flatten(),
        vec![triple("TokenPolicy", "TokenName", 10)]
    );

    let tx_in = &transaction.inputs[0];
    assert_eq!(tx_in.lovelace(), INPUT_ADA);
    assert_eq!(
        tx_in.value().flatten(),
        vec![
            triple("AssetPolicy1", "AssetName1", 1),
            triple("AssetPolicy2", "AssetName2", 1000),
            triple("NftPolicy", "NftName", 1),
        ]
    );

    let tx_out = &transaction.outputs[0];
    assert_eq!(tx_out.lovelace(), OUTPUT_ADA);
    assert_eq!(
        tx_out.value.flatten(),
        vec![
            triple("AssetPolicy1", "AssetName1", 1),
            triple("AssetPolicy2", "AssetName2", 100),
            triple("NftPolicy", "NftName", 1),
        ]
    );

    assert!(transaction.mint.is_zero());
}

#[test]
fn encodes_the_documented_scenario() {
    let context = arbitrary_validator_scenario();

    let context_fields = fields(context.to_plutus_data());
    assert_eq!(context_fields.len(), 2);

    let tx_info = fields(context_fields[0].clone());
    assert_eq!(tx_info.len(), 12);
    assert_eq!(tx_info[0], context.transaction.inputs.to_plutus_data());
    assert_eq!(
        tx_info[1],
        context.transaction.reference_inputs.to_plutus_data()
    );
    assert_eq!(tx_info[2], context.transaction.outputs.to_plutus_data());
    assert_eq!(
        tx_info[8],
        vec![VerificationKeyHash::from("PubKeyHash")].to_plutus_data()
    );

    let tx_in = fields(context.transaction.inputs[0].to_plutus_data());
    assert_eq!(
        tx_in[0],
        constr!(0, [constr!(0, [plutus_context::TransactionId::from("TxInHash")]), 0_u64])
    );
}

#[test]
fn minting_scenario() {
    let policy_id = PolicyId::from("NftPolicy");
    let minted = Value::from_asset(policy_id.clone(), "NftName", 1);

    let context = build_txn_context(Interval::between(0_u64, 60_000_u64))
        .add_tx_output(
            new_tx_output(
                Address::from_verification_key("PubKeyHash"),
                2_000_000,
                Datum::NoDatum,
            )
            .add_asset(&minted),
        )
        .mint_assets(policy_id.clone(), minted.clone())
        .add_signatory("PubKeyHash");

    assert_eq!(
        context.purpose,
        plutus_context::ScriptPurpose::Mint(policy_id)
    );
    assert_eq!(*context.transaction.mint, minted);
    assert!(context.transaction.validity_range.contains(30_000_u64));
}
