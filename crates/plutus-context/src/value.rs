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

use std::{
    collections::{BTreeMap, btree_map::Entry},
    ops::{Add, Deref, Neg},
};

use crate::{AssetName, KeyValuePairs, PlutusData, PolicyId, ToPlutusData};

/// A quantity of some asset. Signed, since values also describe burns and deltas.
///
/// Wide enough for any sum of on-chain quantities (those are bounded by `u64::MAX`); arithmetic
/// saturates at the bounds instead of overflowing.
pub type Quantity = i128;

/// A quantity of lovelace.
pub type Lovelace = Quantity;

/// The currency symbol of Ada in Plutus.
pub const ADA_POLICY_ID: PolicyId = PolicyId::EMPTY;

/// The token name of Ada in Plutus.
pub const ADA_ASSET_NAME: AssetName = AssetName::EMPTY;

/// A multi-asset value: some lovelace and a map of native assets.
///
/// Lovelace is kept apart from native assets, but both live in the same algebra: adding under
/// the Ada policy and asset name (both empty) adds lovelace. Native assets never hold zero
/// quantities, and no policy is ever left without assets; this holds for values loaded from JSON
/// too.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawValue")]
pub struct Value {
    lovelace: Lovelace,
    assets: BTreeMap<PolicyId, BTreeMap<AssetName, Quantity>>,
}

/// A [`Value`] as found in JSON, before normalisation.
#[derive(serde::Deserialize)]
struct RawValue {
    #[serde(default)]
    lovelace: Lovelace,
    #[serde(default)]
    assets: BTreeMap<PolicyId, BTreeMap<AssetName, Quantity>>,
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        raw.assets
            .into_iter()
            .flat_map(|(policy_id, tokens)| {
                tokens
                    .into_iter()
                    .map(move |(asset_name, quantity)| (policy_id.clone(), asset_name, quantity))
            })
            .collect::<Value>()
            .merge(&Value::from_lovelace(raw.lovelace))
    }
}

impl Value {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_lovelace(lovelace: Lovelace) -> Self {
        Self {
            lovelace,
            assets: BTreeMap::new(),
        }
    }

    pub fn from_asset(
        policy_id: impl Into<PolicyId>,
        asset_name: impl Into<AssetName>,
        quantity: Quantity,
    ) -> Self {
        Self::zero().add(policy_id, asset_name, quantity)
    }

    /// Add some quantity of a single asset, dropping the entry should it cancel out.
    pub fn add(
        mut self,
        policy_id: impl Into<PolicyId>,
        asset_name: impl Into<AssetName>,
        quantity: Quantity,
    ) -> Self {
        let policy_id = policy_id.into();
        let asset_name = asset_name.into();

        if quantity == 0 {
            return self;
        }

        if policy_id == ADA_POLICY_ID && asset_name == ADA_ASSET_NAME {
            self.lovelace = self.lovelace.saturating_add(quantity);
            return self;
        }

        match self.assets.entry(policy_id) {
            Entry::Vacant(entry) => {
                entry.insert(BTreeMap::from([(asset_name, quantity)]));
            }
            Entry::Occupied(mut entry) => {
                let tokens = entry.get_mut();
                let total = tokens
                    .get(&asset_name)
                    .copied()
                    .unwrap_or_default()
                    .saturating_add(quantity);
                if total == 0 {
                    tokens.remove(&asset_name);
                } else {
                    tokens.insert(asset_name, total);
                }

                if tokens.is_empty() {
                    entry.remove();
                }
            }
        }

        self
    }

    /// Key-wise sum of two values.
    pub fn merge(self, other: &Value) -> Self {
        let lovelace = self.lovelace.saturating_add(other.lovelace);
        other
            .assets
            .iter()
            .flat_map(|(policy_id, tokens)| {
                tokens
                    .iter()
                    .map(move |(asset_name, quantity)| (policy_id, asset_name, *quantity))
            })
            .fold(
                Self { lovelace, ..self },
                |value, (policy_id, asset_name, quantity)| {
                    value.add(policy_id.clone(), asset_name.clone(), quantity)
                },
            )
    }

    pub fn negate(self) -> Self {
        Self {
            lovelace: self.lovelace.saturating_neg(),
            assets: self
                .assets
                .into_iter()
                .map(|(policy_id, tokens)| {
                    (
                        policy_id,
                        tokens
                            .into_iter()
                            .map(|(asset_name, quantity)| {
                                (asset_name, quantity.saturating_neg())
                            })
                            .collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn lovelace(&self) -> Lovelace {
        self.lovelace
    }

    /// Quantity held of some asset, zero when absent.
    pub fn quantity_of(&self, policy_id: &PolicyId, asset_name: &AssetName) -> Quantity {
        if policy_id == &ADA_POLICY_ID && asset_name == &ADA_ASSET_NAME {
            return self.lovelace;
        }

        self.assets
            .get(policy_id)
            .and_then(|tokens| tokens.get(asset_name))
            .copied()
            .unwrap_or_default()
    }

    pub fn tokens(&self, policy_id: &PolicyId) -> Option<&BTreeMap<AssetName, Quantity>> {
        self.assets.get(policy_id)
    }

    /// Policies of all native assets, in ascending order.
    pub fn policies(&self) -> impl Iterator<Item = &PolicyId> {
        self.assets.keys()
    }

    pub fn assets(&self) -> &BTreeMap<PolicyId, BTreeMap<AssetName, Quantity>> {
        &self.assets
    }

    /// All native assets as (policy, name, quantity) triples, in ascending order. Lovelace is
    /// not part of it.
    pub fn flatten(&self) -> Vec<(PolicyId, AssetName, Quantity)> {
        self.assets
            .iter()
            .flat_map(|(policy_id, tokens)| {
                tokens.iter().map(move |(asset_name, quantity)| {
                    (policy_id.clone(), asset_name.clone(), *quantity)
                })
            })
            .collect()
    }

    pub fn without_lovelace(self) -> Self {
        Self {
            lovelace: 0,
            ..self
        }
    }

    pub fn is_zero(&self) -> bool {
        self.lovelace == 0 && self.assets.is_empty()
    }

    /// Encode as a Plutus `Value`: a map from currency symbol to a map from token name to
    /// quantity, with Ada under the empty currency symbol.
    fn encode(&self, with_zero_lovelace: bool) -> PlutusData {
        let mut ada = Vec::new();
        if with_zero_lovelace || self.lovelace != 0 {
            ada.push((
                ADA_ASSET_NAME.to_plutus_data(),
                self.lovelace.to_plutus_data(),
            ));
        }

        let mut entries = Vec::with_capacity(self.assets.len() + 1);
        for (policy_id, tokens) in &self.assets {
            let tokens = tokens
                .iter()
                .map(|(asset_name, quantity)| {
                    (asset_name.to_plutus_data(), quantity.to_plutus_data())
                })
                .collect::<Vec<_>>();

            // Tokens explicitly minted under the empty policy share Ada's entry.
            if policy_id == &ADA_POLICY_ID {
                ada.extend(tokens);
            } else {
                entries.push((
                    policy_id.to_plutus_data(),
                    PlutusData::Map(KeyValuePairs::Def(tokens)),
                ));
            }
        }

        if !ada.is_empty() {
            entries.insert(
                0,
                (
                    ADA_POLICY_ID.to_plutus_data(),
                    PlutusData::Map(KeyValuePairs::Def(ada)),
                ),
            );
        }

        PlutusData::Map(KeyValuePairs::Def(entries))
    }

    /// Encoding used for fees, which always carry an Ada entry.
    pub(crate) fn to_plutus_data_with_lovelace(&self) -> PlutusData {
        self.encode(true)
    }
}

impl ToPlutusData for Value {
    fn to_plutus_data(&self) -> PlutusData {
        self.encode(false)
    }
}

impl Add<&Value> for Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Self::Output {
        self.merge(rhs)
    }
}

impl Add<Value> for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Self::Output {
        self.merge(&rhs)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl FromIterator<(PolicyId, AssetName, Quantity)> for Value {
    fn from_iter<I: IntoIterator<Item = (PolicyId, AssetName, Quantity)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::zero(), |value, (policy_id, asset_name, quantity)| {
                value.add(policy_id, asset_name, quantity)
            })
    }
}

/// Assets minted (positive quantities) or burnt (negative quantities) by a transaction.
///
/// Same algebra as [`Value`]; in Plutus V1 and V2 the ledger always includes a zero Ada entry
/// in the minted value, which this type reproduces when encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MintedValue(Value);

impl MintedValue {
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for MintedValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Deref for MintedValue {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ToPlutusData for MintedValue {
    fn to_plutus_data(&self) -> PlutusData {
        self.0.encode(true)
    }
}
