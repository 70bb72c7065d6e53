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

//! The on-chain view of a transaction, as a Plutus V2 validator receives it.
//!
//! Everything in here is plain data: identifiers, credentials, values, datums, validity
//! intervals and the transaction skeleton wrapped in a [`ScriptContext`]. The [`ToPlutusData`]
//! instances produce the exact data layout a compiled validator expects as its context argument.

pub use pallas_codec::utils::{Int, KeyValuePairs, MaybeIndefArray};
pub use pallas_primitives::{BigInt, BoundedBytes, Constr, PlutusData};

pub mod macros;

pub mod credential;
pub use credential::{Address, AddressError, Credential, StakeCredential};

pub mod hash;
pub use hash::{
    AssetName, DatumHash, HashError, PolicyId, ScriptHash, TransactionId, VerificationKeyHash,
};

pub mod interval;
pub use interval::{Interval, IntervalBound, IntervalBoundType, PosixTime};

pub mod to_plutus_data;
pub use to_plutus_data::{DEFAULT_TAG, ToPlutusData, to_constr_tag};

pub mod transaction;
pub use transaction::{
    Datum, Input, Output, OutputReference, ScriptContext, ScriptPurpose, Transaction,
};

pub mod value;
pub use value::{ADA_ASSET_NAME, ADA_POLICY_ID, Lovelace, MintedValue, Quantity, Value};

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
