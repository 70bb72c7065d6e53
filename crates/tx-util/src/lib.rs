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

//! Utilities to write validator tests.
//!
//! The [`builder`] assembles [`ScriptContext`](plutus_context::ScriptContext)s one piece at a
//! time, so that each test can describe the transaction it cares about and nothing else:
//!
//! ```
//! use plutus_context::{Address, Datum, Interval, ToPlutusData, Value};
//! use tx_util::builder::*;
//!
//! let nft = Value::from_asset("NftPolicy", "NftName", 1);
//!
//! let tx_in = new_tx_input("TxInHash", Address::from_script("ValidatorHash"), 2_000_000, Datum::NoDatum)
//!     .with_asset(&nft);
//!
//! let tx_out = new_tx_output(Address::from_verification_key("PubKeyHash"), 2_000_000, Datum::NoDatum)
//!     .add_asset(&nft);
//!
//! let context = build_txn_context(Interval::between(0_u64, 1_000_u64))
//!     .add_tx_input(tx_in)
//!     .add_tx_output(tx_out)
//!     .add_signatory("PubKeyHash");
//!
//! // Ready to be applied to a compiled validator.
//! let _argument = context.to_plutus_data();
//! ```

pub mod builder;
