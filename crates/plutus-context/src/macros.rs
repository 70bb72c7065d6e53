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

/// Build a `PlutusData::Constr` from a constructor index and a list of fields, each field being
/// anything that implements [`ToPlutusData`](crate::ToPlutusData).
///
/// ```
/// use plutus_context::{constr, PlutusData};
///
/// let unit: PlutusData = constr!(0);
/// let pair: PlutusData = constr!(0, [42_i64, true]);
/// ```
#[macro_export]
macro_rules! constr {
    ($index:expr, [$($field:expr),* $(,)?] $(,)?) => {{
        let index: u64 = $index;
        let maybe_constr_tag = $crate::to_constr_tag(index);
        $crate::PlutusData::Constr($crate::Constr {
            tag: maybe_constr_tag.unwrap_or($crate::DEFAULT_TAG),
            any_constructor: maybe_constr_tag.map_or(Some(index), |_| None),
            fields: $crate::MaybeIndefArray::Indef(vec![
                $($crate::ToPlutusData::to_plutus_data(&$field)),*
            ]),
        })
    }};

    ($index:expr $(,)?) => {{
        $crate::constr!($index, [])
    }};
}
