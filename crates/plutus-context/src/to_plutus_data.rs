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

use crate::{BigInt, BoundedBytes, Int, KeyValuePairs, MaybeIndefArray, PlutusData, constr};

/// CBOR tag used for constructors whose index doesn't have a compact tag.
pub const DEFAULT_TAG: u64 = 102;

/// Compact CBOR tag of a constructor index, when there's one.
///
/// Indexes 0 to 6 map onto tags 121 to 127; indexes 7 to 127 onto tags 1280 to 1400. Anything
/// else is encoded under [`DEFAULT_TAG`] with an explicit constructor index.
pub fn to_constr_tag(index: u64) -> Option<u64> {
    if index <= 6 {
        Some(121 + index)
    } else if index <= 127 {
        Some(1280 - 7 + index)
    } else {
        None
    }
}

/// Serializing a type to PlutusData, which can then be handed over to a validator.
pub trait ToPlutusData {
    fn to_plutus_data(&self) -> PlutusData;
}

/// Encode a sequence of key/value pairs as a Plutus map, preserving their order.
pub fn to_plutus_map<'a, K, V, I>(pairs: I) -> PlutusData
where
    K: ToPlutusData + 'a,
    V: ToPlutusData + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    PlutusData::Map(KeyValuePairs::Def(
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_plutus_data(), value.to_plutus_data()))
            .collect(),
    ))
}

impl ToPlutusData for bool {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            false => constr!(0),
            true => constr!(1),
        }
    }
}

/// Integers within the CBOR major types 0 and 1 (i.e. -2^64 to 2^64 - 1) are plain integers;
/// only those beyond become bignums, so every integer has exactly one encoding.
impl ToPlutusData for i128 {
    fn to_plutus_data(&self) -> PlutusData {
        PlutusData::BigInt(match Int::try_from(*self) {
            Ok(int) => BigInt::Int(int),
            // A negative bignum holds -1 - n.
            Err(_) if *self < 0 => BigInt::BigNInt(to_big_endian((!*self) as u128)),
            Err(_) => BigInt::BigUInt(to_big_endian(*self as u128)),
        })
    }
}

impl ToPlutusData for i64 {
    fn to_plutus_data(&self) -> PlutusData {
        i128::from(*self).to_plutus_data()
    }
}

impl ToPlutusData for u64 {
    fn to_plutus_data(&self) -> PlutusData {
        i128::from(*self).to_plutus_data()
    }
}

fn to_big_endian(magnitude: u128) -> BoundedBytes {
    let bytes = magnitude.to_be_bytes();
    let leading_zeros = bytes.iter().take_while(|byte| **byte == 0).count();
    BoundedBytes::from(bytes[leading_zeros..].to_vec())
}

impl<T: ToPlutusData> ToPlutusData for Vec<T> {
    fn to_plutus_data(&self) -> PlutusData {
        PlutusData::Array(MaybeIndefArray::Def(
            self.iter().map(|a| a.to_plutus_data()).collect(),
        ))
    }
}

/// Plutus' `Maybe`: `Just` is the first constructor, `Nothing` the second.
impl<T: ToPlutusData> ToPlutusData for Option<T> {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            Some(data) => constr!(0, [data]),
            None => constr!(1),
        }
    }
}

impl<K, V> ToPlutusData for BTreeMap<K, V>
where
    K: ToPlutusData + Ord,
    V: ToPlutusData,
{
    fn to_plutus_data(&self) -> PlutusData {
        to_plutus_map(self.iter())
    }
}

impl ToPlutusData for PlutusData {
    fn to_plutus_data(&self) -> PlutusData {
        self.clone()
    }
}

impl<T: ToPlutusData> ToPlutusData for &T {
    fn to_plutus_data(&self) -> PlutusData {
        T::to_plutus_data(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, Some(121))]
    #[test_case(6, Some(127))]
    #[test_case(7, Some(1280))]
    #[test_case(127, Some(1400))]
    #[test_case(128, None)]
    fn constr_tags(index: u64, expected: Option<u64>) {
        assert_eq!(to_constr_tag(index), expected);
    }

    #[test]
    fn large_constructor_index_falls_back_to_default_tag() {
        match constr!(200) {
            PlutusData::Constr(constr) => {
                assert_eq!(constr.tag, DEFAULT_TAG);
                assert_eq!(constr.any_constructor, Some(200));
            }
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[test]
    fn maybe_follows_plutus_constructor_order() {
        assert_eq!(Some(1_i64).to_plutus_data(), constr!(0, [1_i64]));
        assert_eq!(None::<i64>.to_plutus_data(), constr!(1));
    }

    #[test_case(u64::MAX.into(); "largest unsigned")]
    #[test_case(-i128::from(u64::MAX) - 1; "smallest negative")]
    #[test_case(i64::MAX.into(); "largest signed")]
    #[test_case(0; "zero")]
    fn machine_integers_stay_plain(n: i128) {
        assert!(matches!(n.to_plutus_data(), PlutusData::BigInt(BigInt::Int(_))));
    }

    #[test]
    fn integers_have_a_single_encoding() {
        assert_eq!(u64::MAX.to_plutus_data(), i128::from(u64::MAX).to_plutus_data());
        assert_eq!(42_u64.to_plutus_data(), 42_i64.to_plutus_data());
        assert_eq!((-42_i64).to_plutus_data(), (-42_i128).to_plutus_data());
    }

    #[test_case(i128::from(u64::MAX) + 1, [&[1][..], &[0; 8]]; "just above")]
    #[test_case(-i128::from(u64::MAX) - 2, [&[1][..], &[0; 8]]; "just below")]
    #[test_case(i128::MAX, [&[0x7F][..], &[0xFF; 15]]; "upper bound")]
    #[test_case(i128::MIN, [&[0x7F][..], &[0xFF; 15]]; "lower bound")]
    fn wide_integers_become_bignums(n: i128, magnitude: [&[u8]; 2]) {
        let magnitude = BoundedBytes::from(magnitude.concat());
        let expected = if n < 0 {
            BigInt::BigNInt(magnitude)
        } else {
            BigInt::BigUInt(magnitude)
        };
        assert_eq!(n.to_plutus_data(), PlutusData::BigInt(expected));
    }
}
