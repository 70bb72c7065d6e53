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

use std::fmt;

use crate::{PlutusData, ToPlutusData, constr};

/// A POSIX timestamp, in milliseconds.
#[derive(
    Clone,
    Debug,
    Copy,
    PartialEq,
    PartialOrd,
    Ord,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    Default,
)]
#[repr(transparent)]
pub struct PosixTime(u64);

impl PosixTime {
    pub fn new(ms: u64) -> Self {
        Self(ms)
    }
}

impl fmt::Display for PosixTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl From<u64> for PosixTime {
    fn from(ms: u64) -> PosixTime {
        PosixTime(ms)
    }
}

impl From<PosixTime> for u64 {
    fn from(time: PosixTime) -> u64 {
        time.0
    }
}

impl ToPlutusData for PosixTime {
    fn to_plutus_data(&self) -> PlutusData {
        self.0.to_plutus_data()
    }
}

#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum IntervalBoundType {
    NegativeInfinity,
    Finite(PosixTime),
    PositiveInfinity,
}

#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntervalBound {
    pub bound_type: IntervalBoundType,
    pub is_inclusive: bool,
}

/// A time window, each end either open or closed, finite or not.
///
/// Defaults to [`Interval::everything`].
#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Interval {
    pub lower_bound: IntervalBound,
    pub upper_bound: IntervalBound,
}

impl Interval {
    /// `(-∞, +∞)`
    pub fn everything() -> Self {
        Self {
            lower_bound: IntervalBound {
                bound_type: IntervalBoundType::NegativeInfinity,
                is_inclusive: true,
            },
            upper_bound: IntervalBound {
                bound_type: IntervalBoundType::PositiveInfinity,
                is_inclusive: true,
            },
        }
    }

    /// `[lower, upper]`
    pub fn between(lower: impl Into<PosixTime>, upper: impl Into<PosixTime>) -> Self {
        Self::finite(lower.into(), upper.into(), true)
    }

    /// `(lower, upper)`
    pub fn entirely_between(lower: impl Into<PosixTime>, upper: impl Into<PosixTime>) -> Self {
        Self::finite(lower.into(), upper.into(), false)
    }

    /// `[lower, +∞)`
    pub fn after(lower: impl Into<PosixTime>) -> Self {
        Self {
            lower_bound: IntervalBound {
                bound_type: IntervalBoundType::Finite(lower.into()),
                is_inclusive: true,
            },
            ..Self::everything()
        }
    }

    /// `(lower, +∞)`
    pub fn entirely_after(lower: impl Into<PosixTime>) -> Self {
        Self {
            lower_bound: IntervalBound {
                bound_type: IntervalBoundType::Finite(lower.into()),
                is_inclusive: false,
            },
            ..Self::everything()
        }
    }

    /// `(-∞, upper]`
    pub fn before(upper: impl Into<PosixTime>) -> Self {
        Self {
            upper_bound: IntervalBound {
                bound_type: IntervalBoundType::Finite(upper.into()),
                is_inclusive: true,
            },
            ..Self::everything()
        }
    }

    /// `(-∞, upper)`
    pub fn entirely_before(upper: impl Into<PosixTime>) -> Self {
        Self {
            upper_bound: IntervalBound {
                bound_type: IntervalBoundType::Finite(upper.into()),
                is_inclusive: false,
            },
            ..Self::everything()
        }
    }

    fn finite(lower: PosixTime, upper: PosixTime, is_inclusive: bool) -> Self {
        Self {
            lower_bound: IntervalBound {
                bound_type: IntervalBoundType::Finite(lower),
                is_inclusive,
            },
            upper_bound: IntervalBound {
                bound_type: IntervalBoundType::Finite(upper),
                is_inclusive,
            },
        }
    }

    pub fn contains(&self, time: impl Into<PosixTime>) -> bool {
        let time = time.into();

        let above_lower = match self.lower_bound.bound_type {
            IntervalBoundType::NegativeInfinity => true,
            IntervalBoundType::Finite(lower) if self.lower_bound.is_inclusive => time >= lower,
            IntervalBoundType::Finite(lower) => time > lower,
            IntervalBoundType::PositiveInfinity => false,
        };

        let below_upper = match self.upper_bound.bound_type {
            IntervalBoundType::NegativeInfinity => false,
            IntervalBoundType::Finite(upper) if self.upper_bound.is_inclusive => time <= upper,
            IntervalBoundType::Finite(upper) => time < upper,
            IntervalBoundType::PositiveInfinity => true,
        };

        above_lower && below_upper
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::everything()
    }
}

impl ToPlutusData for IntervalBoundType {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            IntervalBoundType::NegativeInfinity => constr!(0),
            IntervalBoundType::Finite(time) => constr!(1, [time]),
            IntervalBoundType::PositiveInfinity => constr!(2),
        }
    }
}

impl ToPlutusData for IntervalBound {
    fn to_plutus_data(&self) -> PlutusData {
        constr!(0, [self.bound_type, self.is_inclusive])
    }
}

impl ToPlutusData for Interval {
    fn to_plutus_data(&self) -> PlutusData {
        constr!(0, [self.lower_bound, self.upper_bound])
    }
}
