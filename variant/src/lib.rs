// This file is part of contract-sdk.

// Copyright (C) 2020-2024  Intergalactic, Limited (GIB).
// SPDX-License-Identifier: Apache-2.0

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

//! # Contract Variant
//!
//! Values crossing the contract boundary describe their own type. [`VariantValue`] is the closed
//! set of primitive payloads, [`KeyedVariantList`] is the ordered key/value structure backing
//! configuration sets, reward maps and distribution maps.
//!
//! Both encode to JSON as `{"type": <name or id>, "value": <payload>}` and to SCALE as the
//! registry index followed by the payload.

pub mod config;
pub mod error;
pub mod list;
pub mod reward;
pub mod tag;
pub mod value;

#[cfg(test)]
mod tests;

pub use config::{ConfigSet, FromVariant};
pub use error::VariantError;
pub use list::{KeyValue, KeyedVariantList, Unpack};
pub use reward::{RewardAmount, Winner};
pub use tag::TypeTag;
pub use value::VariantValue;
