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

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod asset;
pub mod checksum;
pub mod constants;
pub mod name;
pub mod time;

pub use asset::{Asset, AssetError, Symbol};
pub use checksum::{Checksum256, ChecksumError};
pub use name::{Name, NameError};
pub use time::{Duration, TimeError, TimePoint};

/// Raw amount of an asset, scaled by the precision of its symbol.
pub type AssetAmount = i64;

/// Number of non-fungible tokens.
pub type NftCount = u16;

/// Whole hours used by release intervals.
pub type Hours = u32;

/// Identifier of a submitted transaction.
pub type TransactionId = Checksum256;
