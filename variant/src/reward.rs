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

use crate::list::Unpack;

use codec::{Decode, Encode, MaxEncodedLen};
use contract_primitives::{Asset, Name, NftCount};
use core::fmt;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

/// Reward which is either a fungible token amount or a number of NFTs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RewardAmount {
	#[codec(index = 0)]
	Asset(Asset),
	#[codec(index = 1)]
	NftCount(NftCount),
}

impl RewardAmount {
	pub fn is_zero(&self) -> bool {
		match self {
			RewardAmount::Asset(asset) => asset.is_zero(),
			RewardAmount::NftCount(count) => *count == 0,
		}
	}
}

impl From<Asset> for RewardAmount {
	fn from(asset: Asset) -> Self {
		RewardAmount::Asset(asset)
	}
}

impl From<NftCount> for RewardAmount {
	fn from(count: NftCount) -> Self {
		RewardAmount::NftCount(count)
	}
}

impl fmt::Display for RewardAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RewardAmount::Asset(asset) => write!(f, "{}", asset),
			RewardAmount::NftCount(count) => write!(f, "{} NFT", count),
		}
	}
}

impl Unpack for RewardAmount {
	type Unpacked = JsonValue;

	fn unpack(&self) -> Self::Unpacked {
		match self {
			RewardAmount::Asset(asset) => JsonValue::String(asset.to_string()),
			RewardAmount::NftCount(count) => JsonValue::from(*count),
		}
	}
}

/// Winner record of a distribution.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Winner {
	#[codec(index = 0)]
	Fungible { account: Name, reward: Asset },
	#[codec(index = 1)]
	Nft { account: Name, count: NftCount },
}

impl Winner {
	pub fn account(&self) -> Name {
		match self {
			Winner::Fungible { account, .. } | Winner::Nft { account, .. } => *account,
		}
	}

	pub fn reward(&self) -> RewardAmount {
		match self {
			Winner::Fungible { reward, .. } => RewardAmount::Asset(*reward),
			Winner::Nft { count, .. } => RewardAmount::NftCount(*count),
		}
	}
}

impl Unpack for Winner {
	type Unpacked = JsonValue;

	fn unpack(&self) -> Self::Unpacked {
		json!({
			"account": self.account().to_string(),
			"reward": self.reward().unpack(),
		})
	}
}
