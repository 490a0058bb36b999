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

use codec::{Decode, Encode, MaxEncodedLen};
use core::fmt;
use scale_info::TypeInfo;

/// Registry of payload kinds a [`crate::VariantValue`] can hold.
///
/// Discriminants are the wire format: the SCALE encoding of a value starts with [`TypeTag::id`]
/// and JSON accepts both the id and [`TypeTag::name`]. Never reorder or reuse an id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Encode, Decode, TypeInfo, MaxEncodedLen)]
pub enum TypeTag {
	#[codec(index = 0)]
	Unit = 0,
	#[codec(index = 1)]
	Name = 1,
	#[codec(index = 2)]
	Text = 2,
	#[codec(index = 3)]
	Asset = 3,
	#[codec(index = 4)]
	TimePoint = 4,
	#[codec(index = 5)]
	Duration = 5,
	#[codec(index = 6)]
	Int64 = 6,
	#[codec(index = 7)]
	UInt32 = 7,
	#[codec(index = 8)]
	UInt64 = 8,
	#[codec(index = 9)]
	Checksum256 = 9,
}

impl TypeTag {
	/// All kinds in registration order.
	pub const ALL: [TypeTag; 10] = [
		TypeTag::Unit,
		TypeTag::Name,
		TypeTag::Text,
		TypeTag::Asset,
		TypeTag::TimePoint,
		TypeTag::Duration,
		TypeTag::Int64,
		TypeTag::UInt32,
		TypeTag::UInt64,
		TypeTag::Checksum256,
	];

	pub fn id(self) -> u8 {
		self as u8
	}

	pub fn name(self) -> &'static str {
		match self {
			TypeTag::Unit => "unit",
			TypeTag::Name => "name",
			TypeTag::Text => "string",
			TypeTag::Asset => "asset",
			TypeTag::TimePoint => "time_point",
			TypeTag::Duration => "duration",
			TypeTag::Int64 => "int64",
			TypeTag::UInt32 => "uint32",
			TypeTag::UInt64 => "uint64",
			TypeTag::Checksum256 => "checksum256",
		}
	}

	pub fn from_id(id: u8) -> Option<Self> {
		Self::ALL.get(id as usize).copied()
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|tag| tag.name() == name)
	}
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn registry_order_should_match_ids() {
		for (position, tag) in TypeTag::ALL.iter().enumerate() {
			assert_eq!(tag.id() as usize, position);
			assert_eq!(TypeTag::from_id(tag.id()), Some(*tag));
			assert_eq!(TypeTag::from_name(tag.name()), Some(*tag));
			assert_eq!(tag.encode(), vec![tag.id()]);
		}
	}

	#[test]
	fn unknown_registry_keys_should_not_resolve() {
		assert_eq!(TypeTag::from_id(10), None);
		assert_eq!(TypeTag::from_name("text"), None);
		assert_eq!(TypeTag::from_name("Asset"), None);
	}
}
