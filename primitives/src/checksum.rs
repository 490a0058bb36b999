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

use alloc::string::String;
use codec::{Decode, Encode, MaxEncodedLen};
use core::fmt;
use core::str::FromStr;
use scale_info::TypeInfo;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ChecksumError {
	#[cfg_attr(feature = "std", error("checksum must be 64 hex characters"))]
	InvalidLength,
	#[cfg_attr(feature = "std", error("checksum contains a non-hex character"))]
	InvalidHex,
}

/// 256-bit digest, rendered as lowercase hex.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, MaxEncodedLen)]
pub struct Checksum256(pub [u8; 32]);

impl Checksum256 {
	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl From<[u8; 32]> for Checksum256 {
	fn from(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}
}

impl fmt::Display for Checksum256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&hex::encode(self.0))
	}
}

impl fmt::Debug for Checksum256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Checksum256({})", self)
	}
}

impl FromStr for Checksum256 {
	type Err = ChecksumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() != 64 {
			return Err(ChecksumError::InvalidLength);
		}
		let mut bytes = [0u8; 32];
		hex::decode_to_slice(s, &mut bytes).map_err(|_| ChecksumError::InvalidHex)?;
		Ok(Self(bytes))
	}
}

impl Serialize for Checksum256 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Checksum256 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse()
			.map_err(|e| de::Error::custom(format_args!("invalid checksum {:?}: {:?}", s, e)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::string::ToString;
	use pretty_assertions::assert_eq;

	#[test]
	fn checksum_should_render_lowercase_hex() {
		let mut bytes = [0u8; 32];
		bytes[0] = 0xAB;
		bytes[31] = 0x01;
		let checksum = Checksum256(bytes);

		let rendered = checksum.to_string();

		assert_eq!(rendered.len(), 64);
		assert!(rendered.starts_with("ab00"));
		assert!(rendered.ends_with("0001"));
		assert_eq!(rendered.parse::<Checksum256>(), Ok(checksum));
		assert_eq!(rendered.to_uppercase().parse::<Checksum256>(), Ok(checksum));
	}

	#[test]
	fn checksum_parse_should_validate_input() {
		assert_eq!("abcd".parse::<Checksum256>(), Err(ChecksumError::InvalidLength));
		assert_eq!("zz".repeat(32).parse::<Checksum256>(), Err(ChecksumError::InvalidHex));
	}
}
