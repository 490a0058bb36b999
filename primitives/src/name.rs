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

use crate::constants::name::{CHARMAP, MAX_NAME_LEN};

use alloc::string::String;
use codec::{Decode, Encode, MaxEncodedLen};
use core::fmt;
use core::str::FromStr;
use scale_info::TypeInfo;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum NameError {
	#[cfg_attr(feature = "std", error("name is longer than {} characters", MAX_NAME_LEN))]
	TooLong,
	#[cfg_attr(feature = "std", error("invalid character {0:?} in name"))]
	InvalidCharacter(char),
	/// Name does not survive a round trip, e.g. it has trailing dots.
	#[cfg_attr(feature = "std", error("name is not in canonical form"))]
	NotNormalized,
}

/// Account, action and table identifier packed into 64 bits.
///
/// Each of the first 12 characters takes 5 bits, the 13th character takes the remaining 4 bits
/// and is therefore limited to `.1-5a-j`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, MaxEncodedLen)]
pub struct Name(u64);

impl Name {
	pub const fn from_raw(raw: u64) -> Self {
		Self(raw)
	}

	pub const fn raw(&self) -> u64 {
		self.0
	}

	pub const fn is_empty(&self) -> bool {
		self.0 == 0
	}
}

fn char_to_symbol(c: u8) -> Option<u64> {
	match c {
		b'a'..=b'z' => Some((c - b'a') as u64 + 6),
		b'1'..=b'5' => Some((c - b'1') as u64 + 1),
		b'.' => Some(0),
		_ => None,
	}
}

impl FromStr for Name {
	type Err = NameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let bytes = s.as_bytes();
		if bytes.len() > MAX_NAME_LEN {
			return Err(NameError::TooLong);
		}

		let mut value = 0u64;
		for (i, c) in bytes.iter().enumerate() {
			let symbol = char_to_symbol(*c).ok_or(NameError::InvalidCharacter(*c as char))?;
			if i < MAX_NAME_LEN - 1 {
				value |= (symbol & 0x1f) << (64 - 5 * (i + 1));
			} else if symbol > 0x0f {
				return Err(NameError::InvalidCharacter(*c as char));
			} else {
				value |= symbol;
			}
		}

		let name = Name(value);
		let (rendered, len) = name.render_bytes();
		if &rendered[..len] != bytes {
			return Err(NameError::NotNormalized);
		}
		Ok(name)
	}
}

impl Name {
	/// Renders into a fixed buffer, returning it with the length of the name without trailing
	/// dots.
	fn render_bytes(&self) -> ([u8; MAX_NAME_LEN], usize) {
		let mut buf = [b'.'; MAX_NAME_LEN];
		let mut tmp = self.0;
		for i in 0..MAX_NAME_LEN {
			let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
			buf[MAX_NAME_LEN - 1 - i] = CHARMAP[(tmp & mask) as usize];
			tmp >>= shift;
		}
		let len = buf.iter().rposition(|c| *c != b'.').map_or(0, |p| p + 1);
		(buf, len)
	}
}

impl fmt::Display for Name {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (rendered, len) = self.render_bytes();
		// CHARMAP is ASCII
		let s = core::str::from_utf8(&rendered[..len]).map_err(|_| fmt::Error)?;
		f.write_str(s)
	}
}

impl fmt::Debug for Name {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Name({})", self)
	}
}

impl Serialize for Name {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Name {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse()
			.map_err(|e| de::Error::custom(format_args!("invalid name {:?}: {:?}", s, e)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::string::ToString;
	use pretty_assertions::assert_eq;
	use test_case::test_case;

	#[test_case("eosio", 0x5530_EA00_0000_0000)]
	#[test_case("eosio.token", 0x5530_EA03_3482_A600)]
	#[test_case("", 0)]
	#[test_case("a", 0x3000_0000_0000_0000)]
	fn name_should_encode_to_known_value(s: &str, raw: u64) {
		let name: Name = s.parse().unwrap();

		assert_eq!(name.raw(), raw);
		assert_eq!(name.to_string(), s);
	}

	#[test]
	fn thirteenth_character_should_use_low_nibble() {
		let name: Name = "zzzzzzzzzzzzj".parse().unwrap();
		assert_eq!(name.raw() & 0x0f, 0x0f);
		assert_eq!(name.to_string(), "zzzzzzzzzzzzj");

		assert_eq!(
			"zzzzzzzzzzzzk".parse::<Name>(),
			Err(NameError::InvalidCharacter('k'))
		);
	}

	#[test_case("Eosio", NameError::InvalidCharacter('E') ; "uppercase")]
	#[test_case("eos6", NameError::InvalidCharacter('6') ; "digit above five")]
	#[test_case("abcdefghijklmn", NameError::TooLong ; "fourteen characters")]
	#[test_case("eosio.", NameError::NotNormalized ; "trailing dot")]
	fn name_parse_should_fail(input: &str, error: NameError) {
		assert_eq!(input.parse::<Name>(), Err(error));
	}

	#[test]
	fn any_raw_value_should_render_and_parse_back() {
		for raw in [u64::MAX, 1, 0x8000_0000_0000_0000, 0x1234_5678_9abc_def0] {
			let name = Name::from_raw(raw);
			assert_eq!(name.to_string().parse::<Name>(), Ok(name));
		}
	}

	#[test]
	fn name_should_serialize_as_string() {
		let name: Name = "alice".parse().unwrap();

		assert_eq!(serde_json::to_string(&name).unwrap(), "\"alice\"");
		assert_eq!(serde_json::from_str::<Name>("\"alice\"").unwrap(), name);
	}
}
