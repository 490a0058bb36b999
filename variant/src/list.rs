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

use crate::error::VariantError;
use crate::value::VariantValue;

use codec::{Decode, DecodeAll, Encode, Input};
use scale_info::TypeInfo;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Strips the discriminant of a variant, leaving its payload.
pub trait Unpack {
	type Unpacked;

	fn unpack(&self) -> Self::Unpacked;
}

impl Unpack for VariantValue {
	type Unpacked = serde_json::Value;

	fn unpack(&self) -> Self::Unpacked {
		self.payload()
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct KeyValue<V> {
	pub key: String,
	pub value: V,
}

/// Association list of unique keys, kept in insertion order.
///
/// Lists are small (one entry per configured distribution or parameter), so lookups scan.
/// [`KeyedVariantList::remove`] moves the last entry into the freed slot; don't rely on order
/// after a removal.
#[derive(Clone, Debug, PartialEq, Eq, Encode, TypeInfo)]
pub struct KeyedVariantList<V> {
	entries: Vec<KeyValue<V>>,
}

impl<V> Default for KeyedVariantList<V> {
	fn default() -> Self {
		Self { entries: Vec::new() }
	}
}

impl<V> KeyedVariantList<V> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a list from entries, rejecting duplicate keys.
	pub fn try_from_entries(entries: Vec<KeyValue<V>>) -> Result<Self, VariantError> {
		for (i, entry) in entries.iter().enumerate() {
			if entries[..i].iter().any(|e| e.key == entry.key) {
				return Err(VariantError::DuplicateKey(entry.key.clone()));
			}
		}
		Ok(Self { entries })
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn find_pos(&self, key: &str) -> Option<usize> {
		self.entries.iter().position(|entry| entry.key == key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.find_pos(key).is_some()
	}

	pub fn find(&self, key: &str) -> Option<&V> {
		self.find_pos(key).map(|pos| &self.entries[pos].value)
	}

	pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
		let pos = self.find_pos(key)?;
		Some(&mut self.entries[pos].value)
	}

	/// Entry at `pos`.
	pub fn entry_at(&self, pos: usize) -> Option<(&str, &V)> {
		self.entries.get(pos).map(|entry| (entry.key.as_str(), &entry.value))
	}

	/// Replace value of an existing key in place or append a new entry.
	///
	/// Returns: replaced value
	pub fn upsert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
		let key = key.into();
		match self.find_pos(&key) {
			Some(pos) => Some(core::mem::replace(&mut self.entries[pos].value, value)),
			None => {
				self.entries.push(KeyValue { key, value });
				None
			}
		}
	}

	/// Remove entry by swapping the last entry into its slot.
	pub fn remove(&mut self, key: &str) -> Option<V> {
		let pos = self.find_pos(key)?;
		Some(self.entries.swap_remove(pos).value)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
		self.entries.iter().map(|entry| (entry.key.as_str(), &entry.value))
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> {
		self.entries
			.iter_mut()
			.map(|entry| (entry.key.as_str(), &mut entry.value))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|entry| entry.key.as_str())
	}

	pub fn values(&self) -> impl Iterator<Item = &V> {
		self.entries.iter().map(|entry| &entry.value)
	}

	pub fn entries(&self) -> &[KeyValue<V>] {
		&self.entries
	}
}

impl<V: Unpack> KeyedVariantList<V> {
	/// Unpacked view of the list for consumers which don't care about discriminants.
	pub fn to_map(&self) -> BTreeMap<String, V::Unpacked> {
		self.entries
			.iter()
			.map(|entry| (entry.key.clone(), entry.value.unpack()))
			.collect()
	}
}

impl<V: Decode> KeyedVariantList<V> {
	/// Decodes a list occupying the whole of `bytes`.
	pub fn decode_binary(bytes: &[u8]) -> Result<Self, codec::Error> {
		Self::decode_all(&mut &bytes[..])
	}
}

impl<V: Decode> Decode for KeyedVariantList<V> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		let entries = Vec::<KeyValue<V>>::decode(input)?;
		Self::try_from_entries(entries).map_err(|_| "duplicate key in keyed list".into())
	}
}

impl<V: Serialize> Serialize for KeyedVariantList<V> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.entries.serialize(serializer)
	}
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for KeyedVariantList<V> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let entries = Vec::<KeyValue<V>>::deserialize(deserializer)?;
		Self::try_from_entries(entries).map_err(de::Error::custom)
	}
}

impl<K: Into<String>, V> FromIterator<(K, V)> for KeyedVariantList<V> {
	/// Later duplicates replace earlier values.
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut list = Self::new();
		for (key, value) in iter {
			list.upsert(key, value);
		}
		list
	}
}

impl<V> IntoIterator for KeyedVariantList<V> {
	type Item = (String, V);
	type IntoIter = std::iter::Map<std::vec::IntoIter<KeyValue<V>>, fn(KeyValue<V>) -> (String, V)>;

	fn into_iter(self) -> Self::IntoIter {
		let into_pair: fn(KeyValue<V>) -> (String, V) = |entry| (entry.key, entry.value);
		self.entries.into_iter().map(into_pair)
	}
}
