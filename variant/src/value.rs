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

use crate::config::FromVariant;
use crate::error::VariantError;
use crate::tag::TypeTag;

use codec::{Decode, DecodeAll, Encode};
use contract_primitives::{Asset, Checksum256, Duration, Name, TimePoint};
use scale_info::TypeInfo;
use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Self-describing value. The payload shape is fixed by the variant, so a tag can never disagree
/// with its payload.
///
/// Equality compares the kind and the canonical rendering, not the structure.
#[derive(Clone, Debug, Encode, Decode, TypeInfo)]
pub enum VariantValue {
	#[codec(index = 0)]
	Unit,
	#[codec(index = 1)]
	Name(Name),
	#[codec(index = 2)]
	Text(String),
	#[codec(index = 3)]
	Asset(Asset),
	#[codec(index = 4)]
	TimePoint(TimePoint),
	#[codec(index = 5)]
	Duration(Duration),
	#[codec(index = 6)]
	Int64(i64),
	#[codec(index = 7)]
	UInt32(u32),
	#[codec(index = 8)]
	UInt64(u64),
	#[codec(index = 9)]
	Checksum256(Checksum256),
}

impl VariantValue {
	pub fn kind(&self) -> TypeTag {
		match self {
			VariantValue::Unit => TypeTag::Unit,
			VariantValue::Name(_) => TypeTag::Name,
			VariantValue::Text(_) => TypeTag::Text,
			VariantValue::Asset(_) => TypeTag::Asset,
			VariantValue::TimePoint(_) => TypeTag::TimePoint,
			VariantValue::Duration(_) => TypeTag::Duration,
			VariantValue::Int64(_) => TypeTag::Int64,
			VariantValue::UInt32(_) => TypeTag::UInt32,
			VariantValue::UInt64(_) => TypeTag::UInt64,
			VariantValue::Checksum256(_) => TypeTag::Checksum256,
		}
	}

	pub fn from_unit() -> Self {
		VariantValue::Unit
	}

	pub fn from_name(value: Name) -> Self {
		VariantValue::Name(value)
	}

	pub fn from_text(value: impl Into<String>) -> Self {
		VariantValue::Text(value.into())
	}

	pub fn from_asset(value: Asset) -> Self {
		VariantValue::Asset(value)
	}

	pub fn from_time_point(value: TimePoint) -> Self {
		VariantValue::TimePoint(value)
	}

	pub fn from_duration(value: Duration) -> Self {
		VariantValue::Duration(value)
	}

	pub fn from_int64(value: i64) -> Self {
		VariantValue::Int64(value)
	}

	pub fn from_uint32(value: u32) -> Self {
		VariantValue::UInt32(value)
	}

	pub fn from_uint64(value: u64) -> Self {
		VariantValue::UInt64(value)
	}

	pub fn from_checksum256(value: Checksum256) -> Self {
		VariantValue::Checksum256(value)
	}

	pub(crate) fn mismatch(&self, expected: TypeTag) -> VariantError {
		VariantError::TypeMismatch {
			found: self.kind(),
			expected,
		}
	}

	pub fn as_unit(&self) -> Result<(), VariantError> {
		match self {
			VariantValue::Unit => Ok(()),
			other => Err(other.mismatch(TypeTag::Unit)),
		}
	}

	/// Reads a name. A text payload is accepted as well and parsed.
	pub fn as_name(&self) -> Result<Name, VariantError> {
		match self {
			VariantValue::Name(name) => Ok(*name),
			VariantValue::Text(text) => Ok(text.parse()?),
			other => Err(other.mismatch(TypeTag::Name)),
		}
	}

	pub fn as_text(&self) -> Result<&str, VariantError> {
		match self {
			VariantValue::Text(text) => Ok(text),
			other => Err(other.mismatch(TypeTag::Text)),
		}
	}

	pub fn as_asset(&self) -> Result<Asset, VariantError> {
		Asset::from_variant(self)
	}

	pub fn as_time_point(&self) -> Result<TimePoint, VariantError> {
		TimePoint::from_variant(self)
	}

	pub fn as_duration(&self) -> Result<Duration, VariantError> {
		Duration::from_variant(self)
	}

	pub fn as_int64(&self) -> Result<i64, VariantError> {
		i64::from_variant(self)
	}

	pub fn as_uint32(&self) -> Result<u32, VariantError> {
		u32::from_variant(self)
	}

	pub fn as_uint64(&self) -> Result<u64, VariantError> {
		u64::from_variant(self)
	}

	pub fn as_checksum256(&self) -> Result<Checksum256, VariantError> {
		Checksum256::from_variant(self)
	}

	/// Canonical text form, one rule per kind. Used for display and equality.
	pub fn render(&self) -> String {
		match self {
			VariantValue::Unit => String::new(),
			VariantValue::Name(v) => v.to_string(),
			VariantValue::Text(v) => v.clone(),
			VariantValue::Asset(v) => v.to_string(),
			VariantValue::TimePoint(v) => v.to_string(),
			VariantValue::Duration(v) => v.to_string(),
			VariantValue::Int64(v) => v.to_string(),
			VariantValue::UInt32(v) => v.to_string(),
			VariantValue::UInt64(v) => v.to_string(),
			VariantValue::Checksum256(v) => v.to_string(),
		}
	}

	pub fn equals(&self, other: &VariantValue) -> bool {
		self.kind() == other.kind() && self.render() == other.render()
	}

	/// Payload without the discriminant.
	pub fn payload(&self) -> JsonValue {
		match self {
			VariantValue::Unit => JsonValue::Null,
			VariantValue::Duration(v) => JsonValue::from(v.micros()),
			VariantValue::Int64(v) => JsonValue::from(*v),
			VariantValue::UInt32(v) => JsonValue::from(*v),
			VariantValue::UInt64(v) => JsonValue::from(*v),
			other => JsonValue::String(other.render()),
		}
	}

	fn from_payload(kind: TypeTag, value: JsonValue) -> Result<Self, serde_json::Error> {
		let variant = match kind {
			TypeTag::Unit if value.is_null() => VariantValue::Unit,
			TypeTag::Unit => return Err(de::Error::custom("unit variant carries a value")),
			TypeTag::Name => VariantValue::Name(serde_json::from_value(value)?),
			TypeTag::Text => VariantValue::Text(serde_json::from_value(value)?),
			TypeTag::Asset => VariantValue::Asset(serde_json::from_value(value)?),
			TypeTag::TimePoint => VariantValue::TimePoint(serde_json::from_value(value)?),
			TypeTag::Duration => VariantValue::Duration(serde_json::from_value(value)?),
			TypeTag::Int64 => VariantValue::Int64(serde_json::from_value(value)?),
			TypeTag::UInt32 => VariantValue::UInt32(serde_json::from_value(value)?),
			TypeTag::UInt64 => VariantValue::UInt64(serde_json::from_value(value)?),
			TypeTag::Checksum256 => VariantValue::Checksum256(serde_json::from_value(value)?),
		};
		Ok(variant)
	}

	pub fn encode_binary(&self) -> Vec<u8> {
		self.encode()
	}

	/// Decodes a value occupying the whole of `bytes`.
	pub fn decode_binary(bytes: &[u8]) -> Result<Self, codec::Error> {
		Self::decode_all(&mut &bytes[..])
	}

	pub fn encode_text(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	pub fn decode_text(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

impl PartialEq for VariantValue {
	fn eq(&self, other: &Self) -> bool {
		self.equals(other)
	}
}

impl Eq for VariantValue {}

impl Serialize for VariantValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("VariantValue", 2)?;
		state.serialize_field("type", self.kind().name())?;
		match self {
			VariantValue::Unit => state.serialize_field("value", &())?,
			VariantValue::Name(v) => state.serialize_field("value", v)?,
			VariantValue::Text(v) => state.serialize_field("value", v)?,
			VariantValue::Asset(v) => state.serialize_field("value", v)?,
			VariantValue::TimePoint(v) => state.serialize_field("value", v)?,
			VariantValue::Duration(v) => state.serialize_field("value", v)?,
			VariantValue::Int64(v) => state.serialize_field("value", v)?,
			VariantValue::UInt32(v) => state.serialize_field("value", v)?,
			VariantValue::UInt64(v) => state.serialize_field("value", v)?,
			VariantValue::Checksum256(v) => state.serialize_field("value", v)?,
		}
		state.end()
	}
}

/// Discriminant as found in JSON: registry id or registry name.
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeKey {
	Id(u8),
	Name(String),
}

impl TypeKey {
	fn resolve(&self) -> Option<TypeTag> {
		match self {
			TypeKey::Id(id) => TypeTag::from_id(*id),
			TypeKey::Name(name) => TypeTag::from_name(name),
		}
	}
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVariant {
	#[serde(rename = "type")]
	kind: TypeKey,
	#[serde(default)]
	value: JsonValue,
}

impl<'de> Deserialize<'de> for VariantValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = RawVariant::deserialize(deserializer)?;
		let kind = raw
			.kind
			.resolve()
			.ok_or_else(|| de::Error::custom("unknown variant type"))?;
		VariantValue::from_payload(kind, raw.value).map_err(de::Error::custom)
	}
}

macro_rules! impl_from_payload {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for VariantValue {
				fn from(value: $ty) -> Self {
					VariantValue::$variant(value)
				}
			}
		)*
	};
}

impl_from_payload!(
	Name => Name,
	String => Text,
	Asset => Asset,
	TimePoint => TimePoint,
	Duration => Duration,
	i64 => Int64,
	u32 => UInt32,
	u64 => UInt64,
	Checksum256 => Checksum256,
);

impl From<&str> for VariantValue {
	fn from(value: &str) -> Self {
		VariantValue::Text(value.to_owned())
	}
}

impl From<()> for VariantValue {
	fn from(_: ()) -> Self {
		VariantValue::Unit
	}
}
