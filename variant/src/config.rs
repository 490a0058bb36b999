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
use crate::list::KeyedVariantList;
use crate::tag::TypeTag;
use crate::value::VariantValue;

use contract_primitives::{Asset, Checksum256, Duration, Name, TimePoint};

/// Typed set of parameters, e.g. round or vesting configuration.
pub type ConfigSet = KeyedVariantList<VariantValue>;

/// Payload types which can be read out of a [`VariantValue`].
pub trait FromVariant: Sized {
	const TAG: TypeTag;

	fn from_variant(value: &VariantValue) -> Result<Self, VariantError>;
}

macro_rules! impl_from_variant {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl FromVariant for $ty {
				const TAG: TypeTag = TypeTag::$variant;

				fn from_variant(value: &VariantValue) -> Result<Self, VariantError> {
					match value {
						VariantValue::$variant(v) => Ok(v.clone()),
						other => Err(other.mismatch(Self::TAG)),
					}
				}
			}
		)*
	};
}

impl_from_variant!(
	String => Text,
	Asset => Asset,
	TimePoint => TimePoint,
	Duration => Duration,
	i64 => Int64,
	u32 => UInt32,
	u64 => UInt64,
	Checksum256 => Checksum256,
);

impl FromVariant for Name {
	const TAG: TypeTag = TypeTag::Name;

	fn from_variant(value: &VariantValue) -> Result<Self, VariantError> {
		value.as_name()
	}
}

impl FromVariant for () {
	const TAG: TypeTag = TypeTag::Unit;

	fn from_variant(value: &VariantValue) -> Result<Self, VariantError> {
		value.as_unit()
	}
}

impl KeyedVariantList<VariantValue> {
	/// Typed lookup. Missing keys are `Ok(None)`, values of another kind are an error.
	pub fn get<T: FromVariant>(&self, key: &str) -> Result<Option<T>, VariantError> {
		self.find(key).map(T::from_variant).transpose()
	}

	/// Typed lookup of a parameter which has to be present.
	pub fn require<T: FromVariant>(&self, key: &str) -> Result<T, VariantError> {
		self.get(key)?
			.ok_or_else(|| VariantError::MissingKey(key.to_owned()))
	}

	pub fn set(&mut self, key: impl Into<String>, value: impl Into<VariantValue>) -> Option<VariantValue> {
		self.upsert(key, value.into())
	}

	pub fn get_name(&self, key: &str) -> Result<Option<Name>, VariantError> {
		self.get(key)
	}

	pub fn get_text(&self, key: &str) -> Result<Option<String>, VariantError> {
		self.get(key)
	}

	pub fn get_asset(&self, key: &str) -> Result<Option<Asset>, VariantError> {
		self.get(key)
	}

	pub fn get_time_point(&self, key: &str) -> Result<Option<TimePoint>, VariantError> {
		self.get(key)
	}

	pub fn get_duration(&self, key: &str) -> Result<Option<Duration>, VariantError> {
		self.get(key)
	}

	pub fn get_int64(&self, key: &str) -> Result<Option<i64>, VariantError> {
		self.get(key)
	}

	pub fn get_uint32(&self, key: &str) -> Result<Option<u32>, VariantError> {
		self.get(key)
	}

	pub fn get_uint64(&self, key: &str) -> Result<Option<u64>, VariantError> {
		self.get(key)
	}

	pub fn get_checksum256(&self, key: &str) -> Result<Option<Checksum256>, VariantError> {
		self.get(key)
	}
}
