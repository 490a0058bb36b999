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

use codec::{Decode, DecodeAll, Encode};
use contract_primitives::Name;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

/// Position of the index a query runs against. `1` is the primary key.
pub type IndexPosition = u8;

pub const PRIMARY_INDEX: IndexPosition = 1;

/// Default number of rows a single query asks for.
pub const DEFAULT_LIMIT: u32 = 100;

/// Range query against a contract table. Bounds are inclusive.
#[derive(Clone, PartialEq, Eq, Debug, Encode, Decode, TypeInfo)]
pub struct TableQuery {
	pub table: Name,
	pub index: IndexPosition,
	pub lower_bound: Option<u64>,
	pub upper_bound: Option<u64>,
	pub reverse: bool,
	pub limit: u32,
}

impl TableQuery {
	pub fn new(table: Name) -> Self {
		Self {
			table,
			index: PRIMARY_INDEX,
			lower_bound: None,
			upper_bound: None,
			reverse: false,
			limit: DEFAULT_LIMIT,
		}
	}

	pub fn with_index(mut self, index: IndexPosition) -> Self {
		self.index = index;
		self
	}

	pub fn bounded(mut self, lower_bound: Option<u64>, upper_bound: Option<u64>) -> Self {
		self.lower_bound = lower_bound;
		self.upper_bound = upper_bound;
		self
	}

	/// Restrict the query to rows keyed by `key` on the selected index.
	pub fn by_name(self, key: Name) -> Self {
		self.bounded(Some(key.raw()), Some(key.raw()))
	}

	pub fn reversed(mut self) -> Self {
		self.reverse = true;
		self
	}

	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = limit;
		self
	}

	/// Returns `true` if `key` lies within the bounds.
	pub fn contains(&self, key: u64) -> bool {
		self.lower_bound.map_or(true, |lower| key >= lower) && self.upper_bound.map_or(true, |upper| key <= upper)
	}
}

/// Binary row as returned by the contract.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Row(pub Vec<u8>);

impl Row {
	/// Decode the whole row into `T`. Trailing bytes are an error.
	pub fn decode<T: Decode>(&self) -> Result<T, codec::Error> {
		T::decode_all(&mut &self.0[..])
	}
}

impl<T: Encode> From<&T> for Row {
	fn from(value: &T) -> Self {
		Row(value.encode())
	}
}

/// Decode every row, stopping at the first failure.
pub fn decode_rows<T: Decode>(rows: &[Row]) -> Result<Vec<T>, codec::Error> {
	rows.iter().map(|row| row.decode::<T>()).collect()
}
