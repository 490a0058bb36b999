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

pub mod asset {
	use crate::AssetAmount;

	/// Max number of decimal places a symbol may carry.
	pub const MAX_PRECISION: u8 = 18;

	/// Max length of a symbol code, e.g. `EOS`.
	pub const MAX_SYMBOL_LEN: usize = 7;

	/// Largest absolute amount an asset may hold (`2^62 - 1`).
	pub const MAX_AMOUNT: AssetAmount = (1 << 62) - 1;
}

pub mod name {
	/// Max number of characters in a name.
	pub const MAX_NAME_LEN: usize = 13;

	/// Characters in the order of their 5-bit name encoding.
	pub const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";
}

pub mod time {
	pub const MICROS_PER_SECOND: i64 = 1_000_000;
	pub const SECONDS_PER_HOUR: i64 = 3_600;
	pub const MICROS_PER_HOUR: i64 = MICROS_PER_SECOND * SECONDS_PER_HOUR;

	/// `0000-01-01T00:00:00` in seconds since UNIX epoch.
	pub const MIN_TIMESTAMP_SECS: i64 = -62_167_219_200;

	/// `9999-12-31T23:59:59` in seconds since UNIX epoch.
	pub const MAX_TIMESTAMP_SECS: i64 = 253_402_300_799;

	/// Layout used for canonical rendering.
	pub const RENDER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

	/// Layout accepted when parsing. Fraction is optional and may have up to 9 digits.
	pub const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
}
