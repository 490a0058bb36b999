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

use crate::constants::asset::{MAX_AMOUNT, MAX_PRECISION, MAX_SYMBOL_LEN};
use crate::AssetAmount;

use alloc::string::String;
use codec::{Decode, Encode, Input, MaxEncodedLen};
use core::fmt;
use core::str::FromStr;
use scale_info::TypeInfo;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum AssetError {
	#[cfg_attr(feature = "std", error("symbol mismatch"))]
	SymbolMismatch,
	#[cfg_attr(feature = "std", error("invalid symbol code"))]
	InvalidSymbol,
	#[cfg_attr(feature = "std", error("precision exceeds {}", MAX_PRECISION))]
	InvalidPrecision,
	#[cfg_attr(feature = "std", error("malformed asset amount"))]
	InvalidAmount,
	#[cfg_attr(feature = "std", error("asset amount out of range"))]
	AmountOutOfRange,
}

/// Token symbol: precision in the lowest byte, up to 7 uppercase ASCII letters in the remaining
/// bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, TypeInfo, MaxEncodedLen)]
pub struct Symbol(u64);

impl Symbol {
	pub fn new(precision: u8, code: &str) -> Result<Self, AssetError> {
		if precision > MAX_PRECISION {
			return Err(AssetError::InvalidPrecision);
		}
		let bytes = code.as_bytes();
		if bytes.is_empty() || bytes.len() > MAX_SYMBOL_LEN || !bytes.iter().all(u8::is_ascii_uppercase) {
			return Err(AssetError::InvalidSymbol);
		}

		let raw = bytes
			.iter()
			.enumerate()
			.fold(precision as u64, |acc, (i, c)| acc | ((*c as u64) << (8 * (i + 1))));

		Ok(Self(raw))
	}

	/// Validates a raw symbol value as it appears on the wire.
	pub fn from_raw(raw: u64) -> Result<Self, AssetError> {
		let symbol = Self(raw);
		if symbol.precision() > MAX_PRECISION {
			return Err(AssetError::InvalidPrecision);
		}

		let mut code = raw >> 8;
		let mut len = 0;
		while code & 0xff != 0 {
			if !(code as u8).is_ascii_uppercase() {
				return Err(AssetError::InvalidSymbol);
			}
			code >>= 8;
			len += 1;
		}
		// characters after the first zero byte are not allowed
		if len == 0 || code != 0 {
			return Err(AssetError::InvalidSymbol);
		}

		Ok(symbol)
	}

	pub fn raw(&self) -> u64 {
		self.0
	}

	pub fn precision(&self) -> u8 {
		(self.0 & 0xff) as u8
	}

	pub fn code(&self) -> String {
		let mut code = String::with_capacity(MAX_SYMBOL_LEN);
		let mut raw = self.0 >> 8;
		while raw & 0xff != 0 {
			code.push((raw & 0xff) as u8 as char);
			raw >>= 8;
		}
		code
	}
}

impl Decode for Symbol {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		let raw = u64::decode(input)?;
		Symbol::from_raw(raw).map_err(|_| "invalid asset symbol".into())
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{}", self.precision(), self.code())
	}
}

impl fmt::Debug for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Symbol({})", self)
	}
}

impl FromStr for Symbol {
	type Err = AssetError;

	/// Parses `"4,EOS"`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (precision, code) = s.split_once(',').ok_or(AssetError::InvalidSymbol)?;
		let precision = precision.parse::<u8>().map_err(|_| AssetError::InvalidPrecision)?;
		Symbol::new(precision, code)
	}
}

impl Serialize for Symbol {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Symbol {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse()
			.map_err(|e| de::Error::custom(format_args!("invalid symbol {:?}: {:?}", s, e)))
	}
}

/// Fungible token amount, e.g. `1.0000 EOS`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Encode, TypeInfo, MaxEncodedLen)]
pub struct Asset {
	pub amount: AssetAmount,
	pub symbol: Symbol,
}

impl Asset {
	pub fn new(amount: AssetAmount, symbol: Symbol) -> Result<Self, AssetError> {
		if !(-MAX_AMOUNT..=MAX_AMOUNT).contains(&amount) {
			return Err(AssetError::AmountOutOfRange);
		}
		Ok(Self { amount, symbol })
	}

	pub fn zero(symbol: Symbol) -> Self {
		Self { amount: 0, symbol }
	}

	pub fn is_zero(&self) -> bool {
		self.amount == 0
	}

	pub fn is_positive(&self) -> bool {
		self.amount > 0
	}

	pub fn ensure_same_symbol(&self, other: &Asset) -> Result<(), AssetError> {
		if self.symbol != other.symbol {
			return Err(AssetError::SymbolMismatch);
		}
		Ok(())
	}

	pub fn checked_add(&self, other: &Asset) -> Result<Asset, AssetError> {
		self.ensure_same_symbol(other)?;
		let amount = self
			.amount
			.checked_add(other.amount)
			.ok_or(AssetError::AmountOutOfRange)?;
		Asset::new(amount, self.symbol)
	}

	pub fn checked_sub(&self, other: &Asset) -> Result<Asset, AssetError> {
		self.ensure_same_symbol(other)?;
		let amount = self
			.amount
			.checked_sub(other.amount)
			.ok_or(AssetError::AmountOutOfRange)?;
		Asset::new(amount, self.symbol)
	}
}

impl Decode for Asset {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		let amount = AssetAmount::decode(input)?;
		let symbol = Symbol::decode(input)?;
		Asset::new(amount, symbol).map_err(|_| "asset amount out of range".into())
	}
}

impl fmt::Display for Asset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let sign = if self.amount < 0 { "-" } else { "" };
		let abs = self.amount.unsigned_abs();
		let precision = self.symbol.precision() as u32;

		if precision == 0 {
			return write!(f, "{}{} {}", sign, abs, self.symbol.code());
		}

		let unit = 10u64.pow(precision);
		write!(
			f,
			"{}{}.{:0width$} {}",
			sign,
			abs / unit,
			abs % unit,
			self.symbol.code(),
			width = precision as usize
		)
	}
}

impl fmt::Debug for Asset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Asset({})", self)
	}
}

impl FromStr for Asset {
	type Err = AssetError;

	/// Parses `"1.0000 EOS"`. Precision is taken from the number of fraction digits.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (amount, code) = s.trim().split_once(' ').ok_or(AssetError::InvalidAmount)?;

		let (negative, digits) = match amount.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, amount),
		};
		let (int_part, frac_part) = match digits.split_once('.') {
			Some((int_part, frac_part)) if !frac_part.is_empty() => (int_part, frac_part),
			Some(_) => return Err(AssetError::InvalidAmount),
			None => (digits, ""),
		};
		if int_part.is_empty() || !int_part.bytes().chain(frac_part.bytes()).all(|c| c.is_ascii_digit()) {
			return Err(AssetError::InvalidAmount);
		}

		let precision = u8::try_from(frac_part.len()).map_err(|_| AssetError::InvalidPrecision)?;
		let symbol = Symbol::new(precision, code)?;

		let magnitude = int_part
			.bytes()
			.chain(frac_part.bytes())
			.try_fold(0i64, |acc, c| {
				acc.checked_mul(10)?.checked_add((c - b'0') as i64)
			})
			.ok_or(AssetError::AmountOutOfRange)?;

		Asset::new(if negative { -magnitude } else { magnitude }, symbol)
	}
}

impl Serialize for Asset {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Asset {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse()
			.map_err(|e| de::Error::custom(format_args!("invalid asset {:?}: {:?}", s, e)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::string::ToString;
	use pretty_assertions::assert_eq;
	use test_case::test_case;

	fn eos() -> Symbol {
		Symbol::new(4, "EOS").unwrap()
	}

	#[test]
	fn symbol_should_pack_precision_and_code() {
		let symbol = eos();

		assert_eq!(symbol.precision(), 4);
		assert_eq!(symbol.code(), "EOS");
		assert_eq!(symbol.raw(), 4 | (b'E' as u64) << 8 | (b'O' as u64) << 16 | (b'S' as u64) << 24);
		assert_eq!(symbol.to_string(), "4,EOS");
		assert_eq!(Symbol::from_raw(symbol.raw()), Ok(symbol));
	}

	#[test_case(4, "" ; "empty code")]
	#[test_case(4, "eos" ; "lowercase code")]
	#[test_case(4, "ABCDEFGH" ; "code too long")]
	#[test_case(4, "E0S" ; "digit in code")]
	fn symbol_should_reject_invalid_code(precision: u8, code: &str) {
		assert_eq!(Symbol::new(precision, code), Err(AssetError::InvalidSymbol));
	}

	#[test]
	fn symbol_should_reject_precision_above_max() {
		assert_eq!(Symbol::new(19, "EOS"), Err(AssetError::InvalidPrecision));
	}

	#[test]
	fn symbol_from_raw_should_reject_gaps_in_code() {
		// "E", zero byte, "S"
		let raw = 4 | (b'E' as u64) << 8 | (b'S' as u64) << 24;
		assert_eq!(Symbol::from_raw(raw), Err(AssetError::InvalidSymbol));
	}

	#[test_case(12345, 4, "1.2345 EOS")]
	#[test_case(-100, 4, "-0.0100 EOS")]
	#[test_case(0, 4, "0.0000 EOS")]
	#[test_case(7, 0, "7 EOS")]
	#[test_case(1_000_000_000_000_000_000, 18, "1.000000000000000000 EOS")]
	fn asset_should_render_at_precision(amount: AssetAmount, precision: u8, expected: &str) {
		let asset = Asset::new(amount, Symbol::new(precision, "EOS").unwrap()).unwrap();
		assert_eq!(asset.to_string(), expected);
		assert_eq!(expected.parse::<Asset>(), Ok(asset));
	}

	#[test_case("1.2345" ; "missing symbol")]
	#[test_case("1. EOS" ; "empty fraction")]
	#[test_case(".5 EOS" ; "empty integer part")]
	#[test_case("1.2.3 EOS" ; "two dots")]
	#[test_case("1,5 EOS" ; "comma separator")]
	fn asset_parse_should_reject_malformed_amount(input: &str) {
		assert_eq!(input.parse::<Asset>(), Err(AssetError::InvalidAmount));
	}

	#[test]
	fn asset_parse_should_reject_amount_out_of_range() {
		assert_eq!(
			"99999999999999999999 EOS".parse::<Asset>(),
			Err(AssetError::AmountOutOfRange)
		);
		assert_eq!(
			Asset::new(MAX_AMOUNT + 1, eos()),
			Err(AssetError::AmountOutOfRange)
		);
	}

	#[test]
	fn checked_add_should_fail_when_symbols_differ() {
		let a = Asset::new(100, eos()).unwrap();
		let b = Asset::new(100, Symbol::new(4, "WAX").unwrap()).unwrap();
		let c = Asset::new(100, Symbol::new(8, "EOS").unwrap()).unwrap();

		assert_eq!(a.checked_add(&b), Err(AssetError::SymbolMismatch));
		assert_eq!(a.checked_add(&c), Err(AssetError::SymbolMismatch));
		assert_eq!(a.checked_add(&a), Ok(Asset::new(200, eos()).unwrap()));
		assert_eq!(a.checked_sub(&a), Ok(Asset::zero(eos())));
	}

	#[test]
	fn asset_should_decode_what_it_encodes() {
		let asset = Asset::new(-42_0000, eos()).unwrap();
		let encoded = asset.encode();

		assert_eq!(encoded.len(), 16);
		assert_eq!(Asset::decode(&mut &encoded[..]).unwrap(), asset);
	}

	#[test]
	fn asset_decode_should_reject_invalid_symbol() {
		let mut encoded = 1i64.encode();
		encoded.extend(u64::MAX.encode());

		assert!(Asset::decode(&mut &encoded[..]).is_err());
	}

	#[test]
	fn asset_should_serialize_as_string() {
		let asset = Asset::new(15_000, eos()).unwrap();

		let json = serde_json::to_string(&asset).unwrap();

		assert_eq!(json, "\"1.5000 EOS\"");
		assert_eq!(serde_json::from_str::<Asset>(&json).unwrap(), asset);
		assert!(serde_json::from_str::<Asset>("\"1.5 eos\"").is_err());
	}
}
