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

use crate::constants::time::*;
use crate::Hours;

use alloc::string::String;
use chrono::{DateTime, NaiveDateTime};
use codec::{Decode, Encode, Input, MaxEncodedLen};
use core::fmt;
use core::str::FromStr;
use scale_info::TypeInfo;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum TimeError {
	#[cfg_attr(feature = "std", error("time point out of range"))]
	OutOfRange,
	#[cfg_attr(feature = "std", error("malformed time point"))]
	InvalidFormat,
}

/// Microseconds since UNIX epoch, limited to years `0000..=9999`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, TypeInfo, MaxEncodedLen)]
pub struct TimePoint(i64);

impl TimePoint {
	pub const MIN: TimePoint = TimePoint(MIN_TIMESTAMP_SECS * MICROS_PER_SECOND);
	pub const MAX: TimePoint = TimePoint(MAX_TIMESTAMP_SECS * MICROS_PER_SECOND + MICROS_PER_SECOND - 1);

	pub fn from_micros(micros: i64) -> Result<Self, TimeError> {
		if !(Self::MIN.0..=Self::MAX.0).contains(&micros) {
			return Err(TimeError::OutOfRange);
		}
		Ok(Self(micros))
	}

	pub fn from_secs(secs: i64) -> Result<Self, TimeError> {
		secs.checked_mul(MICROS_PER_SECOND)
			.ok_or(TimeError::OutOfRange)
			.and_then(Self::from_micros)
	}

	pub fn micros(&self) -> i64 {
		self.0
	}

	pub fn secs(&self) -> i64 {
		self.0.div_euclid(MICROS_PER_SECOND)
	}

	pub fn checked_add(&self, duration: Duration) -> Result<Self, TimeError> {
		self.0
			.checked_add(duration.0)
			.ok_or(TimeError::OutOfRange)
			.and_then(Self::from_micros)
	}

	pub fn checked_add_hours(&self, hours: u64) -> Result<Self, TimeError> {
		let hours = i64::try_from(hours).map_err(|_| TimeError::OutOfRange)?;
		self.checked_add(Duration::from_hours(hours)?)
	}

	fn to_datetime(self) -> Option<NaiveDateTime> {
		let nanos = (self.0.rem_euclid(MICROS_PER_SECOND) * 1_000) as u32;
		DateTime::from_timestamp(self.secs(), nanos).map(|dt| dt.naive_utc())
	}
}

impl Decode for TimePoint {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		let micros = i64::decode(input)?;
		TimePoint::from_micros(micros).map_err(|_| "time point out of range".into())
	}
}

impl fmt::Display for TimePoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// range is checked on construction
		let datetime = self.to_datetime().ok_or(fmt::Error)?;
		write!(f, "{}", datetime.format(RENDER_FORMAT))
	}
}

impl fmt::Debug for TimePoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TimePoint({})", self)
	}
}

impl FromStr for TimePoint {
	type Err = TimeError;

	/// Parses `2024-01-01T00:00:00`, with an optional fraction of up to nanosecond precision.
	/// Sub-microsecond digits are truncated.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let datetime = NaiveDateTime::parse_from_str(s, PARSE_FORMAT).map_err(|_| TimeError::InvalidFormat)?;
		let utc = datetime.and_utc();
		let micros = utc
			.timestamp()
			.checked_mul(MICROS_PER_SECOND)
			.and_then(|m| m.checked_add((utc.timestamp_subsec_nanos() / 1_000) as i64))
			.ok_or(TimeError::OutOfRange)?;
		TimePoint::from_micros(micros)
	}
}

impl Serialize for TimePoint {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for TimePoint {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse()
			.map_err(|e| de::Error::custom(format_args!("invalid time point {:?}: {:?}", s, e)))
	}
}

/// Signed span of time in microseconds.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, MaxEncodedLen,
)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(i64);

impl Duration {
	pub const fn from_micros(micros: i64) -> Self {
		Self(micros)
	}

	pub fn from_hours(hours: i64) -> Result<Self, TimeError> {
		hours
			.checked_mul(MICROS_PER_HOUR)
			.map(Self)
			.ok_or(TimeError::OutOfRange)
	}

	pub const fn micros(&self) -> i64 {
		self.0
	}

	/// Whole hours, rounded towards zero.
	pub fn hours(&self) -> i64 {
		self.0 / MICROS_PER_HOUR
	}
}

impl From<Hours> for Duration {
	fn from(hours: Hours) -> Self {
		// u32::MAX hours fits into i64 microseconds
		Self(hours as i64 * MICROS_PER_HOUR)
	}
}

impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
