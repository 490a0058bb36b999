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

use crate::constants::{RELEASE_INTERVAL_HOURS_KEY, RELEASE_PERCENT_KEY, VESTING_LOG_TARGET};
use crate::error::DistributionError;

use codec::{Decode, Encode, Input, Output};
use contract_math::types::{Cycle, PercentX100000, ONE_HUNDRED_PERCENT};
use contract_math::vesting::{calculate_cycle_release_percent, calculate_total_cycles};
use contract_primitives::Hours;
use contract_variant::{ConfigSet, Unpack};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vesting parameters of a distribution.
///
/// Backed by a [`ConfigSet`]. An empty set releases everything at once and behaves exactly like
/// a `0` hour / `100%` schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigSet", into = "ConfigSet")]
pub struct VestingSchedule {
	config: ConfigSet,
	release_interval_hours: Hours,
	release_percent: PercentX100000,
	total_cycles: Cycle,
}

impl Default for VestingSchedule {
	fn default() -> Self {
		Self::immediate()
	}
}

impl VestingSchedule {
	/// Schedule releasing the whole entitlement in a single cycle, right at the start.
	pub fn immediate() -> Self {
		Self {
			config: ConfigSet::new(),
			release_interval_hours: 0,
			release_percent: ONE_HUNDRED_PERCENT,
			total_cycles: 1,
		}
	}

	pub fn new(release_interval_hours: Hours, release_percent: PercentX100000) -> Result<Self, DistributionError> {
		let mut config = ConfigSet::new();
		config.set(RELEASE_INTERVAL_HOURS_KEY, release_interval_hours);
		config.set(RELEASE_PERCENT_KEY, release_percent);
		Self::from_config(config)
	}

	/// Validates vesting parameters read from `config`.
	///
	/// Fails with [`DistributionError::InvalidSchedule`] when a non-empty set misses a parameter,
	/// holds one of the wrong type, releases nothing per cycle, more than 100% per cycle or needs
	/// more cycles than can be counted.
	pub fn from_config(config: ConfigSet) -> Result<Self, DistributionError> {
		if config.is_empty() {
			return Ok(Self::immediate());
		}

		let require = |key: &str| {
			config.require::<u32>(key).map_err(|err| {
				log::warn!(target: VESTING_LOG_TARGET, "rejecting schedule: {key}: {err}");
				DistributionError::InvalidSchedule
			})
		};
		let release_interval_hours = require(RELEASE_INTERVAL_HOURS_KEY)?;
		let release_percent = require(RELEASE_PERCENT_KEY)?;
		let total_cycles = calculate_total_cycles(release_percent).map_err(|err| {
			log::warn!(
				target: VESTING_LOG_TARGET,
				"rejecting schedule releasing {release_percent} every {release_interval_hours}h: {err:?}"
			);
			DistributionError::InvalidSchedule
		})?;

		Ok(Self {
			config,
			release_interval_hours,
			release_percent,
			total_cycles,
		})
	}

	pub fn has_vesting(&self) -> bool {
		!self.config.is_empty()
	}

	pub fn config(&self) -> &ConfigSet {
		&self.config
	}

	pub fn release_interval_hours(&self) -> Hours {
		self.release_interval_hours
	}

	pub fn release_percent(&self) -> PercentX100000 {
		self.release_percent
	}

	/// Number of releases needed to pay out everything.
	pub fn total_cycles(&self) -> Cycle {
		self.total_cycles
	}

	/// Percentage released by the cycle following `cycle` previous releases. The last cycle
	/// releases the remainder, cycles past the last one release nothing.
	pub fn percent(&self, cycle: Cycle) -> PercentX100000 {
		calculate_cycle_release_percent(self.release_percent, cycle)
	}
}

impl TryFrom<ConfigSet> for VestingSchedule {
	type Error = DistributionError;

	fn try_from(config: ConfigSet) -> Result<Self, Self::Error> {
		Self::from_config(config)
	}
}

impl From<VestingSchedule> for ConfigSet {
	fn from(schedule: VestingSchedule) -> Self {
		schedule.config
	}
}

impl Encode for VestingSchedule {
	fn size_hint(&self) -> usize {
		self.config.size_hint()
	}

	fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
		self.config.encode_to(dest)
	}
}

impl Decode for VestingSchedule {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		let config = ConfigSet::decode(input)?;
		Self::from_config(config).map_err(|_| "invalid vesting schedule".into())
	}
}

impl Unpack for VestingSchedule {
	type Unpacked = BTreeMap<String, serde_json::Value>;

	fn unpack(&self) -> Self::Unpacked {
		self.config.to_map()
	}
}
