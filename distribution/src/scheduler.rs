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

use crate::constants::VESTING_LOG_TARGET;
use crate::error::DistributionError;
use crate::schedule::VestingSchedule;

use contract_math::types::{Cycle, PercentX100000};
use contract_math::vesting::calculate_release_offset_hours;
use contract_primitives::TimePoint;
use contract_variant::KeyedVariantList;

/// Release progress of a single distribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingTracker {
	distribution: String,
	schedule: VestingSchedule,
	cycle: Cycle,
}

impl VestingTracker {
	pub fn new(distribution: impl Into<String>, schedule: VestingSchedule) -> Self {
		Self {
			distribution: distribution.into(),
			schedule,
			cycle: 0,
		}
	}

	pub fn distribution(&self) -> &str {
		&self.distribution
	}

	pub fn schedule(&self) -> &VestingSchedule {
		&self.schedule
	}

	/// Number of cycles released so far.
	pub fn cycle(&self) -> Cycle {
		self.cycle
	}

	pub fn remaining_cycles(&self) -> Cycle {
		self.schedule.total_cycles().saturating_sub(self.cycle)
	}

	pub fn is_exhausted(&self) -> bool {
		self.remaining_cycles() == 0
	}

	/// Whether the most recent release was the last one.
	pub fn is_final_release(&self) -> bool {
		self.cycle > 0 && self.is_exhausted()
	}

	/// Percentage paid by the most recent release.
	pub fn released_percent(&self) -> PercentX100000 {
		match self.cycle.checked_sub(1) {
			Some(previous) => self.schedule.percent(previous),
			None => 0,
		}
	}

	/// Time of the next release, `None` once every cycle has been released.
	pub fn next_release_time(&self, start_time: TimePoint) -> Result<Option<TimePoint>, DistributionError> {
		if self.is_exhausted() {
			return Ok(None);
		}
		let offset = calculate_release_offset_hours(self.schedule.release_interval_hours(), self.cycle)?;
		Ok(Some(start_time.checked_add_hours(offset)?))
	}
}

/// Distributions releasing their next cycle at `release_time`.
///
/// Each tracker is captured right after its release, so [`VestingTracker::cycle`] counts the
/// release this context stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingContext {
	releases: KeyedVariantList<VestingTracker>,
	release_time: TimePoint,
}

impl VestingContext {
	fn empty(release_time: TimePoint) -> Self {
		Self {
			releases: KeyedVariantList::new(),
			release_time,
		}
	}

	pub fn release_time(&self) -> TimePoint {
		self.release_time
	}

	pub fn releases(&self) -> &KeyedVariantList<VestingTracker> {
		&self.releases
	}

	pub fn is_empty(&self) -> bool {
		self.releases.is_empty()
	}

	pub fn len(&self) -> usize {
		self.releases.len()
	}

	pub fn contains(&self, distribution: &str) -> bool {
		self.releases.contains_key(distribution)
	}

	pub fn release(&self, distribution: &str) -> Option<&VestingTracker> {
		self.releases.find(distribution)
	}

	pub fn distributions(&self) -> impl Iterator<Item = &str> {
		self.releases.keys()
	}
}

/// Orders the releases of all distributions of a round.
///
/// Callers serialize access per round. The scheduler never reads a clock; every operation takes
/// the start of the vesting phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingScheduler {
	trackers: KeyedVariantList<VestingTracker>,
}

impl VestingScheduler {
	pub fn new(schedules: &KeyedVariantList<VestingSchedule>) -> Self {
		let trackers = schedules
			.iter()
			.map(|(distribution, schedule)| (distribution, VestingTracker::new(distribution, schedule.clone())))
			.collect();
		Self { trackers }
	}

	pub fn trackers(&self) -> &KeyedVariantList<VestingTracker> {
		&self.trackers
	}

	/// Restarts the vesting phase.
	pub fn reset(&mut self) {
		for (_, tracker) in self.trackers.iter_mut() {
			tracker.cycle = 0;
		}
	}

	pub fn is_exhausted(&self) -> bool {
		self.trackers.values().all(VestingTracker::is_exhausted)
	}

	pub fn remaining_cycles(&self, distribution: &str) -> Option<Cycle> {
		self.trackers.find(distribution).map(VestingTracker::remaining_cycles)
	}

	/// Advances the distributions with the earliest pending release.
	///
	/// All trackers due at the earliest release time are part of the context and move on by one
	/// cycle. Trackers due later keep their cycle. Returns an empty context at `start_time` once
	/// the scheduler is exhausted.
	pub fn find_next(&mut self, start_time: TimePoint) -> Result<VestingContext, DistributionError> {
		let mut due = Vec::with_capacity(self.trackers.len());
		for (distribution, tracker) in self.trackers.iter() {
			if let Some(release_time) = tracker.next_release_time(start_time)? {
				due.push((distribution.to_owned(), release_time));
			}
		}

		let Some(release_time) = due.iter().map(|(_, time)| *time).min() else {
			log::debug!(target: VESTING_LOG_TARGET, "all distributions released");
			return Ok(VestingContext::empty(start_time));
		};

		let mut context = VestingContext::empty(release_time);
		for (distribution, time) in due {
			if time != release_time {
				continue;
			}
			if let Some(tracker) = self.trackers.find_mut(&distribution) {
				tracker.cycle = tracker.cycle.checked_add(1).ok_or(DistributionError::Overflow)?;
				log::debug!(
					target: VESTING_LOG_TARGET,
					"{distribution} releases cycle {}/{} at {release_time}",
					tracker.cycle,
					tracker.schedule.total_cycles()
				);
				context.releases.upsert(distribution, tracker.clone());
			}
		}

		Ok(context)
	}

	/// Context of the `target_cycle`-th release of the vesting phase.
	///
	/// Computed on a restarted copy, so the scheduler itself is left untouched and repeated calls
	/// give the same answer. Fails with [`DistributionError::CycleOutOfRange`] when the phase
	/// ends before `target_cycle` releases happened.
	pub fn context_for_cycle(
		&self,
		target_cycle: Cycle,
		start_time: TimePoint,
	) -> Result<VestingContext, DistributionError> {
		if target_cycle == 0 {
			return Err(DistributionError::CycleOutOfRange);
		}

		let mut scheduler = self.clone();
		scheduler.reset();

		let mut context = VestingContext::empty(start_time);
		for _ in 0..target_cycle {
			context = scheduler.find_next(start_time)?;
			if context.is_empty() {
				return Err(DistributionError::CycleOutOfRange);
			}
		}
		Ok(context)
	}

	/// All remaining releases in order, computed on a copy.
	pub fn timeline(&self, start_time: TimePoint) -> Result<Vec<VestingContext>, DistributionError> {
		let mut scheduler = self.clone();
		let mut timeline = Vec::new();
		loop {
			let context = scheduler.find_next(start_time)?;
			if context.is_empty() {
				return Ok(timeline);
			}
			timeline.push(context);
		}
	}
}
