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

use crate::constants::PAYOUT_LOG_TARGET;
use crate::error::DistributionError;
use crate::outcome::DistributionOutcome;
use crate::scheduler::VestingContext;

use codec::{Decode, Encode};
use contract_math::types::Cycle;
use contract_primitives::{Name, TimePoint, TransactionId};
use contract_traits::{ContractClient, Permission};
use contract_variant::{KeyedVariantList, RewardAmount};
use core::fmt;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Action payload transferring one release of a distribution.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct ReleasePayload {
	/// Sequence number of the action. A retried release carries the same nonce.
	pub nonce: u64,
	pub distribution: String,
	/// Number of the release, starting at 1.
	pub cycle: Cycle,
	pub amount: RewardAmount,
	pub release_time: TimePoint,
}

/// Release committed by [`PayoutDriver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Release {
	pub distribution: String,
	pub amount: RewardAmount,
	pub nonce: u64,
	pub transaction: TransactionId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayoutError<E: fmt::Debug> {
	#[error(transparent)]
	Distribution(#[from] DistributionError),
	/// Action was rejected. Outcome of the failing distribution is unchanged.
	#[error("contract action failed: {0:?}")]
	Client(E),
}

/// Executes releases against the contract.
///
/// The nonce is explicit state: it only moves forward once an action went through, so a release
/// retried after a failure is submitted with the same nonce.
pub struct PayoutDriver<C> {
	client: C,
	permission: Permission,
	action: Name,
	nonce: u64,
}

impl<C: ContractClient> PayoutDriver<C>
where
	C::Error: fmt::Debug,
{
	pub fn new(client: C, permission: Permission, action: Name) -> Self {
		Self {
			client,
			permission,
			action,
			nonce: 0,
		}
	}

	/// Resume from a nonce persisted by a previous driver.
	pub fn with_nonce(mut self, nonce: u64) -> Self {
		self.nonce = nonce;
		self
	}

	pub fn nonce(&self) -> u64 {
		self.nonce
	}

	pub fn client(&self) -> &C {
		&self.client
	}

	/// Pays out every distribution of `context`.
	///
	/// Each release is checked against its outcome first, then submitted, and committed to
	/// `outcomes` only once the action succeeded. Processing stops at the first error; releases
	/// submitted before it stay committed. Releases of nothing are skipped.
	pub fn release(
		&mut self,
		context: &VestingContext,
		outcomes: &mut KeyedVariantList<DistributionOutcome>,
	) -> Result<Vec<Release>, PayoutError<C::Error>> {
		let mut releases = Vec::with_capacity(context.len());

		for (distribution, tracker) in context.releases().iter() {
			let outcome = outcomes
				.find(distribution)
				.ok_or_else(|| DistributionError::UnknownDistribution(distribution.to_owned()))?;
			let previous = tracker.cycle().checked_sub(1).ok_or(DistributionError::CycleOutOfRange)?;
			let amount = outcome.release_amount(tracker.schedule().release_percent(), previous)?;
			if amount.is_zero() {
				log::debug!(target: PAYOUT_LOG_TARGET, "{distribution}: nothing to release in cycle {}", tracker.cycle());
				continue;
			}

			let mut staged = *outcome;
			staged.pay(amount)?;

			let payload = ReleasePayload {
				nonce: self.nonce,
				distribution: distribution.to_owned(),
				cycle: tracker.cycle(),
				amount,
				release_time: context.release_time(),
			};
			releases.push(self.submit(distribution, payload, staged, outcomes)?);
		}

		Ok(releases)
	}

	/// Pays out whatever is left of a distribution in a single action.
	///
	/// Returns `None` without submitting anything when nothing is left.
	pub fn settle(
		&mut self,
		distribution: &str,
		release_time: TimePoint,
		outcomes: &mut KeyedVariantList<DistributionOutcome>,
	) -> Result<Option<Release>, PayoutError<C::Error>> {
		let outcome = outcomes
			.find(distribution)
			.ok_or_else(|| DistributionError::UnknownDistribution(distribution.to_owned()))?;
		let amount = outcome.remaining()?;
		if amount.is_zero() {
			log::debug!(target: PAYOUT_LOG_TARGET, "{distribution}: nothing left to settle");
			return Ok(None);
		}

		let mut staged = *outcome;
		staged.pay_full();

		let payload = ReleasePayload {
			nonce: self.nonce,
			distribution: distribution.to_owned(),
			cycle: 1,
			amount,
			release_time,
		};
		self.submit(distribution, payload, staged, outcomes).map(Some)
	}

	fn submit(
		&mut self,
		distribution: &str,
		payload: ReleasePayload,
		staged: DistributionOutcome,
		outcomes: &mut KeyedVariantList<DistributionOutcome>,
	) -> Result<Release, PayoutError<C::Error>> {
		let transaction = self
			.client
			.execute(&self.permission, self.action, &payload)
			.map_err(|err| {
				log::warn!(
					target: PAYOUT_LOG_TARGET,
					"{} by {} failed for {distribution} (nonce {}): {err:?}",
					self.action,
					self.permission,
					payload.nonce
				);
				PayoutError::Client(err)
			})?;

		outcomes.upsert(distribution, staged);
		self.nonce = self.nonce.saturating_add(1);
		log::info!(
			target: PAYOUT_LOG_TARGET,
			"released {} of {distribution} in cycle {} (nonce {}, transaction {transaction})",
			payload.amount,
			payload.cycle,
			payload.nonce
		);

		Ok(Release {
			distribution: payload.distribution,
			amount: payload.amount,
			nonce: payload.nonce,
			transaction,
		})
	}
}
