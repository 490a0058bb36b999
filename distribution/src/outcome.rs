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

use crate::error::DistributionError;

use codec::{Decode, Encode, Input, MaxEncodedLen};
use contract_math::types::{Balance, Cycle, PercentX100000};
use contract_math::vesting::calculate_cycle_release_amount;
use contract_primitives::{Asset, AssetError, NftCount};
use contract_variant::{RewardAmount, Unpack};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

/// Fungible reward split of a distribution.
///
/// All four amounts carry the same symbol and `amount_paid_out` never exceeds
/// `prize + minimum_payout`. Both hold for every value that can be constructed or decoded.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, TypeInfo, MaxEncodedLen, Serialize, Deserialize)]
#[serde(try_from = "FungibleParts")]
pub struct FungibleOutcome {
	prize: Asset,
	minimum_payout: Asset,
	amount_paid_out: Asset,
	early_exit_fee: Asset,
}

#[derive(Decode, Deserialize)]
struct FungibleParts {
	prize: Asset,
	minimum_payout: Asset,
	amount_paid_out: Asset,
	early_exit_fee: Asset,
}

impl FungibleOutcome {
	pub fn new(prize: Asset, minimum_payout: Asset, early_exit_fee: Asset) -> Result<Self, DistributionError> {
		Self::from_parts(FungibleParts {
			prize,
			minimum_payout,
			amount_paid_out: Asset::zero(prize.symbol),
			early_exit_fee,
		})
	}

	fn from_parts(parts: FungibleParts) -> Result<Self, DistributionError> {
		let outcome = Self {
			prize: parts.prize,
			minimum_payout: parts.minimum_payout,
			amount_paid_out: parts.amount_paid_out,
			early_exit_fee: parts.early_exit_fee,
		};

		for asset in [outcome.minimum_payout, outcome.amount_paid_out, outcome.early_exit_fee] {
			outcome.prize.ensure_same_symbol(&asset)?;
		}
		let amounts = [outcome.prize, outcome.minimum_payout, outcome.amount_paid_out, outcome.early_exit_fee];
		if amounts.iter().any(|asset| asset.amount < 0) {
			return Err(AssetError::InvalidAmount.into());
		}
		if outcome.amount_paid_out.amount > outcome.total_entitlement()?.amount {
			return Err(DistributionError::Overpayment);
		}

		Ok(outcome)
	}

	pub fn prize(&self) -> Asset {
		self.prize
	}

	pub fn minimum_payout(&self) -> Asset {
		self.minimum_payout
	}

	pub fn amount_paid_out(&self) -> Asset {
		self.amount_paid_out
	}

	pub fn early_exit_fee(&self) -> Asset {
		self.early_exit_fee
	}

	pub fn total_entitlement(&self) -> Result<Asset, DistributionError> {
		Ok(self.prize.checked_add(&self.minimum_payout)?)
	}

	pub fn remaining(&self) -> Result<Asset, DistributionError> {
		Ok(self.total_entitlement()?.checked_sub(&self.amount_paid_out)?)
	}

	/// Adds `amount` to the paid out total. Nothing changes when the payment is rejected.
	pub fn pay(&mut self, amount: Asset) -> Result<(), DistributionError> {
		if amount.amount < 0 {
			return Err(AssetError::InvalidAmount.into());
		}
		let paid = self.amount_paid_out.checked_add(&amount)?;
		if paid.amount > self.total_entitlement()?.amount {
			return Err(DistributionError::Overpayment);
		}

		self.amount_paid_out = paid;
		Ok(())
	}

	pub fn pay_full(&mut self) {
		// entitlement is validated on construction
		if let Ok(entitlement) = self.total_entitlement() {
			self.amount_paid_out = entitlement;
		}
	}

	pub fn has_payout(&self) -> bool {
		self.total_entitlement()
			.map(|entitlement| entitlement.is_positive())
			.unwrap_or(false)
	}

	fn release_amount(&self, release_percent: PercentX100000, cycle: Cycle) -> Result<Asset, DistributionError> {
		let entitlement = to_balance(self.total_entitlement()?.amount)?;
		let paid = to_balance(self.amount_paid_out.amount)?;
		let amount = calculate_cycle_release_amount(entitlement, paid, release_percent, cycle)?;
		let amount = i64::try_from(amount).map_err(|_| DistributionError::Overflow)?;
		Ok(Asset::new(amount, self.prize.symbol)?)
	}
}

impl Decode for FungibleOutcome {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		let parts = FungibleParts::decode(input)?;
		Self::from_parts(parts).map_err(|_| "invalid fungible outcome".into())
	}
}

impl TryFrom<FungibleParts> for FungibleOutcome {
	type Error = DistributionError;

	fn try_from(parts: FungibleParts) -> Result<Self, Self::Error> {
		Self::from_parts(parts)
	}
}

/// Non-fungible reward split of a distribution, counted in tokens.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, TypeInfo, MaxEncodedLen, Serialize, Deserialize)]
#[serde(try_from = "NftParts")]
pub struct NftOutcome {
	prize: NftCount,
	minimum_payout: NftCount,
	amount_paid_out: NftCount,
	early_exit_fee: NftCount,
}

#[derive(Decode, Deserialize)]
struct NftParts {
	prize: NftCount,
	minimum_payout: NftCount,
	amount_paid_out: NftCount,
	early_exit_fee: NftCount,
}

impl NftOutcome {
	/// Paid out counts are `u16`, so `prize + minimum_payout` has to fit into a `u16` as well.
	/// Larger entitlements fail with [`DistributionError::Overflow`].
	pub fn new(prize: NftCount, minimum_payout: NftCount, early_exit_fee: NftCount) -> Result<Self, DistributionError> {
		Self::from_parts(NftParts {
			prize,
			minimum_payout,
			amount_paid_out: 0,
			early_exit_fee,
		})
	}

	fn from_parts(parts: NftParts) -> Result<Self, DistributionError> {
		let outcome = Self {
			prize: parts.prize,
			minimum_payout: parts.minimum_payout,
			amount_paid_out: parts.amount_paid_out,
			early_exit_fee: parts.early_exit_fee,
		};
		if outcome.amount_paid_out > outcome.total_entitlement()? {
			return Err(DistributionError::Overpayment);
		}
		Ok(outcome)
	}

	pub fn prize(&self) -> NftCount {
		self.prize
	}

	pub fn minimum_payout(&self) -> NftCount {
		self.minimum_payout
	}

	pub fn amount_paid_out(&self) -> NftCount {
		self.amount_paid_out
	}

	pub fn early_exit_fee(&self) -> NftCount {
		self.early_exit_fee
	}

	pub fn total_entitlement(&self) -> Result<NftCount, DistributionError> {
		self.prize
			.checked_add(self.minimum_payout)
			.ok_or(DistributionError::Overflow)
	}

	pub fn remaining(&self) -> Result<NftCount, DistributionError> {
		// paid out never exceeds the entitlement
		Ok(self.total_entitlement()?.saturating_sub(self.amount_paid_out))
	}

	/// Adds `count` to the paid out total. Nothing changes when the payment is rejected.
	pub fn pay(&mut self, count: NftCount) -> Result<(), DistributionError> {
		let paid = self
			.amount_paid_out
			.checked_add(count)
			.ok_or(DistributionError::Overpayment)?;
		if paid > self.total_entitlement()? {
			return Err(DistributionError::Overpayment);
		}

		self.amount_paid_out = paid;
		Ok(())
	}

	pub fn pay_full(&mut self) {
		if let Ok(entitlement) = self.total_entitlement() {
			self.amount_paid_out = entitlement;
		}
	}

	pub fn has_payout(&self) -> bool {
		self.total_entitlement().map(|entitlement| entitlement > 0).unwrap_or(false)
	}

	fn release_amount(&self, release_percent: PercentX100000, cycle: Cycle) -> Result<NftCount, DistributionError> {
		let amount = calculate_cycle_release_amount(
			self.total_entitlement()? as Balance,
			self.amount_paid_out as Balance,
			release_percent,
			cycle,
		)?;
		NftCount::try_from(amount).map_err(|_| DistributionError::Overflow)
	}
}

impl Decode for NftOutcome {
	fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
		let parts = NftParts::decode(input)?;
		Self::from_parts(parts).map_err(|_| "invalid nft outcome".into())
	}
}

impl TryFrom<NftParts> for NftOutcome {
	type Error = DistributionError;

	fn try_from(parts: NftParts) -> Result<Self, Self::Error> {
		Self::from_parts(parts)
	}
}

fn to_balance(amount: i64) -> Result<Balance, DistributionError> {
	Balance::try_from(amount).map_err(|_| DistributionError::Asset(AssetError::InvalidAmount))
}

/// Reward split of a distribution, fungible or not.
///
/// Every payout path (claim, early exit, vesting release) goes through [`DistributionOutcome::pay`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DistributionOutcome {
	#[codec(index = 0)]
	Fungible(FungibleOutcome),
	#[codec(index = 1)]
	Nft(NftOutcome),
}

impl DistributionOutcome {
	pub fn total_entitlement(&self) -> Result<RewardAmount, DistributionError> {
		match self {
			DistributionOutcome::Fungible(outcome) => outcome.total_entitlement().map(RewardAmount::Asset),
			DistributionOutcome::Nft(outcome) => outcome.total_entitlement().map(RewardAmount::NftCount),
		}
	}

	pub fn amount_paid_out(&self) -> RewardAmount {
		match self {
			DistributionOutcome::Fungible(outcome) => RewardAmount::Asset(outcome.amount_paid_out()),
			DistributionOutcome::Nft(outcome) => RewardAmount::NftCount(outcome.amount_paid_out()),
		}
	}

	pub fn early_exit_fee(&self) -> RewardAmount {
		match self {
			DistributionOutcome::Fungible(outcome) => RewardAmount::Asset(outcome.early_exit_fee()),
			DistributionOutcome::Nft(outcome) => RewardAmount::NftCount(outcome.early_exit_fee()),
		}
	}

	pub fn remaining(&self) -> Result<RewardAmount, DistributionError> {
		match self {
			DistributionOutcome::Fungible(outcome) => outcome.remaining().map(RewardAmount::Asset),
			DistributionOutcome::Nft(outcome) => outcome.remaining().map(RewardAmount::NftCount),
		}
	}

	/// Adds `amount` to the paid out total.
	///
	/// Fails with [`DistributionError::Overpayment`] when the total would exceed the entitlement
	/// and with [`DistributionError::KindMismatch`] when `amount` is of the other kind. A failed
	/// payment leaves the outcome untouched.
	pub fn pay(&mut self, amount: RewardAmount) -> Result<(), DistributionError> {
		match (self, amount) {
			(DistributionOutcome::Fungible(outcome), RewardAmount::Asset(asset)) => outcome.pay(asset),
			(DistributionOutcome::Nft(outcome), RewardAmount::NftCount(count)) => outcome.pay(count),
			_ => Err(DistributionError::KindMismatch),
		}
	}

	/// Marks the whole entitlement as paid out.
	pub fn pay_full(&mut self) {
		match self {
			DistributionOutcome::Fungible(outcome) => outcome.pay_full(),
			DistributionOutcome::Nft(outcome) => outcome.pay_full(),
		}
	}

	pub fn has_payout(&self) -> bool {
		match self {
			DistributionOutcome::Fungible(outcome) => outcome.has_payout(),
			DistributionOutcome::Nft(outcome) => outcome.has_payout(),
		}
	}

	pub fn is_fully_paid(&self) -> bool {
		self.remaining().map(|remaining| remaining.is_zero()).unwrap_or(false)
	}

	/// Settles the distribution for a participant leaving before the vesting ends.
	///
	/// The remaining entitlement is paid out at once and the early exit fee is withheld from it.
	///
	/// Returns: amount to transfer to the participant
	pub fn charge_early_exit(&mut self) -> Result<RewardAmount, DistributionError> {
		let remaining = self.remaining()?;
		let net = match (remaining, self.early_exit_fee()) {
			(RewardAmount::Asset(remaining), RewardAmount::Asset(fee)) => {
				let fee = Asset::new(fee.amount.min(remaining.amount), fee.symbol)?;
				RewardAmount::Asset(remaining.checked_sub(&fee)?)
			}
			(RewardAmount::NftCount(remaining), RewardAmount::NftCount(fee)) => {
				RewardAmount::NftCount(remaining.saturating_sub(fee))
			}
			_ => return Err(DistributionError::KindMismatch),
		};

		self.pay(remaining)?;
		Ok(net)
	}

	/// Amount released by the cycle following `cycle` previous releases.
	///
	/// The amount tops the paid out total up to the cumulative share of the entitlement, so the
	/// final cycle releases whatever is left.
	pub fn release_amount(
		&self,
		release_percent: PercentX100000,
		cycle: Cycle,
	) -> Result<RewardAmount, DistributionError> {
		match self {
			DistributionOutcome::Fungible(outcome) => outcome
				.release_amount(release_percent, cycle)
				.map(RewardAmount::Asset),
			DistributionOutcome::Nft(outcome) => outcome
				.release_amount(release_percent, cycle)
				.map(RewardAmount::NftCount),
		}
	}
}

impl From<FungibleOutcome> for DistributionOutcome {
	fn from(outcome: FungibleOutcome) -> Self {
		DistributionOutcome::Fungible(outcome)
	}
}

impl From<NftOutcome> for DistributionOutcome {
	fn from(outcome: NftOutcome) -> Self {
		DistributionOutcome::Nft(outcome)
	}
}

impl Unpack for DistributionOutcome {
	type Unpacked = JsonValue;

	fn unpack(&self) -> Self::Unpacked {
		match self {
			DistributionOutcome::Fungible(outcome) => json!({
				"prize": outcome.prize.to_string(),
				"minimum_payout": outcome.minimum_payout.to_string(),
				"amount_paid_out": outcome.amount_paid_out.to_string(),
				"early_exit_fee": outcome.early_exit_fee.to_string(),
			}),
			DistributionOutcome::Nft(outcome) => json!({
				"prize": outcome.prize,
				"minimum_payout": outcome.minimum_payout,
				"amount_paid_out": outcome.amount_paid_out,
				"early_exit_fee": outcome.early_exit_fee,
			}),
		}
	}
}
