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

use contract_math::MathError;
use contract_primitives::{AssetError, TimeError};
use contract_variant::VariantError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistributionError {
	/// Payment would bring the paid out amount over the entitlement.
	#[error("payment exceeds the remaining entitlement")]
	Overpayment,
	/// Schedule with vesting parameters releases nothing or more than everything.
	#[error("invalid vesting schedule")]
	InvalidSchedule,
	/// Requested cycle lies beyond the last release of every distribution.
	#[error("cycle out of range")]
	CycleOutOfRange,
	/// Fungible amount used with an NFT outcome or the other way around.
	#[error("reward kind does not match the distribution")]
	KindMismatch,
	#[error("unknown distribution {0:?}")]
	UnknownDistribution(String),
	#[error("arithmetic overflow")]
	Overflow,
	#[error(transparent)]
	Asset(#[from] AssetError),
	#[error(transparent)]
	Math(#[from] MathError),
	#[error(transparent)]
	Variant(#[from] VariantError),
	#[error(transparent)]
	Time(#[from] TimeError),
}
