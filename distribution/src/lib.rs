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

//! # Contract Distribution
//!
//! Reward bookkeeping of a round:
//!
//! - [`DistributionOutcome`] tracks what a distribution owes and what was paid out so far. Every
//!   payout goes through [`DistributionOutcome::pay`], which refuses to pay more than the
//!   entitlement.
//! - [`VestingSchedule`] and [`VestingScheduler`] decide when each distribution releases its next
//!   cycle.
//! - [`PayoutDriver`] turns a [`VestingContext`] into contract actions and commits outcomes once
//!   the actions went through.
//!
//! Nothing here reads a clock. Start times are passed in by the caller.

pub mod constants;
pub mod error;
pub mod outcome;
pub mod payout;
pub mod schedule;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::DistributionError;
pub use outcome::{DistributionOutcome, FungibleOutcome, NftOutcome};
pub use payout::{PayoutDriver, PayoutError, Release, ReleasePayload};
pub use schedule::VestingSchedule;
pub use scheduler::{VestingContext, VestingScheduler, VestingTracker};

/// Outcomes of all distributions of a round, keyed by distribution name.
pub type DistributionMap = contract_variant::KeyedVariantList<DistributionOutcome>;
