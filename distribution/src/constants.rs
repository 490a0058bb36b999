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

/// Config key of the number of hours between two releases.
pub const RELEASE_INTERVAL_HOURS_KEY: &str = "release_interval_hours";

/// Config key of the percentage released per cycle, `100_000` being 100%.
pub const RELEASE_PERCENT_KEY: &str = "release_percent_x100000";

pub const VESTING_LOG_TARGET: &str = "contract::vesting";

pub const PAYOUT_LOG_TARGET: &str = "contract::payout";
