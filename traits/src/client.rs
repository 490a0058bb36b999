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

use crate::table::{Row, TableQuery};

use codec::{Decode, Encode, MaxEncodedLen};
use contract_primitives::{Name, TransactionId};
use core::fmt;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_std::vec::Vec;

/// Authority an action is signed with, rendered as `actor@permission`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize, Deserialize)]
pub struct Permission {
	pub actor: Name,
	pub permission: Name,
}

impl Permission {
	pub fn new(actor: Name, permission: Name) -> Self {
		Self { actor, permission }
	}
}

impl fmt::Display for Permission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}@{}", self.actor, self.permission)
	}
}

/// Transport to the contract. Signing, submission, retries and pagination are the implementer's
/// business; the SDK core only builds payloads and decodes rows.
pub trait ContractClient {
	type Error;

	/// Submit a signed transaction carrying a single action.
	///
	/// Returns: id of the submitted transaction
	fn execute_action(
		&self,
		permission: &Permission,
		action: Name,
		payload: Vec<u8>,
	) -> Result<TransactionId, Self::Error>;

	/// Fetch rows of a table bounded by the query.
	fn query_rows(&self, query: &TableQuery) -> Result<Vec<Row>, Self::Error>;

	/// Encode `payload` and submit it.
	fn execute<P: Encode>(
		&self,
		permission: &Permission,
		action: Name,
		payload: &P,
	) -> Result<TransactionId, Self::Error> {
		self.execute_action(permission, action, payload.encode())
	}
}
