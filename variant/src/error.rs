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

use crate::tag::TypeTag;
use contract_primitives::NameError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
	/// Value was read as a different type than it holds.
	#[error("type mismatch: found {found}, expected {expected}")]
	TypeMismatch { found: TypeTag, expected: TypeTag },
	/// Text payload read as a name is not a valid name.
	#[error("text is not a valid name: {0}")]
	InvalidName(#[from] NameError),
	#[error("duplicate key {0:?}")]
	DuplicateKey(String),
	#[error("missing key {0:?}")]
	MissingKey(String),
}
