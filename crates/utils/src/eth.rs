// This file is part of the Holograph SDK.
//
// The Holograph SDK is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// The Holograph SDK is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with the Holograph SDK.
// If not, see https://www.gnu.org/licenses/.

//! Utilities for working with EVM revert data

use alloy_primitives::hex;
use alloy_sol_types::{Revert, SolError};

/// Parses the revert message from the revert data
pub fn parse_revert_message(revert_data: &[u8]) -> Option<String> {
    Revert::abi_decode(revert_data).ok().map(|err| err.reason)
}

/// Human readable description of revert data: the revert message if the data
/// is an `Error(string)`, hex encoded data otherwise
pub fn describe_revert(revert_data: &[u8]) -> String {
    parse_revert_message(revert_data).unwrap_or_else(|| hex::encode_prefixed(revert_data))
}
