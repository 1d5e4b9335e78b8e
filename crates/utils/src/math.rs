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

//! Math utilities

use alloy_primitives::Uint;

/// Take a percentage of a number, rounding down
pub fn percent(n: u128, percent: u32) -> u128 {
    n.saturating_mul(percent as u128) / 100
}

/// Take a percentage of a uint, rounding down
pub fn uint_percent<const BITS: usize, const LIMBS: usize>(
    n: Uint<BITS, LIMBS>,
    percent: u32,
) -> Uint<BITS, LIMBS> {
    n.saturating_mul(Uint::<BITS, LIMBS>::from(percent)) / Uint::<BITS, LIMBS>::from(100)
}
