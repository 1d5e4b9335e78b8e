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

//! Descriptors of the contract functions the SDK calls.
//!
//! Whether a function is read-only or state changing is fixed here once, instead of being
//! looked up in ABI metadata on every call.

use std::fmt;

use alloy_sol_types::SolCall;

use crate::holograph::{IHolographBridge, IHolographOperator};

/// Mutability class of a contract function
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FunctionKind {
    /// `view` or `pure`, safe to `eth_call` from any sender
    Read,
    /// State changing, simulations must run from a realistic sender
    Write,
}

/// A contract function the SDK calls
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FunctionDescriptor {
    /// Contract name
    pub contract: &'static str,
    /// Function name
    pub name: &'static str,
    /// Solidity signature
    pub signature: &'static str,
    /// Mutability class
    pub kind: FunctionKind,
}

impl FunctionDescriptor {
    /// True if the function changes state
    pub fn is_write(&self) -> bool {
        self.kind == FunctionKind::Write
    }
}

impl fmt::Display for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.contract, self.name)
    }
}

/// `HolographBridge.bridgeOutRequest`
pub const BRIDGE_OUT_REQUEST: FunctionDescriptor = FunctionDescriptor {
    contract: "HolographBridge",
    name: "bridgeOutRequest",
    signature: IHolographBridge::bridgeOutRequestCall::SIGNATURE,
    kind: FunctionKind::Write,
};

/// `HolographBridge.getBridgeOutRequestPayload`
pub const GET_BRIDGE_OUT_REQUEST_PAYLOAD: FunctionDescriptor = FunctionDescriptor {
    contract: "HolographBridge",
    name: "getBridgeOutRequestPayload",
    signature: IHolographBridge::getBridgeOutRequestPayloadCall::SIGNATURE,
    kind: FunctionKind::Write,
};

/// `HolographBridge.getMessageFee`
pub const GET_MESSAGE_FEE: FunctionDescriptor = FunctionDescriptor {
    contract: "HolographBridge",
    name: "getMessageFee",
    signature: IHolographBridge::getMessageFeeCall::SIGNATURE,
    kind: FunctionKind::Read,
};

/// `HolographOperator.jobEstimator`
pub const JOB_ESTIMATOR: FunctionDescriptor = FunctionDescriptor {
    contract: "HolographOperator",
    name: "jobEstimator",
    signature: IHolographOperator::jobEstimatorCall::SIGNATURE,
    kind: FunctionKind::Write,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert!(!GET_MESSAGE_FEE.is_write());
        assert!(GET_BRIDGE_OUT_REQUEST_PAYLOAD.is_write());
        assert!(JOB_ESTIMATOR.is_write());
        assert_eq!(JOB_ESTIMATOR.to_string(), "HolographOperator.jobEstimator");
        assert_eq!(
            GET_MESSAGE_FEE.signature,
            "getMessageFee(uint32,uint256,uint256,bytes)"
        );
    }
}
