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

//! Bindings for the Holograph bridge and operator contracts

use alloy_primitives::{keccak256, Address, B256};
use alloy_sol_macro::sol;

sol!(
    #[allow(missing_docs)]
    #[derive(Default, Debug, PartialEq, Eq)]
    struct DeploymentConfig {
        bytes32 contractType;
        uint32 chainType;
        bytes32 salt;
        bytes byteCode;
        bytes initCode;
    }

    #[allow(missing_docs)]
    #[derive(Default, Debug, PartialEq, Eq)]
    struct Verification {
        bytes32 r;
        bytes32 s;
        uint8 v;
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IHolographBridge {
        function bridgeOutRequest(
            uint32 toChain,
            address holographableContract,
            uint256 gasLimit,
            uint256 gasPrice,
            bytes calldata bridgeOutPayload
        ) external payable;

        function getBridgeOutRequestPayload(
            uint32 toChain,
            address holographableContract,
            uint256 gasLimit,
            uint256 gasPrice,
            bytes calldata bridgeOutPayload
        ) external returns (bytes memory samplePayload);

        function getMessageFee(
            uint32 toChain,
            uint256 gasLimit,
            uint256 gasPrice,
            bytes calldata crossChainPayload
        ) external view returns (uint256 hlgFee, uint256 msgFee, uint256 dstGasPrice);
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IHolographOperator {
        function jobEstimator(
            bytes calldata bridgeInRequestPayload
        ) external payable returns (uint256);
    }
);

impl DeploymentConfig {
    /// Hash of the config bound to the address that will sign it.
    ///
    /// `keccak256(contractType ++ chainType ++ salt ++ keccak256(byteCode) ++ keccak256(initCode) ++ signer)`
    pub fn hash(&self, signer: Address) -> B256 {
        let mut packed = Vec::with_capacity(32 + 4 + 32 * 3 + 20);
        packed.extend_from_slice(self.contractType.as_slice());
        packed.extend_from_slice(&self.chainType.to_be_bytes());
        packed.extend_from_slice(self.salt.as_slice());
        packed.extend_from_slice(keccak256(&self.byteCode).as_slice());
        packed.extend_from_slice(keccak256(&self.initCode).as_slice());
        packed.extend_from_slice(signer.as_slice());
        keccak256(packed)
    }
}

/// Encode a contract type name as a right padded `bytes32`, as the factory expects
pub fn contract_type(name: &str) -> B256 {
    let mut out = B256::ZERO;
    let len = name.len().min(32);
    out[..len].copy_from_slice(&name.as_bytes()[..len]);
    out
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, bytes};
    use alloy_sol_types::SolValue;

    use super::*;

    #[test]
    fn test_contract_type() {
        let ty = contract_type("HolographERC721");
        assert_eq!(&ty[..15], b"HolographERC721");
        assert!(ty[15..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_hash_binds_signer() {
        let config = DeploymentConfig {
            contractType: contract_type("HolographERC721"),
            chainType: 4000000001,
            salt: B256::with_last_byte(1),
            byteCode: bytes!("6080"),
            initCode: bytes!("00"),
        };
        let a = config.hash(address!("000000000000000000000000000000000000000a"));
        let b = config.hash(address!("000000000000000000000000000000000000000b"));
        assert_ne!(a, b);
        assert_eq!(a, config.hash(address!("000000000000000000000000000000000000000a")));
    }

    #[test]
    fn test_hash_packing() {
        let signer = address!("000000000000000000000000000000000000000a");
        let config = DeploymentConfig {
            contractType: B256::with_last_byte(7),
            chainType: 2,
            salt: B256::with_last_byte(9),
            byteCode: bytes!("01"),
            initCode: bytes!("02"),
        };
        let expected = keccak256(
            (
                config.contractType,
                config.chainType,
                config.salt,
                keccak256(&config.byteCode),
                keccak256(&config.initCode),
                signer,
            )
                .abi_encode_packed(),
        );
        assert_eq!(config.hash(signer), expected);
    }
}
