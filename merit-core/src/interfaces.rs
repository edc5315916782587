// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Typed views of each contract as seen by the other.

use stylus_sdk::prelude::*;

sol_interface! {
    // Vault methods the token relies on.
    interface ICurveVault {
        function fund() external payable;
        function computeAndPay(address seller, uint256 sell_amount, uint256 total_supply) external returns (uint256);
    }

    // Token methods the vault relies on.
    interface IMeritToken {
        function contractEnabled() external view returns (bool);
    }
}
