// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Solidity error types shared by the Merit contracts.
//!
//! Each contract collects the subset it can raise into its own
//! `#[derive(SolidityError)]` enum, so callers decode the same selectors from
//! either contract.

use alloc::string::String;
use alloy_sol_types::sol;

sol! {
    /// The caller lacks the role the operation requires.
    #[derive(Debug, PartialEq, Eq)]
    error Unauthorized(address account);
    /// The operation is structurally disallowed regardless of role.
    #[derive(Debug, PartialEq, Eq)]
    error Forbidden();
    /// The contract is in emergency stop.
    #[derive(Debug, PartialEq, Eq)]
    error ContractDisabled();
    /// Zero amount, zero address, empty list or an amount the ledger cannot hold.
    #[derive(Debug, PartialEq, Eq)]
    error InvalidArgument(string reason);
    /// A burn, sell or transfer exceeds the holder's balance.
    #[derive(Debug, PartialEq, Eq)]
    error InsufficientBalance(address from, uint256 have, uint256 want);
    /// A payout would exceed the vault reserve.
    #[derive(Debug, PartialEq, Eq)]
    error InsufficientReserve(uint256 have, uint256 want);
}

impl InvalidArgument {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: String::from(reason),
        }
    }
}
