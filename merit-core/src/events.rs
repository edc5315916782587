// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Events emitted identically by both contracts.

use alloy_sol_types::sol;

sol! {
    event LogAdminAdded(address indexed account);
    event LogAdminRemoved(address indexed account);
    /// `account` is the admin that toggled the emergency stop.
    event LogContractDisabled(address indexed account);
    event LogContractEnabled(address indexed account);
}
