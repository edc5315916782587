// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Emergency stop shared by the token and the vault.
//!
//! Storage holds a single `stopped` flag so that a freshly deployed contract,
//! whose storage is zeroed, starts [`ContractState::Enabled`].

use stylus_sdk::prelude::*;

use crate::errors::ContractDisabled;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractState {
    Enabled,
    Disabled,
}

sol_storage! {
    pub struct EmergencyStop {
        bool stopped;
    }
}

impl EmergencyStop {
    pub fn state(&self) -> ContractState {
        if self.stopped.get() {
            ContractState::Disabled
        } else {
            ContractState::Enabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state() == ContractState::Enabled
    }

    /// Guard for every mutating operation other than the toggles themselves.
    pub fn when_enabled(&self) -> Result<(), ContractDisabled> {
        match self.state() {
            ContractState::Enabled => Ok(()),
            ContractState::Disabled => Err(ContractDisabled {}),
        }
    }

    /// `Enabled -> Disabled`. Returns whether the state changed.
    pub fn stop(&mut self) -> bool {
        if self.state() == ContractState::Disabled {
            return false;
        }
        self.stopped.set(true);
        true
    }

    /// `Disabled -> Enabled`. Returns whether the state changed.
    pub fn resume(&mut self) -> bool {
        if self.state() == ContractState::Enabled {
            return false;
        }
        self.stopped.set(false);
        true
    }
}
