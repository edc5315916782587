// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Admin role set with a permanent owner.
//!
//! The owner recorded by [`AdminRoles::initialize`] is always an admin and can
//! never be removed. Any admin may grant or revoke the role for other accounts.
//! Granting an existing admin or revoking a non-admin changes nothing, which the
//! `bool` results report so the embedding contract only logs real transitions.

use alloy_primitives::Address;
use stylus_sdk::prelude::*;

use crate::errors::{Forbidden, InvalidArgument, Unauthorized};

sol_storage! {
    /// Privileged-call capability shared by the token and the vault.
    pub struct AdminRoles {
        /// Permanent member of the admin set
        address owner;
        /// Accounts granted the admin role
        mapping(address => bool) admins;
    }
}

impl AdminRoles {
    /// Records `owner` as the permanent admin. Only meant for constructors.
    pub fn initialize(&mut self, owner: Address) {
        self.owner.set(owner);
        self.admins.setter(owner).set(true);
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    pub fn is_admin(&self, account: Address) -> bool {
        account == self.owner.get() || self.admins.get(account)
    }

    /// Fails unless `caller` holds the admin role.
    pub fn only_admin(&self, caller: Address) -> Result<(), Unauthorized> {
        if !self.is_admin(caller) {
            return Err(Unauthorized { account: caller });
        }
        Ok(())
    }

    /// Fails unless `caller` is the permanent owner.
    pub fn only_owner(&self, caller: Address) -> Result<(), Unauthorized> {
        if caller != self.owner.get() {
            return Err(Unauthorized { account: caller });
        }
        Ok(())
    }

    /// Grants the admin role. Returns whether the set changed.
    pub fn grant(&mut self, account: Address) -> Result<bool, InvalidArgument> {
        if account == Address::ZERO {
            return Err(InvalidArgument::new("admin is the zero address"));
        }
        if self.is_admin(account) {
            return Ok(false);
        }
        self.admins.setter(account).set(true);
        Ok(true)
    }

    /// Revokes the admin role. Returns whether the set changed.
    pub fn revoke(&mut self, account: Address) -> Result<bool, Forbidden> {
        if account == self.owner.get() {
            return Err(Forbidden {});
        }
        if !self.admins.get(account) {
            return Ok(false);
        }
        self.admins.setter(account).set(false);
        Ok(true)
    }
}
