// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Balance and allowance bookkeeping for the Merit token.
//!
//! [`Ledger`] only moves numbers around. Role checks, the emergency stop and
//! event emission are the embedding contract's job, which keeps every method
//! here a pure check-then-write step that leaves storage untouched on error.
//!
//! The supply is the only counter that can overflow: every balance is bounded
//! by it, so [`Ledger::mint`] checks the supply and nothing else.

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use core::marker::PhantomData;
use merit_core::errors::{InsufficientBalance, InvalidArgument};
use stylus_sdk::prelude::*;

pub trait LedgerParams {
    /// Immutable token name
    const NAME: &'static str;

    /// Immutable token symbol
    const SYMBOL: &'static str;

    /// Immutable token decimals
    const DECIMALS: u8;
}

sol_storage! {
    pub struct Ledger<T> {
        /// Maps holders to balances
        mapping(address => uint256) balances;
        /// Maps holders to each spender's allowance
        mapping(address => mapping(address => uint256)) allowances;
        /// Sum of all balances
        uint256 total_supply;
        /// Used to allow [`LedgerParams`]
        PhantomData<T> phantom;
    }
}

sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);
    event Approval(address indexed owner, address indexed spender, uint256 value);

    #[derive(Debug, PartialEq, Eq)]
    error InsufficientAllowance(address owner, address spender, uint256 have, uint256 want);
}

impl<T: LedgerParams> Ledger<T> {
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    pub fn balance_of(&self, holder: Address) -> U256 {
        self.balances.get(holder)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.getter(owner).get(spender)
    }

    /// Largest amount that can still be minted in total.
    pub fn headroom(&self) -> U256 {
        U256::MAX - self.total_supply.get()
    }

    /// Creates `value` tokens for `to`.
    pub fn mint(&mut self, to: Address, value: U256) -> Result<(), InvalidArgument> {
        let Some(supply) = self.total_supply.get().checked_add(value) else {
            return Err(InvalidArgument::new("total supply overflow"));
        };
        self.total_supply.set(supply);

        let mut balance = self.balances.setter(to);
        let new_balance = balance.get() + value;
        balance.set(new_balance);
        Ok(())
    }

    /// Destroys `value` of `from`'s tokens.
    pub fn burn(&mut self, from: Address, value: U256) -> Result<(), InsufficientBalance> {
        let mut balance = self.balances.setter(from);
        let old_balance = balance.get();
        if old_balance < value {
            return Err(InsufficientBalance {
                from,
                have: old_balance,
                want: value,
            });
        }
        balance.set(old_balance - value);

        self.total_supply.set(self.total_supply.get() - value);
        Ok(())
    }

    /// Moves `value` tokens from `from` to `to`. The supply is unchanged.
    pub fn move_balance(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), InsufficientBalance> {
        let mut sender_balance = self.balances.setter(from);
        let old_sender_balance = sender_balance.get();
        if old_sender_balance < value {
            return Err(InsufficientBalance {
                from,
                have: old_sender_balance,
                want: value,
            });
        }
        sender_balance.set(old_sender_balance - value);

        let mut to_balance = self.balances.setter(to);
        let new_to_balance = to_balance.get() + value;
        to_balance.set(new_to_balance);
        Ok(())
    }

    /// Sets `spender`'s allowance over `owner`'s tokens.
    pub fn approve(&mut self, owner: Address, spender: Address, value: U256) {
        self.allowances.setter(owner).insert(spender, value);
    }

    /// Fails unless `spender` may move `value` of `owner`'s tokens. Returns the
    /// current allowance.
    pub fn check_allowance(
        &self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<U256, InsufficientAllowance> {
        let allowance = self.allowance(owner, spender);
        if allowance < value {
            return Err(InsufficientAllowance {
                owner,
                spender,
                have: allowance,
                want: value,
            });
        }
        Ok(allowance)
    }
}
