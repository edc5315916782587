// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The Merit token.
//!
//! Admins award tokens together with a content pointer into the off-chain audit
//! log. Holders redeem tokens through [`MeritToken::sell`], which burns them and
//! asks the registered [`CurveVault`](merit_core::interfaces::ICurveVault) to pay
//! out a share of its reserve. Every mutating operation except the stop and
//! resume toggles halts while the emergency stop is engaged.

// Only run this as a WASM if the export-abi feature is not set.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

mod ledger;

use crate::ledger::{Approval, InsufficientAllowance, Ledger, LedgerParams, Transfer};
use alloc::{string::String, vec::Vec};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::sol;
use merit_core::{
    access::AdminRoles,
    curve,
    emergency::EmergencyStop,
    errors::{
        ContractDisabled, Forbidden, InsufficientBalance, InvalidArgument, Unauthorized,
    },
    events::{LogAdminAdded, LogAdminRemoved, LogContractDisabled, LogContractEnabled},
    interfaces::ICurveVault,
};
use stylus_sdk::prelude::*;

/// Immutable definitions
pub struct MeritParams;
impl LedgerParams for MeritParams {
    const NAME: &'static str = "Merit";
    const SYMBOL: &'static str = "MRT";
    const DECIMALS: u8 = 18;
}

sol_storage! {
    #[entrypoint]
    pub struct MeritToken {
        Ledger<MeritParams> ledger;
        AdminRoles roles;
        EmergencyStop emergency;
        /// Vault paying out sales; zero until registered
        address funds_contract;
        /// Content pointer of the most recent award
        string latest_ipfs_hash;
    }
}

sol! {
    event LogAwarded(address indexed awardedTo, address indexed minter, uint256 amount, string ipfsHash);
    event LogBulkAwardedSummary(address indexed minter, uint256 bulkCount, uint256 amountEach, string ipfsHash);
    event LogBurned(address indexed burnFrom, uint256 amount);
    event LogSell(address indexed sellingAccount, uint256 sellAmount, uint256 ethReceived);
    event LogFundsContractChanged(address indexed fromAccount, address indexed oldAddress, address indexed newAddress);

    /// No vault has been registered through `setFundsContract`.
    #[derive(Debug, PartialEq, Eq)]
    error FundsContractNotSet();
    /// The vault refused the payout. `reason` is its revert data.
    #[derive(Debug, PartialEq, Eq)]
    error PayoutFailed(bytes reason);
}

/// Represents the ways token methods may fail.
#[derive(SolidityError, Debug, PartialEq, Eq)]
pub enum TokenError {
    Unauthorized(Unauthorized),
    Forbidden(Forbidden),
    ContractDisabled(ContractDisabled),
    InvalidArgument(InvalidArgument),
    InsufficientBalance(InsufficientBalance),
    InsufficientAllowance(InsufficientAllowance),
    FundsContractNotSet(FundsContractNotSet),
    PayoutFailed(PayoutFailed),
}

impl MeritToken {
    /// Guard shared by `award` and `awardBulk`.
    fn check_award(&self, to: Address, amount: U256) -> Result<(), TokenError> {
        if to == Address::ZERO {
            return Err(InvalidArgument::new("recipient is the zero address").into());
        }
        if amount.is_zero() {
            return Err(InvalidArgument::new("amount is zero").into());
        }
        Ok(())
    }

    fn mint_with_record(
        &mut self,
        minter: Address,
        to: Address,
        amount: U256,
        ipfs_hash: &str,
    ) -> Result<(), TokenError> {
        self.ledger.mint(to, amount)?;
        self.vm().log(Transfer {
            from: Address::ZERO,
            to,
            value: amount,
        });
        self.vm().log(LogAwarded {
            awardedTo: to,
            minter,
            amount,
            ipfsHash: ipfs_hash.into(),
        });
        Ok(())
    }

    fn vault(&self) -> Result<Address, TokenError> {
        let vault = self.funds_contract.get();
        if vault == Address::ZERO {
            return Err(FundsContractNotSet {}.into());
        }
        Ok(vault)
    }

    fn move_tokens(&mut self, from: Address, to: Address, value: U256) -> Result<(), TokenError> {
        if to == Address::ZERO {
            return Err(InvalidArgument::new("recipient is the zero address").into());
        }
        self.ledger.move_balance(from, to, value)?;
        self.vm().log(Transfer { from, to, value });
        Ok(())
    }
}

#[public]
impl MeritToken {
    /// The deploying account becomes the permanent owner.
    #[constructor]
    pub fn constructor(&mut self) {
        // Deployment goes through a factory, so the deployer is tx.origin.
        let owner = self.vm().tx_origin();
        self.roles.initialize(owner);
    }

    pub fn name() -> String {
        MeritParams::NAME.into()
    }

    pub fn symbol() -> String {
        MeritParams::SYMBOL.into()
    }

    pub fn decimals() -> u8 {
        MeritParams::DECIMALS
    }

    pub fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    pub fn get_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.ledger.balance_of(owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.ledger.allowance(owner, spender)
    }

    pub fn owner(&self) -> Address {
        self.roles.owner()
    }

    pub fn check_if_admin(&self, account: Address) -> bool {
        self.roles.is_admin(account)
    }

    pub fn contract_enabled(&self) -> bool {
        self.emergency.is_enabled()
    }

    pub fn latest_ipfs_hash(&self) -> String {
        self.latest_ipfs_hash.get_string()
    }

    pub fn get_funds_contract(&self) -> Address {
        self.funds_contract.get()
    }

    /// Mints `amount` to `to` and records `ipfs_hash` as the latest audit entry.
    pub fn award(&mut self, to: Address, amount: U256, ipfs_hash: String) -> Result<(), TokenError> {
        let minter = self.vm().msg_sender();
        self.roles.only_admin(minter)?;
        self.emergency.when_enabled()?;
        self.check_award(to, amount)?;

        self.mint_with_record(minter, to, amount, &ipfs_hash)?;
        self.latest_ipfs_hash.set_str(&ipfs_hash);
        Ok(())
    }

    /// Awards `amount_each` to every recipient. Either every award happens or none.
    pub fn award_bulk(
        &mut self,
        recipients: Vec<Address>,
        amount_each: U256,
        ipfs_hash: String,
    ) -> Result<(), TokenError> {
        let minter = self.vm().msg_sender();
        self.roles.only_admin(minter)?;
        self.emergency.when_enabled()?;
        if recipients.is_empty() {
            return Err(InvalidArgument::new("no recipients").into());
        }
        for &to in &recipients {
            self.check_award(to, amount_each)?;
        }
        let bulk_count = U256::from(recipients.len());
        match amount_each.checked_mul(bulk_count) {
            Some(total) if total <= self.ledger.headroom() => {}
            _ => return Err(InvalidArgument::new("total supply overflow").into()),
        }

        for &to in &recipients {
            self.mint_with_record(minter, to, amount_each, &ipfs_hash)?;
        }
        self.latest_ipfs_hash.set_str(&ipfs_hash);
        self.vm().log(LogBulkAwardedSummary {
            minter,
            bulkCount: bulk_count,
            amountEach: amount_each,
            ipfsHash: ipfs_hash,
        });
        Ok(())
    }

    /// Destroys `amount` of `from`'s tokens without paying anything out.
    pub fn burn(&mut self, from: Address, amount: U256) -> Result<(), TokenError> {
        self.roles.only_admin(self.vm().msg_sender())?;
        self.emergency.when_enabled()?;

        self.ledger.burn(from, amount)?;
        self.vm().log(Transfer {
            from,
            to: Address::ZERO,
            value: amount,
        });
        self.vm().log(LogBurned {
            burnFrom: from,
            amount,
        });
        Ok(())
    }

    /// Redeems `amount` of the caller's tokens for ether from the vault reserve.
    ///
    /// The tokens are burned before the vault is called. If the vault rejects
    /// the payout the burn is undone and the vault's revert data is returned in
    /// [`PayoutFailed`].
    pub fn sell(&mut self, amount: U256) -> Result<U256, TokenError> {
        self.emergency.when_enabled()?;
        if amount.is_zero() {
            return Err(InvalidArgument::new("amount is zero").into());
        }
        let vault = self.vault()?;
        let seller = self.vm().msg_sender();

        let supply_before = self.ledger.total_supply();
        self.ledger.burn(seller, amount)?;

        let context = Call::new_mutating(self);
        let payout = ICurveVault::new(vault).compute_and_pay(
            self.vm(),
            context,
            seller,
            amount,
            supply_before,
        );
        let payout = match payout {
            Ok(payout) => payout,
            Err(err) => {
                self.ledger.mint(seller, amount)?;
                return Err(PayoutFailed {
                    reason: Bytes::from(Vec::<u8>::from(err)),
                }
                .into());
            }
        };

        self.vm().log(Transfer {
            from: seller,
            to: Address::ZERO,
            value: amount,
        });
        self.vm().log(LogSell {
            sellingAccount: seller,
            sellAmount: amount,
            ethReceived: payout,
        });
        Ok(payout)
    }

    /// Quotes what selling `amount` would pay at the current reserve and supply.
    pub fn calculate_sell_return(&self, amount: U256) -> Result<U256, TokenError> {
        let vault = self.vault()?;
        if amount.is_zero() {
            return Err(InvalidArgument::new("amount is zero").into());
        }
        let reserve = self.vm().balance(vault);
        curve::sell_return(amount, self.ledger.total_supply(), reserve)
            .ok_or_else(|| InvalidArgument::new("amount exceeds supply").into())
    }

    pub fn transfer(&mut self, to: Address, value: U256) -> Result<bool, TokenError> {
        self.emergency.when_enabled()?;
        self.move_tokens(self.vm().msg_sender(), to, value)?;
        Ok(true)
    }

    /// Moves `value` of `from`'s tokens to `to` on behalf of the caller.
    pub fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, TokenError> {
        self.emergency.when_enabled()?;
        let spender = self.vm().msg_sender();
        let allowance = self.ledger.check_allowance(from, spender, value)?;
        self.move_tokens(from, to, value)?;
        self.ledger.approve(from, spender, allowance - value);
        Ok(true)
    }

    pub fn approve(&mut self, spender: Address, value: U256) -> Result<bool, TokenError> {
        self.emergency.when_enabled()?;
        let owner = self.vm().msg_sender();
        self.ledger.approve(owner, spender, value);
        self.vm().log(Approval {
            owner,
            spender,
            value,
        });
        Ok(true)
    }

    pub fn add_admin(&mut self, account: Address) -> Result<(), TokenError> {
        self.roles.only_admin(self.vm().msg_sender())?;
        self.emergency.when_enabled()?;
        if self.roles.grant(account)? {
            self.vm().log(LogAdminAdded { account });
        }
        Ok(())
    }

    pub fn remove_admin(&mut self, account: Address) -> Result<(), TokenError> {
        self.roles.only_admin(self.vm().msg_sender())?;
        self.emergency.when_enabled()?;
        if account == Address::ZERO {
            return Err(InvalidArgument::new("admin is the zero address").into());
        }
        if self.roles.revoke(account)? {
            self.vm().log(LogAdminRemoved { account });
        }
        Ok(())
    }

    pub fn emergency_stop(&mut self) -> Result<(), TokenError> {
        let account = self.vm().msg_sender();
        self.roles.only_admin(account)?;
        if self.emergency.stop() {
            self.vm().log(LogContractDisabled { account });
        }
        Ok(())
    }

    pub fn resume_contract(&mut self) -> Result<(), TokenError> {
        let account = self.vm().msg_sender();
        self.roles.only_admin(account)?;
        if self.emergency.resume() {
            self.vm().log(LogContractEnabled { account });
        }
        Ok(())
    }

    /// Registers the vault that pays out sales and receives forwarded ether.
    pub fn set_funds_contract(&mut self, vault: Address) -> Result<(), TokenError> {
        let account = self.vm().msg_sender();
        self.roles.only_owner(account)?;
        self.emergency.when_enabled()?;
        if vault == Address::ZERO {
            return Err(InvalidArgument::new("vault is the zero address").into());
        }

        let old_address = self.funds_contract.get();
        self.funds_contract.set(vault);
        self.vm().log(LogFundsContractChanged {
            fromAccount: account,
            oldAddress: old_address,
            newAddress: vault,
        });
        Ok(())
    }

    /// Plain ether sent to the token is forwarded to the vault reserve.
    #[receive]
    #[payable]
    pub fn receive(&mut self) -> Result<(), Vec<u8>> {
        self.emergency.when_enabled().map_err(TokenError::from)?;
        let vault = self.vault()?;
        let value = self.vm().msg_value();
        let context = Call::new_payable(self, value);
        ICurveVault::new(vault).fund(self.vm(), context)?;
        Ok(())
    }
}
