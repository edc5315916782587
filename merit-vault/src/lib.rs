// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Reserve backing the Merit token.
//!
//! Anyone may fund the vault while it is enabled. Ether only leaves through
//! [`CurveVault::compute_and_pay`], which accepts calls from the registered
//! token contract alone and pays the seller along the bonding curve in
//! [`merit_core::curve`].

// Only run this as a WASM if the export-abi feature is not set.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::vec::Vec;
use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use merit_core::{
    access::AdminRoles,
    curve,
    emergency::EmergencyStop,
    errors::{
        ContractDisabled, Forbidden, InsufficientReserve, InvalidArgument, Unauthorized,
    },
    events::{LogAdminAdded, LogAdminRemoved, LogContractDisabled, LogContractEnabled},
    interfaces::IMeritToken,
};
use stylus_sdk::{call::call, prelude::*};

sol_storage! {
    #[entrypoint]
    pub struct CurveVault {
        AdminRoles roles;
        EmergencyStop emergency;
        /// The only account allowed to request payouts
        address token_contract;
    }
}

sol! {
    event LogFundingReceived(address indexed account, uint256 amount);
    event LogSellPayout(address indexed seller, uint256 sellAmount, uint256 ethPaid);
    event LogTokenContractChanged(address indexed fromAccount, address indexed oldAddress, address indexed newAddress);

    /// The seller did not accept the payout.
    #[derive(Debug, PartialEq, Eq)]
    error TransferFailed(address recipient, uint256 amount);
}

/// Represents the ways vault methods may fail.
#[derive(SolidityError, Debug, PartialEq, Eq)]
pub enum VaultError {
    Unauthorized(Unauthorized),
    Forbidden(Forbidden),
    ContractDisabled(ContractDisabled),
    InvalidArgument(InvalidArgument),
    InsufficientReserve(InsufficientReserve),
    TransferFailed(TransferFailed),
}

impl CurveVault {
    fn record_funding(&mut self) {
        self.vm().log(LogFundingReceived {
            account: self.vm().msg_sender(),
            amount: self.vm().msg_value(),
        });
    }

    /// Whether the token contract reports itself enabled. A pointer that
    /// cannot answer does not count as disabled.
    fn token_enabled(&self) -> bool {
        let token = self.token_contract.get();
        if token == Address::ZERO {
            return true;
        }
        IMeritToken::new(token)
            .contract_enabled(self.vm(), Call::new())
            .unwrap_or(true)
    }
}

#[public]
impl CurveVault {
    /// Binds the vault to `token_contract`. The deploying account becomes the
    /// permanent owner.
    #[constructor]
    pub fn constructor(&mut self, token_contract: Address) {
        let owner = self.vm().tx_origin();
        self.roles.initialize(owner);
        self.token_contract.set(token_contract);
    }

    #[payable]
    pub fn fund(&mut self) -> Result<(), VaultError> {
        self.emergency.when_enabled()?;
        self.record_funding();
        Ok(())
    }

    #[receive]
    #[payable]
    pub fn receive(&mut self) -> Result<(), Vec<u8>> {
        self.fund()?;
        Ok(())
    }

    /// Pays `seller` for redeeming `sell_amount` out of `total_supply` tokens
    /// and returns the amount paid.
    pub fn compute_and_pay(
        &mut self,
        seller: Address,
        sell_amount: U256,
        total_supply: U256,
    ) -> Result<U256, VaultError> {
        let caller = self.vm().msg_sender();
        if caller != self.token_contract.get() {
            return Err(Unauthorized { account: caller }.into());
        }
        self.emergency.when_enabled()?;
        if seller == Address::ZERO {
            return Err(InvalidArgument::new("seller is the zero address").into());
        }
        if sell_amount.is_zero() {
            return Err(InvalidArgument::new("sell amount is zero").into());
        }
        if total_supply.is_zero() {
            return Err(InvalidArgument::new("total supply is zero").into());
        }

        let reserve = self.reserve();
        let payout = curve::sell_return(sell_amount, total_supply, reserve)
            .ok_or_else(|| InvalidArgument::new("sell amount exceeds supply"))?;
        if payout > reserve {
            return Err(InsufficientReserve {
                have: reserve,
                want: payout,
            }
            .into());
        }

        if !payout.is_zero() {
            let context = Call::new_payable(self, payout);
            call(self.vm(), context, seller, &[]).map_err(|_| TransferFailed {
                recipient: seller,
                amount: payout,
            })?;
        }

        self.vm().log(LogSellPayout {
            seller,
            sellAmount: sell_amount,
            ethPaid: payout,
        });
        Ok(payout)
    }

    /// Points the vault at a new token contract.
    pub fn set_token_contract(&mut self, token_contract: Address) -> Result<(), VaultError> {
        let account = self.vm().msg_sender();
        self.roles.only_owner(account)?;
        self.emergency.when_enabled()?;
        if !self.token_enabled() {
            return Err(ContractDisabled {}.into());
        }
        if token_contract == Address::ZERO {
            return Err(InvalidArgument::new("token is the zero address").into());
        }

        let old_address = self.token_contract.get();
        self.token_contract.set(token_contract);
        self.vm().log(LogTokenContractChanged {
            fromAccount: account,
            oldAddress: old_address,
            newAddress: token_contract,
        });
        Ok(())
    }

    /// Ether never leaves except through a sale.
    pub fn send_eth(&mut self, _amount: U256, _to: Address) -> Result<(), VaultError> {
        Err(Forbidden {}.into())
    }

    pub fn emergency_stop(&mut self) -> Result<(), VaultError> {
        let account = self.vm().msg_sender();
        self.roles.only_admin(account)?;
        if self.emergency.stop() {
            self.vm().log(LogContractDisabled { account });
        }
        Ok(())
    }

    pub fn resume_contract(&mut self) -> Result<(), VaultError> {
        let account = self.vm().msg_sender();
        self.roles.only_admin(account)?;
        if self.emergency.resume() {
            self.vm().log(LogContractEnabled { account });
        }
        Ok(())
    }

    pub fn add_admin(&mut self, account: Address) -> Result<(), VaultError> {
        self.roles.only_admin(self.vm().msg_sender())?;
        self.emergency.when_enabled()?;
        if self.roles.grant(account)? {
            self.vm().log(LogAdminAdded { account });
        }
        Ok(())
    }

    pub fn remove_admin(&mut self, account: Address) -> Result<(), VaultError> {
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

    pub fn check_if_admin(&self, account: Address) -> bool {
        self.roles.is_admin(account)
    }

    pub fn owner(&self) -> Address {
        self.roles.owner()
    }

    pub fn get_token_address(&self) -> Address {
        self.token_contract.get()
    }

    /// Ether held by the vault.
    pub fn reserve(&self) -> U256 {
        self.vm().balance(self.vm().contract_address())
    }

    pub fn contract_enabled(&self) -> bool {
        self.emergency.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::{SolCall, SolError, SolEvent};
    use stylus_sdk::testing::*;

    sol! {
        function contractEnabled() external view returns (bool);
    }

    const ETHER: u64 = 1_000_000_000_000_000_000;

    fn owner() -> Address {
        Address::new([0x01; 20])
    }

    fn bob() -> Address {
        Address::new([0xB0; 20])
    }

    fn token() -> Address {
        Address::new([0x70; 20])
    }

    fn this() -> Address {
        Address::new([0xF0; 20])
    }

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::from(ETHER)
    }

    fn deploy() -> (TestVM, CurveVault) {
        let vm = TestVM::new();
        vm.set_tx_origin(owner());
        vm.set_sender(owner());
        vm.set_contract_address(this());
        let mut vault = CurveVault::from(&vm);
        vault.constructor(token());
        (vm, vault)
    }

    fn count<E: SolEvent>(vm: &TestVM) -> usize {
        vm.get_emitted_logs()
            .iter()
            .filter(|(topics, _)| topics.first() == Some(&E::SIGNATURE_HASH))
            .count()
    }

    fn mock_token_enabled(vm: &TestVM, enabled: bool) {
        let mut answer = [0u8; 32];
        answer[31] = enabled as u8;
        vm.mock_static_call(token(), contractEnabledCall {}.abi_encode(), Ok(answer.to_vec()));
    }

    #[test]
    fn constructor_binds_token_and_owner() {
        let (_vm, vault) = deploy();
        assert_eq!(vault.get_token_address(), token());
        assert_eq!(vault.owner(), owner());
        assert!(vault.check_if_admin(owner()));
        assert!(vault.contract_enabled());
    }

    #[test]
    fn funding_is_logged() {
        let (vm, mut vault) = deploy();
        vm.set_sender(bob());
        vm.set_value(ether(2));
        assert_eq!(vault.fund(), Ok(()));
        assert_eq!(vault.receive(), Ok(()));

        let logs = vm.get_emitted_logs();
        assert_eq!(count::<LogFundingReceived>(&vm), 2);
        let (topics, data) = &logs[0];
        let event = LogFundingReceived::decode_raw_log(topics.iter().copied(), data).unwrap();
        assert_eq!(event.account, bob());
        assert_eq!(event.amount, ether(2));
    }

    #[test]
    fn pays_half_the_reserve_proportionally() {
        let (vm, mut vault) = deploy();
        vm.set_balance(this(), ether(10));
        assert_eq!(vault.reserve(), ether(10));

        vm.set_sender(token());
        let half_ether = U256::from(ETHER / 2);
        assert_eq!(
            vault.compute_and_pay(bob(), ether(1), ether(10)),
            Ok(half_ether)
        );

        let logs = vm.get_emitted_logs();
        let (topics, data) = logs.last().unwrap();
        let event = LogSellPayout::decode_raw_log(topics.iter().copied(), data).unwrap();
        assert_eq!(event.seller, bob());
        assert_eq!(event.sellAmount, ether(1));
        assert_eq!(event.ethPaid, half_ether);
    }

    #[test]
    fn empty_reserve_pays_nothing() {
        let (vm, mut vault) = deploy();
        vm.set_sender(token());
        assert_eq!(
            vault.compute_and_pay(bob(), ether(1), ether(10)),
            Ok(U256::ZERO)
        );
        assert_eq!(count::<LogSellPayout>(&vm), 1);
    }

    #[test]
    fn only_the_token_requests_payouts() {
        let (vm, mut vault) = deploy();
        vm.set_balance(this(), ether(10));

        for caller in [owner(), bob()] {
            vm.set_sender(caller);
            assert_eq!(
                vault.compute_and_pay(bob(), ether(1), ether(10)),
                Err(VaultError::Unauthorized(Unauthorized { account: caller }))
            );
        }
        assert_eq!(count::<LogSellPayout>(&vm), 0);
    }

    #[test]
    fn payout_arguments_are_validated() {
        let (vm, mut vault) = deploy();
        vm.set_balance(this(), ether(10));
        vm.set_sender(token());

        for (seller, amount, supply) in [
            (Address::ZERO, ether(1), ether(10)),
            (bob(), U256::ZERO, ether(10)),
            (bob(), ether(1), U256::ZERO),
            (bob(), ether(11), ether(10)),
        ] {
            assert!(matches!(
                vault.compute_and_pay(seller, amount, supply),
                Err(VaultError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn stopped_vault_refuses_payouts() {
        let (vm, mut vault) = deploy();
        vm.set_balance(this(), ether(10));
        assert_eq!(vault.emergency_stop(), Ok(()));

        vm.set_sender(token());
        assert_eq!(
            vault.compute_and_pay(bob(), ether(1), ether(10)),
            Err(VaultError::ContractDisabled(ContractDisabled {}))
        );

        vm.set_sender(owner());
        assert_eq!(vault.resume_contract(), Ok(()));
        vm.set_sender(token());
        assert!(vault.compute_and_pay(bob(), ether(1), ether(10)).is_ok());
    }

    #[test]
    fn rejected_transfer_fails_the_payout() {
        let (vm, mut vault) = deploy();
        vm.set_balance(this(), ether(10));
        let half_ether = U256::from(ETHER / 2);
        vm.mock_call(bob(), vec![], half_ether, Err(vec![]));

        vm.set_sender(token());
        assert_eq!(
            vault.compute_and_pay(bob(), ether(1), ether(10)),
            Err(VaultError::TransferFailed(TransferFailed {
                recipient: bob(),
                amount: half_ether,
            }))
        );
        assert_eq!(count::<LogSellPayout>(&vm), 0);
    }

    #[test]
    fn send_eth_is_always_forbidden() {
        let (vm, mut vault) = deploy();
        vm.set_balance(this(), ether(10));
        for caller in [owner(), token(), bob()] {
            vm.set_sender(caller);
            assert_eq!(
                vault.send_eth(ether(1), caller),
                Err(VaultError::Forbidden(Forbidden {}))
            );
        }
    }

    #[test]
    fn owner_repoints_the_token() {
        let (vm, mut vault) = deploy();
        let new_token = Address::new([0x71; 20]);

        vm.set_sender(bob());
        assert!(matches!(
            vault.set_token_contract(new_token),
            Err(VaultError::Unauthorized(_))
        ));

        vm.set_sender(owner());
        assert!(matches!(
            vault.set_token_contract(Address::ZERO),
            Err(VaultError::InvalidArgument(_))
        ));
        assert_eq!(vault.set_token_contract(new_token), Ok(()));
        assert_eq!(vault.get_token_address(), new_token);

        let logs = vm.get_emitted_logs();
        let (topics, data) = logs.last().unwrap();
        let event = LogTokenContractChanged::decode_raw_log(topics.iter().copied(), data).unwrap();
        assert_eq!(event.fromAccount, owner());
        assert_eq!(event.oldAddress, token());
        assert_eq!(event.newAddress, new_token);
    }

    #[test]
    fn repointing_follows_both_stops() {
        let (vm, mut vault) = deploy();
        let new_token = Address::new([0x71; 20]);

        assert_eq!(vault.emergency_stop(), Ok(()));
        assert_eq!(
            vault.set_token_contract(new_token),
            Err(VaultError::ContractDisabled(ContractDisabled {}))
        );
        assert_eq!(vault.resume_contract(), Ok(()));

        mock_token_enabled(&vm, false);
        assert_eq!(
            vault.set_token_contract(new_token),
            Err(VaultError::ContractDisabled(ContractDisabled {}))
        );
        assert_eq!(vault.get_token_address(), token());

        mock_token_enabled(&vm, true);
        assert_eq!(vault.set_token_contract(new_token), Ok(()));
    }

    #[test]
    fn admin_roles_match_the_token() {
        let (vm, mut vault) = deploy();

        vm.set_sender(bob());
        assert!(matches!(vault.add_admin(bob()), Err(VaultError::Unauthorized(_))));
        assert!(matches!(vault.emergency_stop(), Err(VaultError::Unauthorized(_))));

        vm.set_sender(owner());
        assert_eq!(vault.add_admin(bob()), Ok(()));
        assert_eq!(vault.add_admin(bob()), Ok(()));
        assert_eq!(count::<LogAdminAdded>(&vm), 1);

        vm.set_sender(bob());
        assert_eq!(
            vault.remove_admin(owner()),
            Err(VaultError::Forbidden(Forbidden {}))
        );
        assert_eq!(vault.emergency_stop(), Ok(()));
        assert_eq!(count::<LogContractDisabled>(&vm), 1);

        vm.set_sender(owner());
        assert_eq!(vault.resume_contract(), Ok(()));
        assert_eq!(vault.remove_admin(bob()), Ok(()));
        assert!(!vault.check_if_admin(bob()));
        assert_eq!(count::<LogAdminRemoved>(&vm), 1);
    }

    #[test]
    fn stopped_vault_refuses_funding_and_role_changes() {
        let (vm, mut vault) = deploy();
        assert_eq!(vault.add_admin(bob()), Ok(()));
        assert_eq!(vault.emergency_stop(), Ok(()));

        assert_eq!(
            vault.add_admin(token()),
            Err(VaultError::ContractDisabled(ContractDisabled {}))
        );
        assert_eq!(
            vault.remove_admin(bob()),
            Err(VaultError::ContractDisabled(ContractDisabled {}))
        );
        assert!(vault.check_if_admin(bob()));
        assert!(!vault.check_if_admin(token()));

        vm.set_sender(bob());
        vm.set_value(ether(1));
        assert_eq!(
            vault.fund(),
            Err(VaultError::ContractDisabled(ContractDisabled {}))
        );
        assert_eq!(vault.receive(), Err(ContractDisabled {}.abi_encode()));
        assert_eq!(count::<LogFundingReceived>(&vm), 0);

        assert_eq!(vault.resume_contract(), Ok(()));
        assert_eq!(vault.fund(), Ok(()));
        assert_eq!(count::<LogFundingReceived>(&vm), 1);
    }
}
