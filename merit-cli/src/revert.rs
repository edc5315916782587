// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Human-readable rendering of contract revert data.
//!
//! Both contracts share most error selectors, so token errors are tried first
//! and the vault's own errors second. A `PayoutFailed` from the token carries
//! the vault's revert data, which is decoded in turn.

use alloy::{primitives::utils::format_ether, sol_types::SolInterface};

use crate::contracts::{ICurveVault::ICurveVaultErrors, IMeritToken::IMeritTokenErrors};

/// Describes `data` if it is a known contract error.
pub fn describe(data: &[u8]) -> Option<String> {
    if let Ok(err) = IMeritTokenErrors::abi_decode(data) {
        return Some(describe_token_error(err));
    }
    if let Ok(err) = ICurveVaultErrors::abi_decode(data) {
        return Some(describe_vault_error(err));
    }
    None
}

/// Like [`describe`], falling back to the raw hex.
pub fn describe_or_hex(data: &[u8]) -> String {
    describe(data).unwrap_or_else(|| format!("0x{}", hex::encode(data)))
}

fn describe_token_error(err: IMeritTokenErrors) -> String {
    match err {
        IMeritTokenErrors::Unauthorized(e) => {
            format!("unauthorized: {} lacks the required role", e.account)
        }
        IMeritTokenErrors::Forbidden(_) => "forbidden".into(),
        IMeritTokenErrors::ContractDisabled(_) => "contract disabled by emergency stop".into(),
        IMeritTokenErrors::InvalidArgument(e) => format!("invalid argument: {}", e.reason),
        IMeritTokenErrors::InsufficientBalance(e) => format!(
            "insufficient balance: {} holds {} MRT, {} MRT needed",
            e.from,
            format_ether(e.have),
            format_ether(e.want)
        ),
        IMeritTokenErrors::InsufficientAllowance(e) => format!(
            "insufficient allowance: {} may spend {} MRT of {}, {} MRT needed",
            e.spender,
            format_ether(e.have),
            e.owner,
            format_ether(e.want)
        ),
        IMeritTokenErrors::FundsContractNotSet(_) => "no funds contract registered".into(),
        IMeritTokenErrors::PayoutFailed(e) => {
            format!("payout failed: {}", describe_or_hex(&e.reason))
        }
    }
}

fn describe_vault_error(err: ICurveVaultErrors) -> String {
    match err {
        ICurveVaultErrors::Unauthorized(e) => {
            format!("unauthorized: {} lacks the required role", e.account)
        }
        ICurveVaultErrors::Forbidden(_) => "forbidden".into(),
        ICurveVaultErrors::ContractDisabled(_) => "contract disabled by emergency stop".into(),
        ICurveVaultErrors::InvalidArgument(e) => format!("invalid argument: {}", e.reason),
        ICurveVaultErrors::InsufficientReserve(e) => format!(
            "insufficient reserve: vault holds {} ETH, {} ETH needed",
            format_ether(e.have),
            format_ether(e.want)
        ),
        ICurveVaultErrors::TransferFailed(e) => format!(
            "transfer of {} ETH to {} failed",
            format_ether(e.amount),
            e.recipient
        ),
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{Address, U256},
        sol_types::SolError,
    };

    use super::*;
    use crate::contracts::{ICurveVault, IMeritToken};

    #[test]
    fn token_errors() {
        let data = IMeritToken::InvalidArgument {
            reason: "amount is zero".into(),
        }
        .abi_encode();
        assert_eq!(
            describe(&data).as_deref(),
            Some("invalid argument: amount is zero")
        );

        let data = IMeritToken::ContractDisabled {}.abi_encode();
        assert_eq!(
            describe(&data).as_deref(),
            Some("contract disabled by emergency stop")
        );
    }

    #[test]
    fn vault_only_errors() {
        let recipient = Address::repeat_byte(0xB0);
        let data = ICurveVault::TransferFailed {
            recipient,
            amount: U256::from(500_000_000_000_000_000u64),
        }
        .abi_encode();
        assert_eq!(
            describe(&data),
            Some(format!("transfer of 0.500000000000000000 ETH to {recipient} failed"))
        );
    }

    #[test]
    fn nested_payout_failure() {
        let inner = ICurveVault::InsufficientReserve {
            have: U256::ZERO,
            want: U256::from(1_000_000_000_000_000_000u64),
        }
        .abi_encode();
        let data = IMeritToken::PayoutFailed {
            reason: inner.into(),
        }
        .abi_encode();
        assert_eq!(
            describe(&data).as_deref(),
            Some("payout failed: insufficient reserve: vault holds 0.000000000000000000 ETH, 1.000000000000000000 ETH needed")
        );
    }

    #[test]
    fn unknown_data_falls_back_to_hex() {
        assert_eq!(describe(&[0xde, 0xad]), None);
        assert_eq!(describe_or_hex(&[0xde, 0xad]), "0xdead");

        let data = IMeritToken::PayoutFailed {
            reason: vec![0xbe, 0xef].into(),
        }
        .abi_encode();
        assert_eq!(describe(&data).as_deref(), Some("payout failed: 0xbeef"));
    }
}
