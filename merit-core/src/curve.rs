// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Bonding-curve payout for token sales.
//!
//! A seller redeeming `sell_amount` out of `total_supply` receives the same
//! proportion of half the reserve:
//!
//! ```text
//! payout = floor(sell_amount * reserve * 1 / (total_supply * 2))
//! ```
//!
//! Every numerator term is multiplied in 512-bit precision before the single
//! division, so the only rounding is the final floor.

use alloy_primitives::{ruint::UintTryFrom, Uint, U256};

type U512 = Uint<512, 8>;

/// Share of the reserve a full redemption of the supply can claim.
pub const RESERVE_SHARE_NUMERATOR: u64 = 1;
pub const RESERVE_SHARE_DENOMINATOR: u64 = 2;

/// Ether paid out for redeeming `sell_amount` tokens.
///
/// Returns `None` when the supply is zero or the amount exceeds the supply.
pub fn sell_return(sell_amount: U256, total_supply: U256, reserve: U256) -> Option<U256> {
    if total_supply.is_zero() || sell_amount > total_supply {
        return None;
    }
    let numerator = U512::from(sell_amount)
        * U512::from(reserve)
        * U512::from(RESERVE_SHARE_NUMERATOR);
    let denominator = U512::from(total_supply) * U512::from(RESERVE_SHARE_DENOMINATOR);
    U256::uint_try_from(numerator / denominator).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETHER: u64 = 1_000_000_000_000_000_000;

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::from(ETHER)
    }

    #[test]
    fn one_tenth_of_supply_gets_a_tenth_of_half_the_reserve() {
        let payout = sell_return(ether(1), ether(10), ether(10)).unwrap();
        assert_eq!(payout, U256::from(ETHER / 2));
    }

    #[test]
    fn whole_supply_is_capped_at_half_the_reserve() {
        let reserve = ether(7) + U256::from(1);
        let payout = sell_return(ether(3), ether(3), reserve).unwrap();
        assert_eq!(payout, reserve / U256::from(2));
    }

    #[test]
    fn rounds_down() {
        // 1 * 3 / (2 * 2) = 0.75
        assert_eq!(
            sell_return(U256::from(1), U256::from(2), U256::from(3)),
            Some(U256::ZERO)
        );
        // 3 * 7 / (4 * 2) = 2.625
        assert_eq!(
            sell_return(U256::from(3), U256::from(4), U256::from(7)),
            Some(U256::from(2))
        );
    }

    #[test]
    fn multiplies_before_dividing() {
        // Dividing first would compute 1/3 of supply as zero.
        let payout = sell_return(U256::from(1), U256::from(3), U256::from(600)).unwrap();
        assert_eq!(payout, U256::from(100));
    }

    #[test]
    fn empty_reserve_pays_nothing() {
        assert_eq!(sell_return(ether(1), ether(2), U256::ZERO), Some(U256::ZERO));
    }

    #[test]
    fn rejects_zero_supply_and_oversized_sales() {
        assert_eq!(sell_return(U256::ZERO, U256::ZERO, ether(1)), None);
        assert_eq!(sell_return(ether(2), ether(1), ether(1)), None);
    }

    #[test]
    fn full_width_values_do_not_overflow() {
        let payout = sell_return(U256::MAX, U256::MAX, U256::MAX).unwrap();
        assert_eq!(payout, U256::MAX / U256::from(2));
    }
}
