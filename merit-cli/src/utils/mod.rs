// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use alloy::{network::ReceiptResponse, primitives::TxHash};
use eyre::bail;
use serde::Serialize;

pub use style::{BOLD, ERROR, GOOD, WARN};

use crate::error::{MeritError, MeritResult};

mod style;

pub fn decode0x(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let text = text.as_ref();
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    Ok(hex::decode(text)?)
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

pub fn print_json(value: &impl Serialize) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Renders the emergency-stop flag of a contract.
pub fn enabled_label(enabled: bool) -> String {
    if enabled {
        format!("{GOOD}enabled{GOOD:#}")
    } else {
        format!("{WARN}disabled{WARN:#}")
    }
}

/// Fails with the revert exit code if the mined transaction did not succeed.
pub fn ensure_success(receipt: &impl ReceiptResponse, action: &str) -> MeritResult<TxHash> {
    let tx_hash = receipt.transaction_hash();
    if !receipt.status() {
        return Err(MeritError::reverted(format!(
            "{action} transaction {tx_hash} reverted"
        )));
    }
    log::info!("{action} confirmed in tx {tx_hash}");
    Ok(tx_hash)
}

pub fn require_nonzero(name: &str, value: alloy::primitives::U256) -> eyre::Result<()> {
    if value.is_zero() {
        bail!("{name} must be greater than zero");
    }
    Ok(())
}
