// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{
    utils::{format_ether, parse_ether},
    U256,
};

use crate::{
    common_args::{AuthArgs, ProviderArgs, VaultArgs},
    contracts::ICurveVault,
    error::MeritResult,
    utils::{ensure_success, require_nonzero},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    vault: VaultArgs,

    /// Amount of ETH to deposit
    #[arg(long, value_parser = parse_ether)]
    amount: U256,

    #[command(flatten)]
    auth: AuthArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MeritResult {
    require_nonzero("amount", args.amount)?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let vault = ICurveVault::new(args.vault.vault, &provider);

    let receipt = vault
        .fund()
        .value(args.amount)
        .send()
        .await?
        .get_receipt()
        .await?;
    ensure_success(&receipt, "fund")?;

    let reserve = vault.reserve().call().await?;
    log::info!(
        "deposited {} ETH, reserve is now {} ETH",
        format_ether(args.amount),
        format_ether(reserve)
    );
    Ok(())
}
