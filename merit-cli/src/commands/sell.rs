// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{
    utils::{format_ether, parse_ether},
    U256,
};

use crate::{
    common_args::{AuthArgs, ProviderArgs, TokenArgs},
    contracts::IMeritToken,
    error::MeritResult,
    utils::{ensure_success, require_nonzero},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    token: TokenArgs,

    /// Amount of MRT to sell, in whole tokens
    #[arg(long, value_parser = parse_ether)]
    amount: U256,

    /// Only report what the sale would pay
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    auth: AuthArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MeritResult {
    require_nonzero("amount", args.amount)?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let token = IMeritToken::new(args.token.token, &provider);

    let quote = token.calculateSellReturn(args.amount).call().await?;
    log::debug!("curve quote: {} ETH", format_ether(quote));

    // Surfaces reverts with their decoded reason before paying for gas
    let call = token.sell(args.amount);
    let payout = call.call().await?;
    if args.dry_run {
        println!(
            "selling {} MRT would pay {} ETH",
            format_ether(args.amount),
            format_ether(payout)
        );
        return Ok(());
    }

    let receipt = call.send().await?.get_receipt().await?;
    ensure_success(&receipt, "sell")?;
    log::info!(
        "sold {} MRT for {} ETH",
        format_ether(args.amount),
        format_ether(payout)
    );
    Ok(())
}
