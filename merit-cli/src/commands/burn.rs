// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{
    utils::{format_ether, parse_ether},
    Address, U256,
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

    /// Account whose tokens are destroyed
    #[arg(long)]
    from: Address,

    /// Amount of MRT to burn, in whole tokens
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
    let token = IMeritToken::new(args.token.token, &provider);

    let receipt = token
        .burn(args.from, args.amount)
        .send()
        .await?
        .get_receipt()
        .await?;
    ensure_success(&receipt, "burn")?;
    log::info!("burned {} MRT from {}", format_ether(args.amount), args.from);
    Ok(())
}
