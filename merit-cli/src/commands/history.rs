// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::utils::format_ether;

use crate::{
    common_args::{OutputArgs, ProviderArgs, TokenArgs},
    contracts::IMeritToken,
    error::MeritResult,
    history::AuditTrail,
    utils::{print_json, BOLD, GOOD},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    token: TokenArgs,

    /// First block to scan, usually the token's deployment block
    #[arg(long, default_value = "0")]
    from_block: u64,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MeritResult {
    let provider = args.provider.build_provider().await?;
    let token = IMeritToken::new(args.token.token, &provider);

    let trail = AuditTrail::fetch(&provider, args.token.token, args.from_block).await?;
    let anchor = token.latestIpfsHash().call().await?;

    if trail.is_empty() {
        log::info!("no awards recorded since block {}", args.from_block);
    }
    if args.output.json {
        print_json(&trail)?;
    } else {
        for record in trail.records() {
            println!(
                "{BOLD}#{}.{}{BOLD:#} {} MRT to {} by {}: {}",
                record.block_number,
                record.log_index,
                format_ether(record.amount),
                record.recipient,
                record.minter,
                record.content_pointer,
            );
        }
    }

    trail.verify_anchor(&anchor)?;
    log::info!(
        "{GOOD}audit trail of {} awards matches the ledger anchor{GOOD:#}",
        trail.len()
    );
    Ok(())
}
