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

    /// Recipient of the award. Repeat to award several accounts in one transaction
    #[arg(long = "to", required = true, num_args = 1..)]
    recipients: Vec<Address>,

    /// Amount of MRT for each recipient, in whole tokens
    #[arg(long, value_parser = parse_ether)]
    amount: U256,

    /// Pointer to the off-chain record justifying the award
    #[arg(long)]
    ipfs_hash: String,

    #[command(flatten)]
    auth: AuthArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MeritResult {
    require_nonzero("amount", args.amount)?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let token = IMeritToken::new(args.token.token, &provider);

    let (action, pending) = match args.recipients.as_slice() {
        [to] => {
            log::debug!("awarding {} MRT to {to}", format_ether(args.amount));
            let call = token.award(*to, args.amount, args.ipfs_hash.clone());
            ("award", call.send().await?)
        }
        recipients => {
            log::debug!(
                "awarding {} MRT each to {} recipients",
                format_ether(args.amount),
                recipients.len()
            );
            let call = token.awardBulk(recipients.to_vec(), args.amount, args.ipfs_hash.clone());
            ("awardBulk", call.send().await?)
        }
    };
    let receipt = pending.get_receipt().await?;
    ensure_success(&receipt, action)?;
    log::info!(
        "awarded {} MRT to {} account(s), anchored at {}",
        format_ether(args.amount),
        args.recipients.len(),
        args.ipfs_hash
    );
    Ok(())
}
