// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;

use crate::{
    common_args::{AuthArgs, OutputArgs, ProviderArgs},
    contracts::IAdministered,
    error::MeritResult,
    utils::{ensure_success, print_json},
};

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Grant the admin role
    Add(ChangeArgs),
    /// Revoke the admin role. The owner cannot be removed
    Remove(ChangeArgs),
    /// Show whether an account holds the admin role
    Check(CheckArgs),
}

#[derive(Debug, clap::Args)]
pub struct ChangeArgs {
    /// Token or vault to act on
    #[arg(long)]
    contract: Address,

    /// Account whose role changes
    #[arg(long)]
    account: Address,

    #[command(flatten)]
    auth: AuthArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Token or vault to query
    #[arg(long)]
    contract: Address,

    /// Account to look up
    #[arg(long)]
    account: Address,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(cmd: Command) -> MeritResult {
    match cmd {
        Command::Add(args) => change(args, true).await,
        Command::Remove(args) => change(args, false).await,
        Command::Check(args) => check(args).await,
    }
}

async fn change(args: ChangeArgs, grant: bool) -> MeritResult {
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let contract = IAdministered::new(args.contract, &provider);

    let (action, pending) = if grant {
        ("addAdmin", contract.addAdmin(args.account).send().await?)
    } else {
        ("removeAdmin", contract.removeAdmin(args.account).send().await?)
    };
    let receipt = pending.get_receipt().await?;
    ensure_success(&receipt, action)?;

    let is_admin = contract.checkIfAdmin(args.account).call().await?;
    log::info!(
        "{} is {}an admin of {}",
        args.account,
        if is_admin { "" } else { "not " },
        args.contract
    );
    Ok(())
}

async fn check(args: CheckArgs) -> MeritResult {
    let provider = args.provider.build_provider().await?;
    let contract = IAdministered::new(args.contract, &provider);

    let is_admin = contract.checkIfAdmin(args.account).call().await?;
    let owner = contract.owner().call().await?;
    if args.output.json {
        print_json(&serde_json::json!({
            "contract": args.contract,
            "account": args.account,
            "isAdmin": is_admin,
            "isOwner": owner == args.account,
        }))?;
    } else {
        println!(
            "{}: admin={} owner={}",
            args.account,
            is_admin,
            owner == args.account
        );
    }
    Ok(())
}
