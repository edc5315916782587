// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    contracts::IAdministered,
    error::MeritResult,
    utils::{enabled_label, ensure_success},
};

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Halt every operation that changes state until resumed
    Stop(Args),
    /// Lift a previous stop
    Resume(Args),
}

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token or vault to act on
    #[arg(long)]
    contract: Address,

    #[command(flatten)]
    auth: AuthArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(cmd: Command) -> MeritResult {
    let (args, enable) = match cmd {
        Command::Stop(args) => (args, false),
        Command::Resume(args) => (args, true),
    };
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let contract = IAdministered::new(args.contract, &provider);

    if contract.contractEnabled().call().await? == enable {
        log::info!("{} is already {}", args.contract, enabled_label(enable));
        return Ok(());
    }

    let (action, pending) = if enable {
        ("resumeContract", contract.resumeContract().send().await?)
    } else {
        ("emergencyStop", contract.emergencyStop().send().await?)
    };
    let receipt = pending.get_receipt().await?;
    ensure_success(&receipt, action)?;
    log::info!("{} is now {}", args.contract, enabled_label(enable));
    Ok(())
}
