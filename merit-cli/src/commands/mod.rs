// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::MeritResult;

mod admin;
mod award;
mod burn;
mod emergency;
mod fund;
mod history;
mod link;
mod sell;
mod status;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Manage the admins of the token or the vault
    #[command(subcommand)]
    Admin(admin::Command),
    /// Award tokens to one or more recipients
    #[clap(visible_alias = "a")]
    Award(award::Args),
    /// Burn tokens from an account
    Burn(burn::Args),
    /// Stop or resume the token or the vault
    #[command(subcommand)]
    Emergency(emergency::Command),
    /// Send ETH to the vault's reserve
    Fund(fund::Args),
    /// Rebuild the award history and check it against the ledger's anchor
    #[clap(visible_alias = "h")]
    History(history::Args),
    /// Register a deployed vault with the token
    Link(link::Args),
    /// Sell tokens back to the vault for ETH
    Sell(sell::Args),
    /// Show the state of the token and its vault
    #[clap(visible_alias = "s")]
    Status(status::Args),
}

pub async fn exec(cmd: Command) -> MeritResult {
    match cmd {
        Command::Admin(command) => admin::exec(command).await,
        Command::Award(args) => award::exec(args).await,
        Command::Burn(args) => burn::exec(args).await,
        Command::Emergency(command) => emergency::exec(command).await,
        Command::Fund(args) => fund::exec(args).await,
        Command::History(args) => history::exec(args).await,
        Command::Link(args) => link::exec(args).await,
        Command::Sell(args) => sell::exec(args).await,
        Command::Status(args) => status::exec(args).await,
    }
}
