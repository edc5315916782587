// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::eyre;

use crate::{
    common_args::{AuthArgs, ProviderArgs, TokenArgs, VaultArgs},
    contracts::{ICurveVault, IMeritToken},
    error::MeritResult,
    utils::ensure_success,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    token: TokenArgs,

    #[command(flatten)]
    vault: VaultArgs,

    #[command(flatten)]
    auth: AuthArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MeritResult {
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let token_address = args.token.token;
    let vault_address = args.vault.vault;

    let vault = ICurveVault::new(vault_address, &provider);
    let backing = vault.getTokenAddress().call().await?;
    if backing != token_address {
        return Err(eyre!(
            "vault {vault_address} is bound to token {backing}, not {token_address}"
        )
        .into());
    }

    let token = IMeritToken::new(token_address, &provider);
    let current = token.getFundsContract().call().await?;
    if current == vault_address {
        log::info!("token {token_address} already pays out through {vault_address}");
        return Ok(());
    }

    let receipt = token
        .setFundsContract(vault_address)
        .send()
        .await?
        .get_receipt()
        .await?;
    ensure_success(&receipt, "setFundsContract")?;
    log::info!("token {token_address} now pays out through {vault_address}");
    Ok(())
}
