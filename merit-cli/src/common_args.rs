// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, FixedBytes},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{local::PrivateKeySigner, Signer},
};
use eyre::{bail, eyre, Context};

use crate::{constants::DEFAULT_ENDPOINT, utils::decode0x};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        let key = match (&self.private_key, &self.private_key_path) {
            (Some(key), _) => key.clone(),
            (None, Some(file)) => {
                fs::read_to_string(file).wrap_err("could not open private key file")?
            }
            (None, None) => bail!("either --private-key or --private-key-path is required"),
        };
        let key = decode0x(key)?;
        if key.len() != 32 {
            return Err(eyre!("private key must be 32 bytes, got {}", key.len()));
        }
        let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&key);
        let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
        log::debug!("signing as {}", signer.address());
        Ok(EthereumWallet::new(signer))
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Arbitrum RPC endpoint
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

#[derive(Debug, clap::Args)]
pub struct TokenArgs {
    /// Address of the deployed Merit token
    #[arg(long)]
    pub token: Address,
}

#[derive(Debug, clap::Args)]
pub struct VaultArgs {
    /// Address of the deployed curve vault
    #[arg(long)]
    pub vault: Address,
}

#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// Print machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}
