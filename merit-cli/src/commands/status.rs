// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{
    utils::{format_ether, format_units},
    Address, U256,
};
use serde::Serialize;

use crate::{
    common_args::{OutputArgs, ProviderArgs, TokenArgs},
    contracts::{IAdministered, ICurveVault, IMeritToken},
    error::MeritResult,
    utils::{enabled_label, print_json, BOLD},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    token: TokenArgs,

    /// Also show the token balance of this account
    #[arg(long)]
    holder: Option<Address>,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    provider: ProviderArgs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenStatus {
    address: Address,
    name: String,
    symbol: String,
    decimals: u8,
    total_supply: U256,
    owner: Address,
    enabled: bool,
    latest_ipfs_hash: String,
    funds_contract: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    holder_balance: Option<U256>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VaultStatus {
    address: Address,
    token: Address,
    owner: Address,
    enabled: bool,
    reserve: U256,
}

#[derive(Debug, Serialize)]
struct Status {
    token: TokenStatus,
    vault: Option<VaultStatus>,
}

pub async fn exec(args: Args) -> MeritResult {
    let provider = args.provider.build_provider().await?;
    let token = IMeritToken::new(args.token.token, &provider);
    let token_admin = IAdministered::new(args.token.token, &provider);

    let holder_balance = match args.holder {
        Some(holder) => Some(token.balanceOf(holder).call().await?),
        None => None,
    };
    let token_status = TokenStatus {
        address: args.token.token,
        name: token.name().call().await?,
        symbol: token.symbol().call().await?,
        decimals: token.decimals().call().await?,
        total_supply: token.totalSupply().call().await?,
        owner: token_admin.owner().call().await?,
        enabled: token_admin.contractEnabled().call().await?,
        latest_ipfs_hash: token.latestIpfsHash().call().await?,
        funds_contract: token.getFundsContract().call().await?,
        holder_balance,
    };

    let vault_status = if token_status.funds_contract.is_zero() {
        None
    } else {
        let address = token_status.funds_contract;
        let vault = ICurveVault::new(address, &provider);
        let vault_admin = IAdministered::new(address, &provider);
        Some(VaultStatus {
            address,
            token: vault.getTokenAddress().call().await?,
            owner: vault_admin.owner().call().await?,
            enabled: vault_admin.contractEnabled().call().await?,
            reserve: vault.reserve().call().await?,
        })
    };

    let status = Status {
        token: token_status,
        vault: vault_status,
    };
    if args.output.json {
        print_json(&status)?;
    } else {
        print_status(&status);
    }
    Ok(())
}

fn print_status(status: &Status) {
    let token = &status.token;
    let amount = |value: U256| {
        format_units(value, token.decimals).unwrap_or_else(|_| value.to_string())
    };

    println!("{BOLD}{} ({}){BOLD:#} at {}", token.name, token.symbol, token.address);
    println!("  state:          {}", enabled_label(token.enabled));
    println!("  owner:          {}", token.owner);
    println!("  total supply:   {} {}", amount(token.total_supply), token.symbol);
    if let Some(balance) = token.holder_balance {
        println!("  holder balance: {} {}", amount(balance), token.symbol);
    }
    let pointer = if token.latest_ipfs_hash.is_empty() {
        "(none)"
    } else {
        &token.latest_ipfs_hash
    };
    println!("  latest award:   {pointer}");

    let Some(vault) = &status.vault else {
        println!("{BOLD}vault{BOLD:#}: not registered");
        return;
    };
    println!("{BOLD}vault{BOLD:#} at {}", vault.address);
    println!("  state:          {}", enabled_label(vault.enabled));
    println!("  owner:          {}", vault.owner);
    println!("  reserve:        {} ETH", format_ether(vault.reserve));
    if vault.token != token.address {
        log::warn!("vault points at token {}, not {}", vault.token, token.address);
    }
}
