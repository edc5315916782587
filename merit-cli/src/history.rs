// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Award history rebuilt from the token's `LogAwarded` records.
//!
//! The ledger only stores the content pointer of the most recent award. The
//! full trail lives in the event log, and its last entry must agree with that
//! stored pointer.

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::Provider,
    rpc::types::{Filter, Log},
    sol_types::SolEvent,
    transports::TransportError,
};
use serde::Serialize;

use crate::contracts::IMeritToken::LogAwarded;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to fetch award logs: {0}")]
    Rpc(#[from] TransportError),
    #[error("malformed award log: {0}")]
    Decode(#[from] alloy::sol_types::Error),
    #[error("award log has no {field}; it is not yet mined")]
    MissingMetadata { field: &'static str },
    #[error("audit trail ends at {trail:?} but the ledger anchors {anchor:?}")]
    AnchorMismatch { trail: String, anchor: String },
}

/// One award as recorded on chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    pub block_number: u64,
    pub log_index: u64,
    pub transaction_hash: TxHash,
    pub minter: Address,
    pub recipient: Address,
    pub amount: U256,
    pub content_pointer: String,
}

impl AwardRecord {
    pub fn from_log(log: &Log) -> Result<Self, HistoryError> {
        let block_number = log
            .block_number
            .ok_or(HistoryError::MissingMetadata { field: "block number" })?;
        let log_index = log
            .log_index
            .ok_or(HistoryError::MissingMetadata { field: "log index" })?;
        let transaction_hash = log
            .transaction_hash
            .ok_or(HistoryError::MissingMetadata {
                field: "transaction hash",
            })?;
        let event = LogAwarded::decode_log_data(log.data())?;
        Ok(Self {
            block_number,
            log_index,
            transaction_hash,
            minter: event.minter,
            recipient: event.awardedTo,
            amount: event.amount,
            content_pointer: event.ipfsHash,
        })
    }
}

/// Awards in the order they were recorded.
#[derive(Debug, Default, Serialize)]
pub struct AuditTrail {
    records: Vec<AwardRecord>,
}

impl AuditTrail {
    pub fn new(mut records: Vec<AwardRecord>) -> Self {
        records.sort_by_key(|r| (r.block_number, r.log_index));
        Self { records }
    }

    /// Loads every award of `token` from `from_block` onward.
    pub async fn fetch(
        provider: &impl Provider,
        token: Address,
        from_block: u64,
    ) -> Result<Self, HistoryError> {
        let filter = Filter::new()
            .address(token)
            .event_signature(LogAwarded::SIGNATURE_HASH)
            .from_block(from_block);
        let logs = provider.get_logs(&filter).await?;
        log::debug!("fetched {} award logs for {token}", logs.len());

        let records = logs
            .iter()
            .filter(|log| !log.removed)
            .map(AwardRecord::from_log)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[AwardRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Content pointer of the latest award, or `""` before any award.
    pub fn head(&self) -> &str {
        self.records
            .last()
            .map(|r| r.content_pointer.as_str())
            .unwrap_or_default()
    }

    /// Checks the trail against the pointer the ledger stores.
    pub fn verify_anchor(&self, anchor: &str) -> Result<(), HistoryError> {
        if self.head() != anchor {
            return Err(HistoryError::AnchorMismatch {
                trail: self.head().to_string(),
                anchor: anchor.to_string(),
            });
        }
        Ok(())
    }
}
