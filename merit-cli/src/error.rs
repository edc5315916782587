// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use eyre::eyre;

use crate::{constants::REVERT_EXIT_CODE, history::HistoryError, revert};

pub type MeritResult<T = ()> = Result<T, MeritError>;

#[derive(Debug)]
pub struct MeritError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl MeritError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    /// An error raised by a contract rather than by the client.
    pub fn reverted(reason: impl fmt::Display) -> Self {
        Self {
            error: eyre!("execution reverted: {reason}"),
            exit_code: ExitCode::from(REVERT_EXIT_CODE),
        }
    }
}

impl fmt::Display for MeritError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for MeritError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for MeritError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<alloy::contract::Error> for MeritError {
    fn from(err: alloy::contract::Error) -> Self {
        match err.as_revert_data() {
            Some(data) => Self::reverted(revert::describe_or_hex(&data)),
            None => Self {
                error: err.into(),
                exit_code: ExitCode::FAILURE,
            },
        }
    }
}

impl From<alloy::providers::PendingTransactionError> for MeritError {
    fn from(err: alloy::providers::PendingTransactionError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<alloy::transports::TransportError> for MeritError {
    fn from(err: alloy::transports::TransportError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<HistoryError> for MeritError {
    fn from(err: HistoryError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        rpc::json_rpc::ErrorPayload,
        sol_types::SolError,
        transports::{RpcError, TransportErrorKind},
    };

    use super::*;
    use crate::contracts::IMeritToken;

    fn reverted_call(data: &[u8]) -> alloy::contract::Error {
        let body = format!(
            r#"{{"code":3,"message":"execution reverted","data":"0x{}"}}"#,
            hex::encode(data)
        );
        let payload: ErrorPayload = serde_json::from_str(&body).unwrap();
        RpcError::ErrorResp(payload).into()
    }

    #[test]
    fn contract_revert_exits_with_revert_code() {
        let data = IMeritToken::ContractDisabled {}.abi_encode();
        let err = MeritError::from(reverted_call(&data));
        assert_eq!(err.exit_code(), ExitCode::from(REVERT_EXIT_CODE));
        assert_eq!(
            err.to_string(),
            "execution reverted: contract disabled by emergency stop"
        );
    }

    #[test]
    fn undecodable_revert_keeps_the_raw_data() {
        let err = MeritError::from(reverted_call(&[0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(err.exit_code(), ExitCode::from(REVERT_EXIT_CODE));
        assert_eq!(err.to_string(), "execution reverted: 0xdeadbeef");
    }

    #[test]
    fn transport_failure_is_not_a_revert() {
        let err: alloy::contract::Error = RpcError::<TransportErrorKind>::NullResp.into();
        let err = MeritError::from(err);
        assert_eq!(err.exit_code(), ExitCode::FAILURE);
    }
}
