// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Client bindings for the deployed contracts.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IMeritToken {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function latestIpfsHash() external view returns (string);
        function getFundsContract() external view returns (address);
        function calculateSellReturn(uint256 amount) external view returns (uint256);

        function award(address to, uint256 amount, string ipfs_hash) external;
        function awardBulk(address[] recipients, uint256 amount_each, string ipfs_hash) external;
        function burn(address from, uint256 amount) external;
        function sell(uint256 amount) external returns (uint256);
        function setFundsContract(address vault) external;

        event LogAwarded(address indexed awardedTo, address indexed minter, uint256 amount, string ipfsHash);
        event LogBulkAwardedSummary(address indexed minter, uint256 bulkCount, uint256 amountEach, string ipfsHash);
        event LogSell(address indexed sellingAccount, uint256 sellAmount, uint256 ethReceived);

        error Unauthorized(address account);
        error Forbidden();
        error ContractDisabled();
        error InvalidArgument(string reason);
        error InsufficientBalance(address from, uint256 have, uint256 want);
        error InsufficientAllowance(address owner, address spender, uint256 have, uint256 want);
        error FundsContractNotSet();
        error PayoutFailed(bytes reason);
    }

    #[sol(rpc)]
    interface ICurveVault {
        function fund() external payable;
        function getTokenAddress() external view returns (address);
        function reserve() external view returns (uint256);

        error Unauthorized(address account);
        error Forbidden();
        error ContractDisabled();
        error InvalidArgument(string reason);
        error InsufficientReserve(uint256 have, uint256 want);
        error TransferFailed(address recipient, uint256 amount);
    }

    /// Role and emergency-stop surface both contracts share.
    #[sol(rpc)]
    interface IAdministered {
        function owner() external view returns (address);
        function checkIfAdmin(address account) external view returns (bool);
        function contractEnabled() external view returns (bool);

        function addAdmin(address account) external;
        function removeAdmin(address account) external;
        function emergencyStop() external;
        function resumeContract() external;
    }
}
