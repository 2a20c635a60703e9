//! Error types for the LockProxy module
//!
//! Per-call errors are recoverable: the host decides whether they abort the
//! enclosing transaction. The initialization errors at the bottom are only
//! returned while building the keeper or importing genesis, and a host is
//! expected to abort start-up on them.

use cosmwasm_std::{StdError, Uint256};
use thiserror::Error;

use crate::expected::BankError;

#[derive(Error, Debug, PartialEq)]
pub enum LockProxyError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Bank: {0}")]
    Bank(#[from] BankError),

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Lock proxy not created: {lock_proxy}")]
    NotCreated { lock_proxy: String },

    #[error("Creator {creator} already created a lock proxy")]
    LockProxyAlreadyExists { creator: String },

    #[error("Asset binding already registered: {binding}")]
    BindingAlreadyExists { binding: String },

    #[error("Missing asset binding: {binding}")]
    NotRegistered { binding: String },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Insufficient balance: current {current}, decrement {decrement}")]
    InsufficientBalance { current: Uint256, decrement: Uint256 },

    // ========================================================================
    // Fee Errors
    // ========================================================================

    #[error("Fee amount is present but fee address is empty")]
    EmptyFeeAddress,

    #[error("Fee amount {fee} is greater than value {value}")]
    FeeExceedsValue { fee: Uint256, value: Uint256 },

    #[error("Fee amount {fee} is greater than amount {amount}")]
    FeeExceedsAmount { fee: Uint256, amount: Uint256 },

    // ========================================================================
    // Message Errors
    // ========================================================================

    #[error("From address is empty")]
    EmptyFromAddress,

    #[error("Failed to decode tx args: {reason}")]
    DecodeFailed { reason: String },

    #[error("Failed to emit cross-chain tx to chain {to_chain_id}: {reason}")]
    EmitFailed { to_chain_id: u64, reason: String },

    // ========================================================================
    // Onboarding Errors
    // ========================================================================

    #[error("Denom already exists: {denom}")]
    DenomAlreadyExists { denom: String },

    #[error("Invalid denom: {denom}")]
    InvalidDenom { denom: String },

    #[error("Initial supply must be zero, got {amount}")]
    NonZeroInitialSupply { amount: Uint256 },

    #[error("Asset registration disallowed")]
    RegistrationDisallowed,

    // ========================================================================
    // Initialization Errors
    // ========================================================================

    #[error("The {module} module account has not been set")]
    ModuleAccountMissing { module: String },

    #[error("Invalid genesis: {reason}")]
    InvalidGenesis { reason: String },

    #[error("Cannot set lock proxy hooks twice")]
    HooksAlreadySet,

    #[error("Hook registered twice: {name}")]
    DuplicateHook { name: String },
}
