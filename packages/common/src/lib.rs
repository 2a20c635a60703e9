//! Common - Shared Wire Types and Coin Primitives for the LockProxy Bridge
//!
//! This package provides the binary message layout exchanged with the
//! cross-chain manager, plus the coin type moved by the bank collaborators.

pub mod codec;
pub mod coin;
pub mod tx_args;

pub use codec::{CodecError, WireReader, WireWriter};
pub use coin::{coins_to_string, is_valid_denom, Coin};
pub use tx_args::{RegisterAssetTxArgs, TxArgs};
