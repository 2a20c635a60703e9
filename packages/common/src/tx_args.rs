//! Cross-chain message payloads carried by the cross-chain manager
//!
//! # `TxArgs` byte layout
//! - `varbytes` from_asset_hash
//! - `varbytes` to_asset_hash
//! - `varbytes` to_address
//! - `u256`     amount
//! - `u256`     fee_amount
//! - `varbytes` fee_address
//! - `varbytes` from_address
//! - `u256`     nonce
//!
//! # `RegisterAssetTxArgs` byte layout
//! - `varbytes` asset_hash
//! - `varbytes` native_asset_hash
//!
//! Bytes following a complete record are ignored.

use cosmwasm_std::Uint256;

use crate::codec::{CodecError, WireReader, WireWriter};

/// Payload of an `unlock` cross-chain call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxArgs {
    pub from_address: Vec<u8>,
    pub from_asset_hash: Vec<u8>,
    pub to_asset_hash: Vec<u8>,
    pub to_address: Vec<u8>,
    pub amount: Uint256,
    pub fee_amount: Uint256,
    pub fee_address: Vec<u8>,
    pub nonce: Uint256,
}

impl TxArgs {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = WireWriter::new();
        w.write_var_bytes(&self.from_asset_hash)
            .write_var_bytes(&self.to_asset_hash)
            .write_var_bytes(&self.to_address)
            .write_u256(self.amount)
            .write_u256(self.fee_amount)
            .write_var_bytes(&self.fee_address)
            .write_var_bytes(&self.from_address)
            .write_u256(self.nonce);
        w.into_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut r = WireReader::new(bytes);
        let from_asset_hash = r.read_var_bytes()?.to_vec();
        let to_asset_hash = r.read_var_bytes()?.to_vec();
        let to_address = r.read_var_bytes()?.to_vec();
        let amount = r.read_u256()?;
        let fee_amount = r.read_u256()?;
        let fee_address = r.read_var_bytes()?.to_vec();
        let from_address = r.read_var_bytes()?.to_vec();
        let nonce = r.read_u256()?;
        Ok(Self {
            from_address,
            from_asset_hash,
            to_asset_hash,
            to_address,
            amount,
            fee_amount,
            fee_address,
            nonce,
        })
    }
}

/// Payload of a `registerAsset` cross-chain call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterAssetTxArgs {
    pub asset_hash: Vec<u8>,
    pub native_asset_hash: Vec<u8>,
}

impl RegisterAssetTxArgs {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = WireWriter::new();
        w.write_var_bytes(&self.asset_hash)
            .write_var_bytes(&self.native_asset_hash);
        w.into_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut r = WireReader::new(bytes);
        Ok(Self {
            asset_hash: r.read_var_bytes()?.to_vec(),
            native_asset_hash: r.read_var_bytes()?.to_vec(),
        })
    }
}
