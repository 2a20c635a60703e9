//! Outgoing transfers.

use common::{Coin, TxArgs};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, CanonicalAddr, Event, Uint256};
use tracing::debug;

use super::Keeper;
use crate::context::Context;
use crate::error::LockProxyError;
use crate::events::{
    ATTRIBUTE_KEY_AMOUNT, ATTRIBUTE_KEY_FEE_ADDRESS, ATTRIBUTE_KEY_FEE_AMOUNT,
    ATTRIBUTE_KEY_FROM_ADDRESS, ATTRIBUTE_KEY_FROM_CONTRACT_HASH, ATTRIBUTE_KEY_LOCK_PROXY,
    ATTRIBUTE_KEY_NONCE, ATTRIBUTE_KEY_TO_ADDRESS, ATTRIBUTE_KEY_TO_CHAIN_ASSET_HASH,
    ATTRIBUTE_KEY_TO_CHAIN_ID, ATTRIBUTE_KEY_TO_CHAIN_PROXY_HASH, EVENT_TYPE_LOCK, METHOD_UNLOCK,
};
use crate::state::{Binding, MODULE_NAME};

/// Parameters of a lock, everything but the sender
#[cw_serde]
pub struct LockRequest {
    /// Local lock proxy the asset is bound through
    pub lock_proxy: Binary,
    /// Denom being locked
    pub source_asset_denom: String,
    pub to_chain_id: u64,
    pub to_chain_proxy_hash: Binary,
    pub to_chain_asset_hash: Binary,
    /// Recipient on the destination chain
    pub to_address: Binary,
    pub value: Uint256,
    /// Settle the fee here instead of on the destination chain
    pub deduct_fee_in_lock: bool,
    pub fee_amount: Uint256,
    pub fee_address: Binary,
}

impl Keeper {
    /// Move `value` of `source_asset_denom` from `from_address` into custody and
    /// queue an `unlock` of the same amount on the destination chain.
    ///
    /// The nonce is consumed as soon as the lock proxy is known to exist, and
    /// the binding is checked only after the funds have moved.
    pub fn lock(
        &self,
        ctx: &mut Context,
        from_address: &CanonicalAddr,
        req: &LockRequest,
    ) -> Result<(), LockProxyError> {
        if !self.ensure_lock_proxy_exist(ctx.storage(), &req.lock_proxy)? {
            return Err(LockProxyError::NotCreated {
                lock_proxy: hex::encode(req.lock_proxy.as_slice()),
            });
        }

        let nonce = self.next_nonce(ctx.storage_mut())?;
        let mut args = TxArgs {
            from_address: from_address.to_vec(),
            from_asset_hash: req.source_asset_denom.as_bytes().to_vec(),
            to_asset_hash: req.to_chain_asset_hash.to_vec(),
            to_address: req.to_address.to_vec(),
            amount: req.value,
            fee_amount: req.fee_amount,
            fee_address: req.fee_address.to_vec(),
            nonce,
        };

        let mut after_fee_amount = req.value;
        if req.deduct_fee_in_lock && !req.fee_amount.is_zero() {
            if req.fee_address.is_empty() {
                return Err(LockProxyError::EmptyFeeAddress);
            }
            if req.fee_amount > req.value {
                return Err(LockProxyError::FeeExceedsValue {
                    fee: req.fee_amount,
                    value: req.value,
                });
            }

            after_fee_amount = req.value - req.fee_amount;
            let fee_coins = vec![Coin::new(req.fee_amount, req.source_asset_denom.clone())];
            self.bank.send_coins(
                ctx.storage_mut(),
                from_address,
                &CanonicalAddr::from(req.fee_address.clone()),
                &fee_coins,
            )?;

            // Fee is settled here, the destination chain must not charge it again
            args.amount = after_fee_amount;
            args.fee_amount = Uint256::zero();
        }

        let amount_coins = vec![Coin::new(after_fee_amount, req.source_asset_denom.clone())];
        self.supply.send_coins_from_account_to_module(
            ctx.storage_mut(),
            from_address,
            MODULE_NAME,
            &amount_coins,
        )?;

        if ctx.mints_and_burns() {
            self.supply
                .burn_coins(ctx.storage_mut(), MODULE_NAME, &amount_coins)?;
        }

        self.ccm
            .create_cross_chain_tx(
                ctx.storage_mut(),
                from_address,
                req.to_chain_id,
                &req.lock_proxy,
                &req.to_chain_proxy_hash,
                METHOD_UNLOCK,
                &args.to_bytes(),
            )
            .map_err(|err| LockProxyError::EmitFailed {
                to_chain_id: req.to_chain_id,
                reason: err.to_string(),
            })?;

        // Amounts are unsigned, so there is no negative-amount case to reject here.

        let binding = Binding::new(
            &req.lock_proxy,
            req.source_asset_denom.as_bytes(),
            req.to_chain_id,
            &req.to_chain_proxy_hash,
            &req.to_chain_asset_hash,
        );
        if !self.asset_is_registered(ctx.storage(), &binding)? {
            return Err(LockProxyError::NotRegistered {
                binding: binding.to_string(),
            });
        }

        self.increase_balance(ctx.storage_mut(), &binding, after_fee_amount)?;

        ctx.emit_event(
            Event::new(EVENT_TYPE_LOCK)
                .add_attribute(
                    ATTRIBUTE_KEY_FROM_CONTRACT_HASH,
                    hex::encode(req.source_asset_denom.as_bytes()),
                )
                .add_attribute(ATTRIBUTE_KEY_TO_CHAIN_ID, req.to_chain_id.to_string())
                .add_attribute(
                    ATTRIBUTE_KEY_TO_CHAIN_PROXY_HASH,
                    hex::encode(req.to_chain_proxy_hash.as_slice()),
                )
                .add_attribute(
                    ATTRIBUTE_KEY_TO_CHAIN_ASSET_HASH,
                    hex::encode(req.to_chain_asset_hash.as_slice()),
                )
                .add_attribute(ATTRIBUTE_KEY_FROM_ADDRESS, hex::encode(from_address.as_slice()))
                .add_attribute(ATTRIBUTE_KEY_TO_ADDRESS, hex::encode(req.to_address.as_slice()))
                .add_attribute(ATTRIBUTE_KEY_AMOUNT, req.value.to_string())
                .add_attribute(ATTRIBUTE_KEY_LOCK_PROXY, hex::encode(req.lock_proxy.as_slice()))
                .add_attribute(ATTRIBUTE_KEY_FEE_AMOUNT, req.fee_amount.to_string())
                .add_attribute(ATTRIBUTE_KEY_FEE_ADDRESS, hex::encode(req.fee_address.as_slice()))
                .add_attribute(ATTRIBUTE_KEY_NONCE, nonce.to_string()),
        );

        debug!(
            denom = %req.source_asset_denom,
            to_chain_id = req.to_chain_id,
            version = ctx.version(),
            amount = %after_fee_amount,
            nonce = %nonce,
            "locked"
        );
        Ok(())
    }
}
