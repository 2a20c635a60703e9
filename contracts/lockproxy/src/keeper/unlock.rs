//! Incoming transfers.

use common::{Coin, TxArgs};
use cosmwasm_std::{CanonicalAddr, Event};
use tracing::debug;

use super::Keeper;
use crate::context::Context;
use crate::error::LockProxyError;
use crate::events::{
    ATTRIBUTE_KEY_AMOUNT, ATTRIBUTE_KEY_FEE_ADDRESS, ATTRIBUTE_KEY_FEE_AMOUNT,
    ATTRIBUTE_KEY_FROM_ADDRESS, ATTRIBUTE_KEY_NONCE, ATTRIBUTE_KEY_SOURCE_ASSET_HASH,
    ATTRIBUTE_KEY_TO_ADDRESS, ATTRIBUTE_KEY_TO_CHAIN_ASSET_HASH, EVENT_TYPE_UNLOCK,
};
use crate::state::{Binding, MODULE_NAME};

impl Keeper {
    /// Release the amount described by `args_bs` to its recipient.
    ///
    /// `from_chain_id` and `from_contract` must already be authenticated and the
    /// message deduplicated by the cross-chain manager. The ledger is debited
    /// last, after the funds have been paid out; only legacy mode rejects a
    /// debit beyond the ledger.
    pub fn unlock(
        &self,
        ctx: &mut Context,
        from_chain_id: u64,
        from_contract: &[u8],
        to_contract: &[u8],
        args_bs: &[u8],
    ) -> Result<(), LockProxyError> {
        let args = TxArgs::from_bytes(args_bs).map_err(|err| LockProxyError::DecodeFailed {
            reason: err.to_string(),
        })?;

        let binding = Binding::new(
            to_contract,
            &args.to_asset_hash,
            from_chain_id,
            from_contract,
            &args.from_asset_hash,
        );
        if !self.asset_is_registered(ctx.storage(), &binding)? {
            return Err(LockProxyError::NotRegistered {
                binding: binding.to_string(),
            });
        }

        // The to asset hash is the denom itself, not an account address
        let to_asset_denom = String::from_utf8(args.to_asset_hash.clone()).map_err(|_| {
            LockProxyError::DecodeFailed {
                reason: format!(
                    "to asset hash is not a denom: {}",
                    hex::encode(&args.to_asset_hash)
                ),
            }
        })?;
        let to_address = CanonicalAddr::from(args.to_address.clone());

        let from_address = CanonicalAddr::from(args.from_address.clone());
        if from_address.is_empty() {
            return Err(LockProxyError::EmptyFromAddress);
        }

        if ctx.mints_and_burns() {
            let mint_coins = vec![Coin::new(args.amount, to_asset_denom.clone())];
            self.supply
                .mint_coins(ctx.storage_mut(), MODULE_NAME, &mint_coins)?;
        }

        let mut after_fee_amount = args.amount;
        if !args.fee_amount.is_zero() {
            if args.fee_amount > args.amount {
                return Err(LockProxyError::FeeExceedsAmount {
                    fee: args.fee_amount,
                    amount: args.amount,
                });
            }
            if args.fee_address.is_empty() {
                return Err(LockProxyError::EmptyFeeAddress);
            }

            after_fee_amount = args.amount - args.fee_amount;
            let fee_coins = vec![Coin::new(args.fee_amount, to_asset_denom.clone())];
            self.supply.send_coins_from_module_to_account(
                ctx.storage_mut(),
                MODULE_NAME,
                &CanonicalAddr::from(args.fee_address.clone()),
                &fee_coins,
            )?;
        }

        let amount_coins = vec![Coin::new(after_fee_amount, to_asset_denom.clone())];
        self.supply.send_coins_from_module_to_account(
            ctx.storage_mut(),
            MODULE_NAME,
            &to_address,
            &amount_coins,
        )?;

        if ctx.mints_and_burns() {
            self.settle_balance(ctx.storage_mut(), &binding, args.amount)?;
        } else {
            self.decrease_balance(ctx.storage_mut(), &binding, args.amount)?;
        }

        ctx.emit_event(
            Event::new(EVENT_TYPE_UNLOCK)
                .add_attribute(
                    ATTRIBUTE_KEY_TO_CHAIN_ASSET_HASH,
                    hex::encode(to_asset_denom.as_bytes()),
                )
                .add_attribute(ATTRIBUTE_KEY_TO_ADDRESS, hex::encode(to_address.as_slice()))
                .add_attribute(ATTRIBUTE_KEY_AMOUNT, args.amount.to_string())
                .add_attribute(ATTRIBUTE_KEY_FROM_ADDRESS, hex::encode(from_address.as_slice()))
                .add_attribute(
                    ATTRIBUTE_KEY_SOURCE_ASSET_HASH,
                    hex::encode(&args.from_asset_hash),
                )
                .add_attribute(ATTRIBUTE_KEY_FEE_AMOUNT, args.fee_amount.to_string())
                .add_attribute(ATTRIBUTE_KEY_FEE_ADDRESS, hex::encode(&args.fee_address))
                .add_attribute(ATTRIBUTE_KEY_NONCE, args.nonce.to_string()),
        );

        debug!(
            denom = %to_asset_denom,
            from_chain_id,
            version = ctx.version(),
            amount = %args.amount,
            nonce = %args.nonce,
            "unlocked"
        );

        self.after_proxy_unlock(ctx, &from_address, &to_address, &amount_coins);
        Ok(())
    }
}
