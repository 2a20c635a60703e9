//! Coin creation delegated to a lock proxy.

use common::{is_valid_denom, Coin, RegisterAssetTxArgs};
use cosmwasm_std::{CanonicalAddr, Event};
use tracing::info;

use super::Keeper;
use crate::context::Context;
use crate::error::LockProxyError;
use crate::events::{
    ATTRIBUTE_KEY_AMOUNT, ATTRIBUTE_KEY_CREATOR, ATTRIBUTE_KEY_SOURCE_ASSET_DENOM,
    EVENT_TYPE_CREATE_AND_DELEGATE_COIN_TO_PROXY, METHOD_REGISTER_ASSET,
};
use crate::state::{Binding, MODULE_NAME};

impl Keeper {
    /// Create `coin.denom`, bind it through `lock_proxy` to its native asset and
    /// announce it to the native chain.
    ///
    /// In legacy mode the initial supply is minted into custody; otherwise the
    /// coin must be created with a zero amount.
    #[allow(clippy::too_many_arguments)]
    pub fn create_coin_and_delegate_to_proxy(
        &self,
        ctx: &mut Context,
        creator: &CanonicalAddr,
        coin: &Coin,
        lock_proxy: &[u8],
        native_chain_id: u64,
        native_lock_proxy: &[u8],
        native_asset: &[u8],
    ) -> Result<(), LockProxyError> {
        if !is_valid_denom(&coin.denom) {
            return Err(LockProxyError::InvalidDenom {
                denom: coin.denom.clone(),
            });
        }
        if self.ccm.denom_creator(ctx.storage(), &coin.denom)?.is_some() {
            return Err(LockProxyError::DenomAlreadyExists {
                denom: coin.denom.clone(),
            });
        }
        if !self.ensure_lock_proxy_exist(ctx.storage(), lock_proxy)? {
            return Err(LockProxyError::NotCreated {
                lock_proxy: hex::encode(lock_proxy),
            });
        }

        self.ccm
            .set_denom_creator(ctx.storage_mut(), &coin.denom, creator)?;

        let binding = Binding::new(
            lock_proxy,
            coin.denom.as_bytes(),
            native_chain_id,
            native_lock_proxy,
            native_asset,
        );
        self.register_binding(ctx, &binding)?;

        if !ctx.mints_and_burns() {
            // Legacy mode mints the whole supply once, here
            self.supply
                .mint_coins(ctx.storage_mut(), MODULE_NAME, &[coin.clone()])?;
        } else if !coin.amount.is_zero() {
            return Err(LockProxyError::NonZeroInitialSupply {
                amount: coin.amount,
            });
        }

        self.increase_balance(ctx.storage_mut(), &binding, coin.amount)?;

        let args = RegisterAssetTxArgs {
            asset_hash: coin.denom.as_bytes().to_vec(),
            native_asset_hash: native_asset.to_vec(),
        };
        self.ccm
            .create_cross_chain_tx(
                ctx.storage_mut(),
                creator,
                native_chain_id,
                lock_proxy,
                native_lock_proxy,
                METHOD_REGISTER_ASSET,
                &args.to_bytes(),
            )
            .map_err(|err| LockProxyError::EmitFailed {
                to_chain_id: native_chain_id,
                reason: err.to_string(),
            })?;

        ctx.emit_event(
            Event::new(EVENT_TYPE_CREATE_AND_DELEGATE_COIN_TO_PROXY)
                .add_attribute(ATTRIBUTE_KEY_SOURCE_ASSET_DENOM, coin.denom.clone())
                .add_attribute(ATTRIBUTE_KEY_CREATOR, hex::encode(creator.as_slice()))
                .add_attribute(ATTRIBUTE_KEY_AMOUNT, coin.amount.to_string()),
        );
        info!(denom = %coin.denom, native_chain_id, "coin created and delegated to lock proxy");
        Ok(())
    }

    /// Inbound asset registration is permanently disabled; bindings are only
    /// created through [`Keeper::create_coin_and_delegate_to_proxy`].
    pub fn register_asset(
        &self,
        _ctx: &mut Context,
        _from_chain_id: u64,
        _from_contract: &[u8],
        _to_contract: &[u8],
        _args_bs: &[u8],
    ) -> Result<(), LockProxyError> {
        Err(LockProxyError::RegistrationDisallowed)
    }
}
