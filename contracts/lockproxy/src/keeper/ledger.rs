//! Custody ledger and lock nonce.

use cosmwasm_std::{StdResult, Storage, Uint256};

use super::Keeper;
use crate::error::LockProxyError;
use crate::state::{Binding, BALANCES, NONCE};

impl Keeper {
    pub fn get_balance(&self, storage: &dyn Storage, binding: &Binding) -> StdResult<Uint256> {
        Ok(BALANCES
            .may_load(storage, &binding.storage_key())?
            .unwrap_or_default())
    }

    pub fn store_balance(
        &self,
        storage: &mut dyn Storage,
        binding: &Binding,
        amount: Uint256,
    ) -> StdResult<()> {
        BALANCES.save(storage, &binding.storage_key(), &amount)
    }

    /// Credit the custody ledger of `binding`.
    pub fn increase_balance(
        &self,
        storage: &mut dyn Storage,
        binding: &Binding,
        amount: Uint256,
    ) -> Result<(), LockProxyError> {
        let current = self.get_balance(storage, binding)?;
        let updated = current.checked_add(amount).map_err(cosmwasm_std::StdError::from)?;
        self.store_balance(storage, binding, updated)?;
        Ok(())
    }

    /// Debit the custody ledger of `binding`; the ledger is left untouched if it would go negative.
    pub fn decrease_balance(
        &self,
        storage: &mut dyn Storage,
        binding: &Binding,
        amount: Uint256,
    ) -> Result<(), LockProxyError> {
        let current = self.get_balance(storage, binding)?;
        let updated =
            current
                .checked_sub(amount)
                .map_err(|_| LockProxyError::InsufficientBalance {
                    current,
                    decrement: amount,
                })?;
        self.store_balance(storage, binding, updated)?;
        Ok(())
    }

    /// Debit the custody ledger of `binding`, stopping at zero.
    ///
    /// Under mint/burn the ledger is bookkeeping only: inbound transfers of
    /// remote-native assets are minted here and were never locked.
    pub fn settle_balance(
        &self,
        storage: &mut dyn Storage,
        binding: &Binding,
        amount: Uint256,
    ) -> StdResult<()> {
        let current = self.get_balance(storage, binding)?;
        self.store_balance(storage, binding, current.saturating_sub(amount))
    }

    pub fn get_nonce(&self, storage: &dyn Storage) -> StdResult<Uint256> {
        Ok(NONCE.may_load(storage)?.unwrap_or_default())
    }

    pub fn set_nonce(&self, storage: &mut dyn Storage, nonce: Uint256) -> StdResult<()> {
        NONCE.save(storage, &nonce)
    }

    /// Increment and persist the nonce, returning the new value.
    pub(crate) fn next_nonce(&self, storage: &mut dyn Storage) -> StdResult<Uint256> {
        let nonce = self
            .get_nonce(storage)?
            .checked_add(Uint256::one())
            .map_err(cosmwasm_std::StdError::from)?;
        self.set_nonce(storage, nonce)?;
        Ok(nonce)
    }
}
