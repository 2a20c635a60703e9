//! Storage-backed bank and supply
//!
//! A reference implementation of [`BankKeeper`] and [`SupplyKeeper`] that
//! keeps balances and total supply in the same store as the keeper, so a
//! [`crate::store::CacheStore`] transaction covers fund movements as well.

use common::Coin;
use cosmwasm_std::{CanonicalAddr, StdResult, Storage, Uint256};
use cw_storage_plus::Map;
use tiny_keccak::{Hasher, Keccak};

use crate::expected::{BankError, BankKeeper, SupplyKeeper};

/// Balance per (address, denom)
pub const BANK_BALANCES: Map<(&[u8], &str), Uint256> = Map::new("bank_balances");

/// Total supply per denom
pub const BANK_SUPPLY: Map<&str, Uint256> = Map::new("bank_supply");

/// Module account address: first 20 bytes of keccak256("module/" + name)
pub fn module_account(name: &str) -> CanonicalAddr {
    let mut hasher = Keccak::v256();
    hasher.update(b"module/");
    hasher.update(name.as_bytes());
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    CanonicalAddr::from(&output[..20])
}

#[derive(Clone, Debug, Default)]
pub struct StoreBank {
    modules: Vec<(String, CanonicalAddr)>,
}

impl StoreBank {
    /// Bank with one module account per name
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let modules = modules
            .into_iter()
            .map(|name| {
                let name = name.into();
                let address = module_account(&name);
                (name, address)
            })
            .collect();
        Self { modules }
    }

    pub fn balance(&self, storage: &dyn Storage, address: &CanonicalAddr, denom: &str) -> StdResult<Uint256> {
        Ok(BANK_BALANCES
            .may_load(storage, (address.as_slice(), denom))?
            .unwrap_or_default())
    }

    pub fn supply(&self, storage: &dyn Storage, denom: &str) -> StdResult<Uint256> {
        Ok(BANK_SUPPLY.may_load(storage, denom)?.unwrap_or_default())
    }

    /// Create `coins` directly in an account, growing the supply.
    pub fn fund_account(
        &self,
        storage: &mut dyn Storage,
        address: &CanonicalAddr,
        coins: &[Coin],
    ) -> Result<(), BankError> {
        for coin in coins.iter().filter(|c| !c.amount.is_zero()) {
            self.add_supply(storage, coin)?;
            self.credit(storage, address, coin)?;
        }
        Ok(())
    }

    fn module(&self, name: &str) -> Result<&CanonicalAddr, BankError> {
        self.modules
            .iter()
            .find(|(module, _)| module == name)
            .map(|(_, address)| address)
            .ok_or_else(|| BankError::UnknownModule {
                module: name.to_string(),
            })
    }

    fn credit(&self, storage: &mut dyn Storage, address: &CanonicalAddr, coin: &Coin) -> Result<(), BankError> {
        if address.is_empty() {
            return Err(BankError::EmptyAddress);
        }
        let key = (address.as_slice(), coin.denom.as_str());
        let current = BANK_BALANCES.may_load(storage, key)?.unwrap_or_default();
        let updated = current
            .checked_add(coin.amount)
            .map_err(|_| BankError::Overflow {
                denom: coin.denom.clone(),
            })?;
        BANK_BALANCES.save(storage, key, &updated)?;
        Ok(())
    }

    fn debit(&self, storage: &mut dyn Storage, address: &CanonicalAddr, coin: &Coin) -> Result<(), BankError> {
        if address.is_empty() {
            return Err(BankError::EmptyAddress);
        }
        let key = (address.as_slice(), coin.denom.as_str());
        let available = BANK_BALANCES.may_load(storage, key)?.unwrap_or_default();
        if available < coin.amount {
            return Err(BankError::InsufficientFunds {
                address: hex::encode(address.as_slice()),
                denom: coin.denom.clone(),
                available,
                required: coin.amount,
            });
        }
        let updated = available - coin.amount;
        if updated.is_zero() {
            BANK_BALANCES.remove(storage, key);
        } else {
            BANK_BALANCES.save(storage, key, &updated)?;
        }
        Ok(())
    }

    fn add_supply(&self, storage: &mut dyn Storage, coin: &Coin) -> Result<(), BankError> {
        let current = self.supply(storage, &coin.denom)?;
        let updated = current
            .checked_add(coin.amount)
            .map_err(|_| BankError::Overflow {
                denom: coin.denom.clone(),
            })?;
        BANK_SUPPLY.save(storage, &coin.denom, &updated)?;
        Ok(())
    }

    fn sub_supply(&self, storage: &mut dyn Storage, coin: &Coin) -> Result<(), BankError> {
        let current = self.supply(storage, &coin.denom)?;
        let updated = current
            .checked_sub(coin.amount)
            .map_err(|_| BankError::Overflow {
                denom: coin.denom.clone(),
            })?;
        BANK_SUPPLY.save(storage, &coin.denom, &updated)?;
        Ok(())
    }

    fn transfer(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coins: &[Coin],
    ) -> Result<(), BankError> {
        if to.is_empty() {
            return Err(BankError::EmptyAddress);
        }
        for coin in coins.iter().filter(|c| !c.amount.is_zero()) {
            self.debit(storage, from, coin)?;
            self.credit(storage, to, coin)?;
        }
        Ok(())
    }
}

impl BankKeeper for StoreBank {
    fn send_coins(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coins: &[Coin],
    ) -> Result<(), BankError> {
        self.transfer(storage, from, to, coins)
    }
}

impl SupplyKeeper for StoreBank {
    fn module_address(&self, module: &str) -> Option<CanonicalAddr> {
        self.module(module).ok().cloned()
    }

    fn send_coins_from_account_to_module(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        module: &str,
        coins: &[Coin],
    ) -> Result<(), BankError> {
        let to = self.module(module)?.clone();
        self.transfer(storage, from, &to, coins)
    }

    fn send_coins_from_module_to_account(
        &self,
        storage: &mut dyn Storage,
        module: &str,
        to: &CanonicalAddr,
        coins: &[Coin],
    ) -> Result<(), BankError> {
        let from = self.module(module)?.clone();
        self.transfer(storage, &from, to, coins)
    }

    fn mint_coins(&self, storage: &mut dyn Storage, module: &str, coins: &[Coin]) -> Result<(), BankError> {
        let address = self.module(module)?.clone();
        self.fund_account(storage, &address, coins)
    }

    fn burn_coins(&self, storage: &mut dyn Storage, module: &str, coins: &[Coin]) -> Result<(), BankError> {
        let address = self.module(module)?.clone();
        for coin in coins.iter().filter(|c| !c.amount.is_zero()) {
            self.debit(storage, &address, coin)?;
            self.sub_supply(storage, coin)?;
        }
        Ok(())
    }
}
