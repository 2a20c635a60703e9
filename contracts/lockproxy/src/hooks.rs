//! Observers notified after a successful unlock.
//!
//! Hooks run synchronously in registration order. A failing hook is logged
//! and skipped; it never fails the unlock that triggered it.

use common::Coin;
use cosmwasm_std::{CanonicalAddr, StdResult, Storage};
use tracing::warn;

use crate::error::LockProxyError;

pub trait LockProxyHooks {
    /// Unique name, used to reject double registration
    fn name(&self) -> &str;

    fn after_unlock(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coins: &[Coin],
    ) -> StdResult<()>;
}

/// Ordered set of hooks from subscribing modules
#[derive(Default)]
pub struct MultiLockProxyHooks {
    hooks: Vec<Box<dyn LockProxyHooks>>,
}

impl MultiLockProxyHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook; names must be unique.
    pub fn with(mut self, hook: Box<dyn LockProxyHooks>) -> Result<Self, LockProxyError> {
        if self.hooks.iter().any(|h| h.name() == hook.name()) {
            return Err(LockProxyError::DuplicateHook {
                name: hook.name().to_string(),
            });
        }
        self.hooks.push(hook);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    pub fn after_unlock(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coins: &[Coin],
    ) {
        for hook in &self.hooks {
            if let Err(err) = hook.after_unlock(storage, from, to, coins) {
                warn!(hook = hook.name(), error = %err, "after_unlock hook failed");
            }
        }
    }
}
