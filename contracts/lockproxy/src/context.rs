//! Per-call execution context
//!
//! Carries the storage of the running call, the supply-management version
//! read once at the start of the call, and the events emitted so far.

use cosmwasm_std::{Event, Storage};

use crate::state::MINT_BURN_VERSION;

pub struct Context<'a> {
    storage: &'a mut dyn Storage,
    version: u64,
    events: Vec<Event>,
}

impl<'a> Context<'a> {
    pub fn new(storage: &'a mut dyn Storage, version: u64) -> Self {
        Self {
            storage,
            version,
            events: vec![],
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether lock burns and unlock mints
    pub fn mints_and_burns(&self) -> bool {
        self.version >= MINT_BURN_VERSION
    }

    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    pub fn storage_mut(&mut self) -> &mut dyn Storage {
        &mut *self.storage
    }

    pub fn emit_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
