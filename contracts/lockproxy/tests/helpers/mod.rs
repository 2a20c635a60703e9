//! Shared fixtures for the LockProxy integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use common::{Coin, TxArgs};
use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::{Binary, CanonicalAddr, Response, StdError, StdResult, Storage, Uint256};

use lockproxy::bank::module_account;
use lockproxy::ccm::CrossChainTx;
use lockproxy::expected::CrossChainManager;
use lockproxy::msg::{ExecuteMsg, SudoMsg};
use lockproxy::state::Params;
use lockproxy::{
    contract, Binding, Keeper, LockProxyError, LockProxyHooks, LockRequest, MultiLockProxyHooks,
    StoreBank, StoreCrossChainManager, MODULE_NAME,
};

pub const REMOTE_CHAIN_ID: u64 = 5;
pub const DENOM: &str = "X";

pub fn addr(name: &str) -> CanonicalAddr {
    CanonicalAddr::from(name.as_bytes())
}

pub fn remote_proxy() -> Binary {
    Binary::from([0xAA; 20].as_slice())
}

pub fn remote_asset() -> Binary {
    Binary::from([0xBB; 20].as_slice())
}

/// Binding created by [`Suite::onboard`] for `owner`
pub fn binding_of(owner: &CanonicalAddr) -> Binding {
    Binding::new(
        owner.as_slice(),
        DENOM.as_bytes(),
        REMOTE_CHAIN_ID,
        &remote_proxy(),
        &remote_asset(),
    )
}

// ============================================================================
// Collaborator doubles
// ============================================================================

/// Cross-chain manager whose outbound queue is down
pub struct FailingCcm {
    inner: StoreCrossChainManager,
}

impl FailingCcm {
    pub fn new() -> Self {
        Self {
            inner: StoreCrossChainManager::new(),
        }
    }
}

impl CrossChainManager for FailingCcm {
    fn create_cross_chain_tx(
        &self,
        _storage: &mut dyn Storage,
        _signer: &CanonicalAddr,
        _to_chain_id: u64,
        _from_contract: &[u8],
        _to_contract: &[u8],
        _method: &str,
        _args: &[u8],
    ) -> StdResult<()> {
        Err(StdError::generic_err("outbound queue unavailable"))
    }

    fn denom_creator(&self, storage: &dyn Storage, denom: &str) -> StdResult<Option<CanonicalAddr>> {
        self.inner.denom_creator(storage, denom)
    }

    fn set_denom_creator(
        &self,
        storage: &mut dyn Storage,
        denom: &str,
        creator: &CanonicalAddr,
    ) -> StdResult<()> {
        self.inner.set_denom_creator(storage, denom, creator)
    }
}

pub type UnlockRecord = (CanonicalAddr, CanonicalAddr, Vec<Coin>);

/// Hook that records every notification it receives
pub struct RecordingHook {
    pub name: String,
    pub calls: Rc<RefCell<Vec<UnlockRecord>>>,
    pub fail: bool,
}

impl RecordingHook {
    pub fn new(name: &str, fail: bool) -> (Self, Rc<RefCell<Vec<UnlockRecord>>>) {
        let calls = Rc::new(RefCell::new(vec![]));
        (
            Self {
                name: name.to_string(),
                calls: calls.clone(),
                fail,
            },
            calls,
        )
    }
}

impl LockProxyHooks for RecordingHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn after_unlock(
        &self,
        _storage: &mut dyn Storage,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coins: &[Coin],
    ) -> StdResult<()> {
        self.calls
            .borrow_mut()
            .push((from.clone(), to.clone(), coins.to_vec()));
        if self.fail {
            return Err(StdError::generic_err("hook failed"));
        }
        Ok(())
    }
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub storage: MockStorage,
    pub keeper: Keeper,
    pub bank: StoreBank,
    pub ccm: StoreCrossChainManager,
}

impl Suite {
    pub fn new(version: u64) -> Self {
        Self::build(version, Box::new(StoreCrossChainManager::new()), None)
    }

    pub fn with_failing_ccm(version: u64) -> Self {
        Self::build(version, Box::new(FailingCcm::new()), None)
    }

    pub fn with_hooks(version: u64, hooks: MultiLockProxyHooks) -> Self {
        Self::build(version, Box::new(StoreCrossChainManager::new()), Some(hooks))
    }

    fn build(
        version: u64,
        ccm: Box<dyn CrossChainManager>,
        hooks: Option<MultiLockProxyHooks>,
    ) -> Self {
        let bank = StoreBank::new([MODULE_NAME]);
        let mut keeper = Keeper::new(Box::new(bank.clone()), Box::new(bank.clone()), ccm).unwrap();
        if let Some(hooks) = hooks {
            keeper = keeper.with_hooks(hooks).unwrap();
        }
        let mut storage = MockStorage::new();
        keeper.set_params(&mut storage, &Params { version }).unwrap();

        Self {
            storage,
            keeper,
            bank,
            ccm: StoreCrossChainManager::new(),
        }
    }

    pub fn execute(
        &mut self,
        sender: &CanonicalAddr,
        msg: ExecuteMsg,
    ) -> Result<Response, LockProxyError> {
        contract::execute(&mut self.storage, &self.keeper, sender, msg)
    }

    pub fn sudo(&mut self, msg: SudoMsg) -> Result<Response, LockProxyError> {
        contract::sudo(&mut self.storage, &self.keeper, msg)
    }

    pub fn create_lock_proxy(&mut self, owner: &CanonicalAddr) {
        self.execute(owner, ExecuteMsg::CreateLockProxy {}).unwrap();
    }

    /// Create `owner`'s lock proxy and onboard [`DENOM`] through it
    pub fn onboard(&mut self, owner: &CanonicalAddr, amount: u128) -> Binding {
        self.onboard_denom(owner, DENOM, amount)
    }

    pub fn onboard_denom(&mut self, owner: &CanonicalAddr, denom: &str, amount: u128) -> Binding {
        self.create_lock_proxy(owner);
        self.execute(
            owner,
            ExecuteMsg::CreateCoinAndDelegateToProxy {
                coin: Coin::new(amount, denom),
                lock_proxy: Binary::from(owner.as_slice()),
                native_chain_id: REMOTE_CHAIN_ID,
                native_lock_proxy: remote_proxy(),
                native_asset: remote_asset(),
            },
        )
        .unwrap();
        Binding::new(
            owner.as_slice(),
            denom.as_bytes(),
            REMOTE_CHAIN_ID,
            &remote_proxy(),
            &remote_asset(),
        )
    }

    /// Create `owner`'s lock proxy and register the [`DENOM`] binding without
    /// going through the cross-chain manager
    pub fn bind(&mut self, owner: &CanonicalAddr) -> Binding {
        self.create_lock_proxy(owner);
        let binding = binding_of(owner);
        let mut ctx = self.keeper.new_context(&mut self.storage).unwrap();
        self.keeper.register_binding(&mut ctx, &binding).unwrap();
        binding
    }

    /// Last outbound call recorded by the cross-chain manager
    pub fn last_tx(&self) -> CrossChainTx {
        self.ccm.txs(&self.storage).unwrap().pop().unwrap()
    }

    pub fn fund(&mut self, account: &CanonicalAddr, amount: u128) {
        self.bank
            .fund_account(&mut self.storage, account, &[Coin::new(amount, DENOM)])
            .unwrap();
    }

    pub fn balance(&self, account: &CanonicalAddr) -> Uint256 {
        self.bank.balance(&self.storage, account, DENOM).unwrap()
    }

    pub fn custody(&self) -> Uint256 {
        self.balance(&module_account(MODULE_NAME))
    }

    pub fn supply(&self) -> Uint256 {
        self.bank.supply(&self.storage, DENOM).unwrap()
    }

    pub fn ledger(&self, binding: &Binding) -> Uint256 {
        self.keeper.get_balance(&self.storage, binding).unwrap()
    }

    pub fn nonce(&self) -> Uint256 {
        self.keeper.get_nonce(&self.storage).unwrap()
    }

    /// Snapshot of every key in storage, for atomicity checks
    pub fn dump(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.storage
            .range(None, None, cosmwasm_std::Order::Ascending)
            .collect()
    }
}

/// Lock of `value` [`DENOM`] through `proxy` to `to` on the remote chain, no fee
pub fn lock_request(proxy: &CanonicalAddr, to: &CanonicalAddr, value: u128) -> LockRequest {
    LockRequest {
        lock_proxy: Binary::from(proxy.as_slice()),
        source_asset_denom: DENOM.to_string(),
        to_chain_id: REMOTE_CHAIN_ID,
        to_chain_proxy_hash: remote_proxy(),
        to_chain_asset_hash: remote_asset(),
        to_address: Binary::from(to.as_slice()),
        value: Uint256::from(value),
        deduct_fee_in_lock: false,
        fee_amount: Uint256::zero(),
        fee_address: Binary::default(),
    }
}

/// Inbound transfer of `amount` [`DENOM`] from `from` on the remote chain to `to`
pub fn unlock_args(from: &CanonicalAddr, to: &CanonicalAddr, amount: u128, fee: u128, fee_address: &[u8]) -> TxArgs {
    TxArgs {
        from_asset_hash: remote_asset().to_vec(),
        to_asset_hash: DENOM.as_bytes().to_vec(),
        to_address: to.to_vec(),
        amount: Uint256::from(amount),
        fee_amount: Uint256::from(fee),
        fee_address: fee_address.to_vec(),
        from_address: from.to_vec(),
        nonce: Uint256::one(),
    }
}

pub fn unlock_msg(proxy: &CanonicalAddr, args: &TxArgs) -> SudoMsg {
    SudoMsg::Unlock {
        from_chain_id: REMOTE_CHAIN_ID,
        from_contract: remote_proxy(),
        to_contract: Binary::from(proxy.as_slice()),
        args: Binary::from(args.to_bytes()),
    }
}
