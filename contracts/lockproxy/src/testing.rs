//! Unit test fixtures

use crate::bank::StoreBank;
use crate::ccm::StoreCrossChainManager;
use crate::keeper::Keeper;
use crate::state::MODULE_NAME;

/// Keeper over the storage-backed bank and cross-chain manager
pub fn test_keeper() -> Keeper {
    let bank = StoreBank::new([MODULE_NAME]);
    Keeper::new(
        Box::new(bank.clone()),
        Box::new(bank),
        Box::new(StoreCrossChainManager::new()),
    )
    .unwrap()
}
