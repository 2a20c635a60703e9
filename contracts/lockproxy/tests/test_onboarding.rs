//! Integration tests for coin onboarding.
//!
//! Tests `CreateCoinAndDelegateToProxy` under both versions, its rejection
//! rules and the outbound `registerAsset` call, plus the permanently disabled
//! inbound `RegisterAsset`.

mod helpers;

use ::common::{Coin, RegisterAssetTxArgs};
use cosmwasm_std::{Binary, CanonicalAddr, Uint256};

use lockproxy::expected::CrossChainManager;
use lockproxy::msg::{ExecuteMsg, SudoMsg};
use lockproxy::LockProxyError;

use crate::helpers::{
    addr, binding_of, remote_asset, remote_proxy, Suite, DENOM, REMOTE_CHAIN_ID,
};

// ============================================================================
// Test Setup
// ============================================================================

fn setup(version: u64) -> (Suite, CanonicalAddr) {
    let mut suite = Suite::new(version);
    let alice = addr("alice");
    suite.create_lock_proxy(&alice);
    (suite, alice)
}

fn create_coin(owner: &CanonicalAddr, denom: &str, amount: u128) -> ExecuteMsg {
    ExecuteMsg::CreateCoinAndDelegateToProxy {
        coin: Coin::new(amount, denom),
        lock_proxy: Binary::from(owner.as_slice()),
        native_chain_id: REMOTE_CHAIN_ID,
        native_lock_proxy: remote_proxy(),
        native_asset: remote_asset(),
    }
}

// ============================================================================
// Create Coin Tests
// ============================================================================

#[test]
fn test_legacy_onboarding_mints_initial_supply() {
    let (mut suite, alice) = setup(0);

    let res = suite.execute(&alice, create_coin(&alice, DENOM, 1000)).unwrap();

    assert_eq!(suite.custody(), Uint256::from(1000u128));
    assert_eq!(suite.supply(), Uint256::from(1000u128));
    assert_eq!(suite.ledger(&binding_of(&alice)), Uint256::from(1000u128));
    assert_eq!(
        suite.ccm.denom_creator(&suite.storage, DENOM).unwrap(),
        Some(alice.clone())
    );

    let event = res
        .events
        .iter()
        .find(|e| e.ty == "create_and_delegate_coin_to_proxy")
        .unwrap();
    assert!(event
        .attributes
        .iter()
        .any(|a| a.key == "amount" && a.value == "1000"));
}

#[test]
fn test_onboarding_emits_register_asset() {
    let (mut suite, alice) = setup(1);
    suite.execute(&alice, create_coin(&alice, DENOM, 0)).unwrap();

    let tx = suite.last_tx();
    assert_eq!(tx.method, "registerAsset");
    assert_eq!(tx.to_chain_id, REMOTE_CHAIN_ID);
    assert_eq!(tx.from_contract, Binary::from(alice.as_slice()));
    assert_eq!(tx.to_contract, remote_proxy());

    let args = RegisterAssetTxArgs::from_bytes(&tx.args).unwrap();
    assert_eq!(args.asset_hash, DENOM.as_bytes().to_vec());
    assert_eq!(args.native_asset_hash, remote_asset().to_vec());
}

#[test]
fn test_onboarding_requires_zero_supply_from_version_one() {
    let (mut suite, alice) = setup(1);
    let before = suite.dump();

    let err = suite
        .execute(&alice, create_coin(&alice, DENOM, 5))
        .unwrap_err();
    assert_eq!(
        err,
        LockProxyError::NonZeroInitialSupply {
            amount: Uint256::from(5u128)
        }
    );
    assert_eq!(suite.dump(), before);
}

#[test]
fn test_onboarding_rejects_existing_denom() {
    let (mut suite, alice) = setup(1);
    suite.execute(&alice, create_coin(&alice, DENOM, 0)).unwrap();

    let bob = addr("bob");
    suite.create_lock_proxy(&bob);
    let err = suite.execute(&bob, create_coin(&bob, DENOM, 0)).unwrap_err();
    assert_eq!(
        err,
        LockProxyError::DenomAlreadyExists {
            denom: DENOM.to_string()
        }
    );
}

#[test]
fn test_onboarding_rejects_invalid_denom() {
    let (mut suite, alice) = setup(1);
    for denom in ["", "1abc", "has space"] {
        let err = suite
            .execute(&alice, create_coin(&alice, denom, 0))
            .unwrap_err();
        assert_eq!(
            err,
            LockProxyError::InvalidDenom {
                denom: denom.to_string()
            }
        );
    }
}

#[test]
fn test_onboarding_requires_lock_proxy() {
    let mut suite = Suite::new(1);
    let carol = addr("carol");

    let err = suite
        .execute(&carol, create_coin(&carol, DENOM, 0))
        .unwrap_err();
    assert!(matches!(err, LockProxyError::NotCreated { .. }));
    assert_eq!(suite.ccm.denom_creator(&suite.storage, DENOM).unwrap(), None);
}

#[test]
fn test_onboarding_only_checks_proxy_existence() {
    let (mut suite, alice) = setup(1);
    let mallory = addr("mallory");

    let err = suite
        .execute(&mallory, create_coin(&mallory, DENOM, 0))
        .unwrap_err();
    assert!(matches!(err, LockProxyError::NotCreated { .. }));

    // Any account may delegate a new coin to an existing proxy
    suite.execute(&mallory, create_coin(&alice, DENOM, 0)).unwrap();
    assert_eq!(
        suite.ccm.denom_creator(&suite.storage, DENOM).unwrap(),
        Some(mallory)
    );
}

#[test]
fn test_onboarding_emit_failed() {
    let mut suite = Suite::with_failing_ccm(0);
    let alice = addr("alice");
    suite.create_lock_proxy(&alice);
    let before = suite.dump();

    let err = suite
        .execute(&alice, create_coin(&alice, DENOM, 1000))
        .unwrap_err();
    assert!(matches!(err, LockProxyError::EmitFailed { .. }));
    assert_eq!(suite.dump(), before);
}

// ============================================================================
// Register Asset Tests
// ============================================================================

#[test]
fn test_register_asset_is_disallowed() {
    let (mut suite, alice) = setup(1);
    let args = RegisterAssetTxArgs {
        asset_hash: remote_asset().to_vec(),
        native_asset_hash: DENOM.as_bytes().to_vec(),
    };

    let err = suite
        .sudo(SudoMsg::RegisterAsset {
            from_chain_id: REMOTE_CHAIN_ID,
            from_contract: remote_proxy(),
            to_contract: Binary::from(alice.as_slice()),
            args: Binary::from(args.to_bytes()),
        })
        .unwrap_err();
    assert_eq!(err, LockProxyError::RegistrationDisallowed);
}
