//! Integration tests for lock proxy creation and the binding registry.
//!
//! Tests lock proxy creation and duplicate rejection, operator lookup,
//! binding registration with its chain index, and paginated registry queries.

mod helpers;

use cosmwasm_std::{from_json, Binary};

use lockproxy::msg::{
    ExecuteMsg, HasChainBindingResponse, IsRegisteredResponse, LockProxyResponse, QueryMsg,
    RegistriesResponse,
};
use lockproxy::{contract, Binding, LockProxyError};

use crate::helpers::{addr, remote_asset, remote_proxy, Suite, REMOTE_CHAIN_ID};

// ============================================================================
// Test Setup
// ============================================================================

fn setup() -> Suite {
    Suite::new(1)
}

// ============================================================================
// Lock Proxy Tests
// ============================================================================

#[test]
fn test_create_lock_proxy() {
    let mut suite = setup();
    let alice = addr("alice");

    let res = suite.execute(&alice, ExecuteMsg::CreateLockProxy {}).unwrap();
    assert!(res
        .attributes
        .iter()
        .any(|a| a.key == "action" && a.value == "create_lock_proxy"));
    let event = res
        .events
        .iter()
        .find(|e| e.ty == "create_lock_proxy")
        .unwrap();
    assert!(event
        .attributes
        .iter()
        .any(|a| a.key == "creator" && a.value == hex::encode(alice.as_slice())));

    assert!(suite
        .keeper
        .ensure_lock_proxy_exist(&suite.storage, alice.as_slice())
        .unwrap());
    assert_eq!(
        suite
            .keeper
            .get_lock_proxy_by_operator(&suite.storage, alice.as_slice())
            .unwrap(),
        Some(Binary::from(alice.as_slice()))
    );
}

#[test]
fn test_create_lock_proxy_twice_fails() {
    let mut suite = setup();
    let alice = addr("alice");
    suite.create_lock_proxy(&alice);

    let err = suite
        .execute(&alice, ExecuteMsg::CreateLockProxy {})
        .unwrap_err();
    assert_eq!(
        err,
        LockProxyError::LockProxyAlreadyExists {
            creator: hex::encode(alice.as_slice())
        }
    );
}

#[test]
fn test_lock_proxies_are_per_creator() {
    let mut suite = setup();
    suite.create_lock_proxy(&addr("alice"));
    suite.create_lock_proxy(&addr("bob"));

    assert!(!suite
        .keeper
        .ensure_lock_proxy_exist(&suite.storage, b"carol")
        .unwrap());
}

#[test]
fn test_query_lock_proxy() {
    let mut suite = setup();
    let alice = addr("alice");
    suite.create_lock_proxy(&alice);

    let res: LockProxyResponse = from_json(
        contract::query(
            &suite.storage,
            &suite.keeper,
            QueryMsg::LockProxy {
                operator: Binary::from(alice.as_slice()),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(res.lock_proxy, Some(Binary::from(alice.as_slice())));

    let res: LockProxyResponse = from_json(
        contract::query(
            &suite.storage,
            &suite.keeper,
            QueryMsg::LockProxy {
                operator: Binary::from(b"nobody".as_slice()),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(res.lock_proxy, None);
}

// ============================================================================
// Binding Tests
// ============================================================================

#[test]
fn test_onboarding_registers_binding_and_chain_index() {
    let mut suite = setup();
    let alice = addr("alice");
    let binding = suite.onboard(&alice, 0);

    assert!(suite
        .keeper
        .asset_is_registered(&suite.storage, &binding)
        .unwrap());
    assert!(suite
        .keeper
        .contain_to_contract_addr(&suite.storage, alice.as_slice(), REMOTE_CHAIN_ID)
        .unwrap());
    assert!(!suite
        .keeper
        .contain_to_contract_addr(&suite.storage, alice.as_slice(), REMOTE_CHAIN_ID + 1)
        .unwrap());
}

#[test]
fn test_register_binding_twice_fails() {
    let mut suite = setup();
    let alice = addr("alice");
    let binding = suite.onboard(&alice, 0);
    let before = suite.dump();

    let mut ctx = suite.keeper.new_context(&mut suite.storage).unwrap();
    let err = suite.keeper.register_binding(&mut ctx, &binding).unwrap_err();
    assert_eq!(
        err,
        LockProxyError::BindingAlreadyExists {
            binding: binding.to_string()
        }
    );
    assert_eq!(suite.dump(), before);
}

#[test]
fn test_query_binding_and_chain_index() {
    let mut suite = setup();
    let alice = addr("alice");
    let binding = suite.onboard(&alice, 0);

    let res: IsRegisteredResponse = from_json(
        contract::query(
            &suite.storage,
            &suite.keeper,
            QueryMsg::IsRegistered { binding },
        )
        .unwrap(),
    )
    .unwrap();
    assert!(res.registered);

    let other = Binding::new(
        alice.as_slice(),
        b"Y",
        REMOTE_CHAIN_ID,
        &remote_proxy(),
        &remote_asset(),
    );
    let res: IsRegisteredResponse = from_json(
        contract::query(
            &suite.storage,
            &suite.keeper,
            QueryMsg::IsRegistered { binding: other },
        )
        .unwrap(),
    )
    .unwrap();
    assert!(!res.registered);

    let res: HasChainBindingResponse = from_json(
        contract::query(
            &suite.storage,
            &suite.keeper,
            QueryMsg::HasChainBinding {
                lock_proxy: Binary::from(alice.as_slice()),
                chain_id: REMOTE_CHAIN_ID,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert!(res.bound);
}

// ============================================================================
// Registry Query Tests
// ============================================================================

fn query_registries(suite: &Suite, start_after: Option<Binding>, limit: Option<u32>) -> Vec<Binding> {
    let res: RegistriesResponse = from_json(
        contract::query(
            &suite.storage,
            &suite.keeper,
            QueryMsg::Registries { start_after, limit },
        )
        .unwrap(),
    )
    .unwrap();
    res.registries
}

#[test]
fn test_query_registries_paginates() {
    let mut suite = setup();
    for i in 0..12 {
        suite.onboard_denom(&addr(&format!("owner{i:02}")), &format!("coin{i}"), 0);
    }

    // Default page is 10
    let first = query_registries(&suite, None, None);
    assert_eq!(first.len(), 10);

    let rest = query_registries(&suite, first.last().cloned(), Some(10));
    assert_eq!(rest.len(), 2);
    assert!(rest.iter().all(|b| !first.contains(b)));

    // Oversized limits are clamped
    let all = query_registries(&suite, None, Some(100));
    assert_eq!(all.len(), 12);
}

#[test]
fn test_query_registries_empty() {
    let suite = setup();
    assert!(query_registries(&suite, None, None).is_empty());
}
