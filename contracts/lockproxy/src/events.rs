//! Event types and attribute keys emitted by the keeper

pub const EVENT_TYPE_CREATE_LOCK_PROXY: &str = "create_lock_proxy";
pub const EVENT_TYPE_CREATE_AND_DELEGATE_COIN_TO_PROXY: &str = "create_and_delegate_coin_to_proxy";
pub const EVENT_TYPE_LOCK: &str = "lock";
pub const EVENT_TYPE_UNLOCK: &str = "unlock";

pub const ATTRIBUTE_KEY_CREATOR: &str = "creator";
pub const ATTRIBUTE_KEY_PROXY_HASH: &str = "lock_proxy_hash";
pub const ATTRIBUTE_KEY_SOURCE_ASSET_DENOM: &str = "source_asset_denom";
pub const ATTRIBUTE_KEY_SOURCE_ASSET_HASH: &str = "source_asset_hash";
pub const ATTRIBUTE_KEY_FROM_CONTRACT_HASH: &str = "from_contract_hash";
pub const ATTRIBUTE_KEY_TO_CHAIN_ID: &str = "to_chain_id";
pub const ATTRIBUTE_KEY_TO_CHAIN_PROXY_HASH: &str = "to_chain_proxy_hash";
pub const ATTRIBUTE_KEY_TO_CHAIN_ASSET_HASH: &str = "to_chain_asset_hash";
pub const ATTRIBUTE_KEY_FROM_ADDRESS: &str = "from_address";
pub const ATTRIBUTE_KEY_TO_ADDRESS: &str = "to_address";
pub const ATTRIBUTE_KEY_AMOUNT: &str = "amount";
pub const ATTRIBUTE_KEY_LOCK_PROXY: &str = "lock_proxy";
pub const ATTRIBUTE_KEY_FEE_AMOUNT: &str = "fee_amount";
pub const ATTRIBUTE_KEY_FEE_ADDRESS: &str = "fee_address";
pub const ATTRIBUTE_KEY_NONCE: &str = "nonce";

/// Outbound method invoked on the remote proxy by a lock
pub const METHOD_UNLOCK: &str = "unlock";

/// Outbound method announcing a newly onboarded asset
pub const METHOD_REGISTER_ASSET: &str = "registerAsset";
