use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::errors::Error;
use shared::types::Credential;
use soroban_sdk::{contracttype, Address, Env, String};

/// Storage keys for the credential contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Will ledger allowed to issue and revoke
    Engine,
    Name,
    Symbol,
    BaseUri,
    /// Number of credentials currently issued
    Supply,
    /// Credential keyed by owner (the token id is the owner's address)
    Credential(Address),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_engine(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Engine)
}

pub fn set_engine(env: &Env, engine: &Address) {
    env.storage().instance().set(&DataKey::Engine, engine);
}

pub fn get_engine(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Engine)
        .ok_or(Error::NotInitialized)
}

pub fn set_metadata(env: &Env, name: &String, symbol: &String, base_uri: &String) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Name, name);
    instance.set(&DataKey::Symbol, symbol);
    instance.set(&DataKey::BaseUri, base_uri);
}

pub fn get_metadata(env: &Env, key: DataKey) -> Result<String, Error> {
    env.storage()
        .instance()
        .get(&key)
        .ok_or(Error::NotInitialized)
}

pub fn get_supply(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Supply).unwrap_or(0)
}

pub fn set_supply(env: &Env, supply: u32) {
    env.storage().instance().set(&DataKey::Supply, &supply);
}

pub fn has_credential(env: &Env, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Credential(owner.clone()))
}

pub fn get_credential(env: &Env, owner: &Address) -> Result<Credential, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Credential(owner.clone()))
        .ok_or(Error::NotFound)
}

pub fn set_credential(env: &Env, credential: &Credential) {
    let key = DataKey::Credential(credential.owner.clone());
    env.storage().persistent().set(&key, credential);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_credential(env: &Env, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Credential(owner.clone()));
}
