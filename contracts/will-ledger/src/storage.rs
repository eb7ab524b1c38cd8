use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::errors::Error;
use shared::types::Will;
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage keys for the will ledger
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address, set once
    Admin,
    /// Token the deposits are held in
    Token,
    /// Credential contract issuing proof of an active will
    CredentialContract,
    /// Notary membership flag
    Notary(Address),
    /// Testators whose live will a notary registered
    NotaryWills(Address),
    /// Will record keyed by testator
    Will(Address),
    /// Testators holding an unpaid claimable entry for a heir, one per entry
    HeirClaims(Address),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ==================== Configuration ====================

/// Check if admin is set
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn set_credential_contract(env: &Env, credential: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::CredentialContract, credential);
}

pub fn get_credential_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::CredentialContract)
}

// ==================== Notaries ====================

pub fn is_notary(env: &Env, principal: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Notary(principal.clone()))
}

pub fn set_notary(env: &Env, notary: &Address) {
    let key = DataKey::Notary(notary.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn get_notary_wills(env: &Env, notary: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::NotaryWills(notary.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn add_notary_will(env: &Env, notary: &Address, testator: &Address) {
    let mut testators = get_notary_wills(env, notary);
    testators.push_back(testator.clone());

    let key = DataKey::NotaryWills(notary.clone());
    env.storage().persistent().set(&key, &testators);
    bump_persistent(env, &key);
}

pub fn remove_notary_will(env: &Env, notary: &Address, testator: &Address) {
    let mut testators = get_notary_wills(env, notary);
    if let Some(index) = testators.first_index_of(testator) {
        testators.remove(index);
    }

    let key = DataKey::NotaryWills(notary.clone());
    if testators.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &testators);
        bump_persistent(env, &key);
    }
}

// ==================== Wills ====================

pub fn get_will(env: &Env, testator: &Address) -> Option<Will> {
    env.storage()
        .persistent()
        .get(&DataKey::Will(testator.clone()))
}

pub fn set_will(env: &Env, will: &Will) {
    let key = DataKey::Will(will.testator.clone());
    env.storage().persistent().set(&key, will);
    bump_persistent(env, &key);
}

pub fn remove_will(env: &Env, testator: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Will(testator.clone()));
}

// ==================== Heir claims ====================

pub fn get_heir_claims(env: &Env, heir: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::HeirClaims(heir.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn add_heir_claim(env: &Env, heir: &Address, testator: &Address) {
    let mut testators = get_heir_claims(env, heir);
    testators.push_back(testator.clone());

    let key = DataKey::HeirClaims(heir.clone());
    env.storage().persistent().set(&key, &testators);
    bump_persistent(env, &key);
}

/// Drop one pending entry of `heir` against `testator`
pub fn remove_heir_claim(env: &Env, heir: &Address, testator: &Address) {
    let mut testators = get_heir_claims(env, heir);
    if let Some(index) = testators.first_index_of(testator) {
        testators.remove(index);
    }

    let key = DataKey::HeirClaims(heir.clone());
    if testators.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &testators);
        bump_persistent(env, &key);
    }
}
