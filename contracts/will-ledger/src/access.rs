//! Admin and notary capabilities. Both are flat predicates over `Address`;
//! an admin is not implicitly a notary.

use shared::errors::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{get_admin, is_notary, set_notary};

pub fn is_admin(env: &Env, principal: &Address) -> bool {
    get_admin(env).map_or(false, |admin| admin == *principal)
}

/// Caller must be the stored admin and authorize the call
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = get_admin(env)?;
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

/// Caller must be a registered notary and authorize the call
pub fn require_notary(env: &Env, caller: &Address) -> Result<(), Error> {
    if !is_notary(env, caller) {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

/// Returns false when the notary was already registered
pub fn add_notary(env: &Env, notary: &Address) -> bool {
    if is_notary(env, notary) {
        return false;
    }
    set_notary(env, notary);
    true
}
