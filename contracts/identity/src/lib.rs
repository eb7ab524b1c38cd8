#![no_std]

use shared::{
    constants::{MAX_BASE_URI_LEN, STRKEY_LEN},
    credential::CredentialInterface,
    errors::Error,
    events::{CREDENTIAL_ISSUED, CREDENTIAL_REVOKED},
    types::Credential,
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, String};

mod storage;


use storage::*;

contractmeta!(key = "name", val = "Will Credential");

#[contract]
pub struct IdentityCredentialContract;

#[contractimpl]
impl IdentityCredentialContract {
    /// Bind the credential to the will ledger that may issue and revoke it
    ///
    /// # Arguments
    /// * `deployer` - Account deploying the credential; must authorize
    /// * `engine` - Address of the will ledger contract
    /// * `name` - Human readable collection name
    /// * `symbol` - Short collection symbol
    /// * `base_uri` - Prefix of every credential's metadata URI
    pub fn initialize(
        env: Env,
        deployer: Address,
        engine: Address,
        name: String,
        symbol: String,
        base_uri: String,
    ) -> Result<(), Error> {
        if has_engine(&env) {
            return Err(Error::AlreadyInitialized);
        }
        deployer.require_auth();

        if engine == env.current_contract_address() || base_uri.len() > MAX_BASE_URI_LEN {
            return Err(Error::InvalidInput);
        }

        set_engine(&env, &engine);
        set_metadata(&env, &name, &symbol, &base_uri);
        set_supply(&env, 0);
        bump_instance(&env);

        Ok(())
    }

    pub fn name(env: Env) -> Result<String, Error> {
        get_metadata(&env, DataKey::Name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        get_metadata(&env, DataKey::Symbol)
    }

    /// Metadata URI of a credential: the base URI followed by the owner's strkey
    pub fn token_uri(env: Env, token_id: Address) -> Result<String, Error> {
        let credential = get_credential(&env, &token_id)?;
        let base = get_metadata(&env, DataKey::BaseUri)?;
        let key = credential.token_id.to_string();

        let base_len = base.len() as usize;
        let key_len = key.len() as usize;
        if base_len > MAX_BASE_URI_LEN as usize || key_len > STRKEY_LEN as usize {
            return Err(Error::InvalidInput);
        }

        let mut buf = [0u8; (MAX_BASE_URI_LEN + STRKEY_LEN) as usize];
        base.copy_into_slice(&mut buf[..base_len]);
        key.copy_into_slice(&mut buf[base_len..base_len + key_len]);

        Ok(String::from_bytes(&env, &buf[..base_len + key_len]))
    }

    /// Number of credentials currently held
    pub fn total_supply(env: Env) -> u32 {
        get_supply(&env)
    }

    pub fn get_credential(env: Env, owner: Address) -> Result<Credential, Error> {
        get_credential(&env, &owner)
    }

    fn require_engine(env: &Env, engine: &Address) -> Result<(), Error> {
        let expected = get_engine(env)?;
        if *engine != expected {
            return Err(Error::NotEngineCaller);
        }
        engine.require_auth();
        Ok(())
    }
}

#[contractimpl]
impl CredentialInterface for IdentityCredentialContract {
    /// Issue the credential of `testator`
    ///
    /// # Arguments
    /// * `engine` - Must be the bound will ledger; it authorizes the call
    /// * `testator` - Owner, whose address doubles as the token id
    fn issue(env: Env, engine: Address, testator: Address) -> Result<(), Error> {
        Self::require_engine(&env, &engine)?;

        if testator == engine || testator == env.current_contract_address() {
            return Err(Error::InvalidPrincipal);
        }
        if has_credential(&env, &testator) {
            return Err(Error::AlreadyIssued);
        }

        let supply = get_supply(&env).checked_add(1).ok_or(Error::InvalidInput)?;

        let credential = Credential {
            owner: testator.clone(),
            token_id: testator.clone(),
            issued_at: env.ledger().timestamp(),
        };
        set_credential(&env, &credential);
        set_supply(&env, supply);
        bump_instance(&env);

        log!(&env, "credential issued", testator);
        env.events().publish((CREDENTIAL_ISSUED,), testator);

        Ok(())
    }

    /// Revoke the credential of `testator`
    fn revoke(env: Env, engine: Address, testator: Address) -> Result<(), Error> {
        Self::require_engine(&env, &engine)?;

        if !has_credential(&env, &testator) {
            return Err(Error::NotFound);
        }

        remove_credential(&env, &testator);
        set_supply(&env, get_supply(&env).saturating_sub(1));
        bump_instance(&env);

        log!(&env, "credential revoked", testator);
        env.events().publish((CREDENTIAL_REVOKED,), testator);

        Ok(())
    }

    /// Always rejected, whoever asks
    fn transfer(_env: Env, _from: Address, _to: Address, _token_id: Address) -> Result<(), Error> {
        Err(Error::TransferNotAllowed)
    }

    fn owner_of(env: Env, token_id: Address) -> Result<Address, Error> {
        Ok(get_credential(&env, &token_id)?.owner)
    }

    fn has_credential(env: Env, owner: Address) -> bool {
        has_credential(&env, &owner)
    }

    /// Will ledger bound at initialization
    fn engine(env: Env) -> Result<Address, Error> {
        get_engine(&env)
    }
}
