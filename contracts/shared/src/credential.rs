use soroban_sdk::{contractclient, Address, Env};

use crate::errors::Error;

/// Interface of the non-transferable will credential.
///
/// `issue` and `revoke` are engine-only: `engine` must be the will ledger the
/// credential contract was initialized with, and it must authorize the call.
/// The ledger reads `engine` back before binding a credential contract.
/// `transfer` exists so that wallets probing for a transferable token get an
/// explicit rejection instead of a missing function.
#[contractclient(name = "CredentialClient")]
pub trait CredentialInterface {
    fn issue(env: Env, engine: Address, testator: Address) -> Result<(), Error>;

    fn revoke(env: Env, engine: Address, testator: Address) -> Result<(), Error>;

    fn transfer(env: Env, from: Address, to: Address, token_id: Address) -> Result<(), Error>;

    fn owner_of(env: Env, token_id: Address) -> Result<Address, Error>;

    fn has_credential(env: Env, owner: Address) -> bool;

    fn engine(env: Env) -> Result<Address, Error>;
}
