#![no_std]

use shared::{
    credential::CredentialClient,
    errors::Error,
    events::*,
    types::{Amount, HeirCheck, HeirShare, Will, WillStatus},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, token::TokenClient, Address, Env, Vec,
};

mod access;
mod payout;
mod storage;
mod validation;

#[cfg(test)]
mod test_reentrancy;

use storage::*;

contractmeta!(key = "name", val = "Will Ledger");

#[contract]
pub struct WillLedgerContract;

#[contractimpl]
impl WillLedgerContract {
    /// Initialize the ledger with its admin and the token deposits are held in
    ///
    /// # Arguments
    /// * `admin` - Address allowed to register notaries
    /// * `token` - SEP-41 token used for deposits and payouts
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_token(&env, &token);
        bump_instance(&env);

        Ok(())
    }

    /// Bind the credential contract (admin only, once)
    ///
    /// # Arguments
    /// * `admin` - Current admin
    /// * `credential` - Credential contract initialized with this ledger as engine;
    ///   any other engine is rejected with `InvalidInput`
    pub fn set_credential_contract(
        env: Env,
        admin: Address,
        credential: Address,
    ) -> Result<(), Error> {
        access::require_admin(&env, &admin)?;

        if get_credential_contract(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        let ledger = env.current_contract_address();
        if credential == ledger {
            return Err(Error::InvalidInput);
        }
        // The credential must already name this ledger as its only issuer
        let engine = CredentialClient::new(&env, &credential).try_engine();
        if !matches!(engine, Ok(Ok(ref engine)) if *engine == ledger) {
            return Err(Error::InvalidInput);
        }

        set_credential_contract(&env, &credential);
        bump_instance(&env);

        env.events().publish((CREDENTIAL_CONTRACT_SET,), credential);

        Ok(())
    }

    /// Register a notary (admin only). Registering twice is a no-op.
    ///
    /// # Arguments
    /// * `admin` - Current admin
    /// * `notary` - Address to grant the notary role
    pub fn register_notary(env: Env, admin: Address, notary: Address) -> Result<(), Error> {
        access::require_admin(&env, &admin)?;

        if access::add_notary(&env, &notary) {
            log!(&env, "notary registered", notary);
            env.events().publish((NOTARY_REGISTERED,), notary);
        }
        bump_instance(&env);

        Ok(())
    }

    pub fn is_notary(env: Env, principal: Address) -> bool {
        is_notary(&env, &principal)
    }

    pub fn is_admin(env: Env, principal: Address) -> bool {
        access::is_admin(&env, &principal)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        get_token(&env)
    }

    pub fn get_credential_contract(env: Env) -> Result<Address, Error> {
        get_credential_contract(&env).ok_or(Error::CredentialNotSet)
    }

    /// Open a will for `testator` (notary only)
    ///
    /// # Arguments
    /// * `notary` - Registered notary creating the record
    /// * `testator` - Principal the will belongs to
    pub fn new_will(env: Env, notary: Address, testator: Address) -> Result<(), Error> {
        access::require_notary(&env, &notary)?;

        if let Some(existing) = get_will(&env, &testator) {
            if existing.is_live() {
                return Err(Error::AlreadySet);
            }
        }

        let will = Will {
            testator: testator.clone(),
            notary: notary.clone(),
            status: WillStatus::Registered,
            heirs: Vec::new(&env),
            deposit: 0,
            paid: Vec::new(&env),
            distributed: 0,
            created_at: env.ledger().timestamp(),
        };
        set_will(&env, &will);
        add_notary_will(&env, &notary, &testator);
        bump_instance(&env);

        log!(&env, "will registered", notary, testator);
        env.events().publish((WILL_REGISTERED,), (notary, testator));

        Ok(())
    }

    /// Configure heirs and lock the deposit (testator only)
    ///
    /// # Arguments
    /// * `testator` - Owner of a will in `Registered`
    /// * `heirs` - Heir entries whose percentages sum to 100
    /// * `deposit` - Amount pulled from the testator into custody
    pub fn set_up_will(
        env: Env,
        testator: Address,
        heirs: Vec<HeirShare>,
        deposit: Amount,
    ) -> Result<(), Error> {
        testator.require_auth();

        let credential = get_credential_contract(&env).ok_or(Error::CredentialNotSet)?;
        let token = get_token(&env)?;

        let mut will = get_will(&env, &testator).ok_or(Error::NoTestator)?;
        if will.status != WillStatus::Registered {
            return Err(Error::NoTestator);
        }

        let heirs = validation::validated_heirs(&env, &testator, &heirs)?;
        if deposit <= 0 {
            return Err(Error::NotEnoughAmount);
        }

        will.heirs = heirs;
        will.deposit = deposit;
        will.status = WillStatus::Configured;
        set_will(&env, &will);
        bump_instance(&env);

        let ledger = env.current_contract_address();
        CredentialClient::new(&env, &credential).issue(&ledger, &testator);
        TokenClient::new(&env, &token).transfer(&testator, &ledger, &deposit);

        log!(&env, "will configured", testator, deposit);
        env.events().publish((WILL_CONFIGURED,), testator.clone());
        env.events().publish((DEPOSIT_LOCKED,), (testator, deposit));

        Ok(())
    }

    /// Cancel a will that has not been triggered (testator only). The record
    /// is deleted, the credential revoked and any locked deposit refunded.
    ///
    /// # Arguments
    /// * `testator` - Owner of a will in `Registered` or `Configured`
    pub fn cancel_will(env: Env, testator: Address) -> Result<(), Error> {
        testator.require_auth();

        let will = get_will(&env, &testator).ok_or(Error::NoTestator)?;
        if !matches!(
            will.status,
            WillStatus::Registered | WillStatus::Configured
        ) {
            return Err(Error::NoTestator);
        }
        let refund = will.locked_value();

        remove_will(&env, &testator);
        remove_notary_will(&env, &will.notary, &testator);
        bump_instance(&env);

        let ledger = env.current_contract_address();
        if let Some(credential) = get_credential_contract(&env) {
            let client = CredentialClient::new(&env, &credential);
            if client.has_credential(&testator) {
                client.revoke(&ledger, &testator);
            }
        }

        if refund > 0 {
            let token = get_token(&env)?;
            TokenClient::new(&env, &token).transfer(&ledger, &testator, &refund);
            env.events().publish((DEPOSIT_REFUNDED,), (testator.clone(), refund));
        }

        log!(&env, "will cancelled", testator);
        env.events().publish((WILL_CANCELLED,), testator);

        Ok(())
    }

    /// Open distribution of a configured will (any registered notary)
    ///
    /// # Arguments
    /// * `notary` - Registered notary
    /// * `testator` - Owner of a will in `Configured`
    pub fn trigger_distribution(env: Env, notary: Address, testator: Address) -> Result<(), Error> {
        access::require_notary(&env, &notary)?;

        let mut will = get_will(&env, &testator).ok_or(Error::NoTestator)?;
        if will.status != WillStatus::Configured {
            return Err(Error::NoTestator);
        }

        will.status = WillStatus::Distributing;
        set_will(&env, &will);
        for heir in will.heirs.iter() {
            add_heir_claim(&env, &heir.address, &testator);
        }
        bump_instance(&env);

        log!(&env, "distribution triggered", notary, testator);
        env.events().publish((DISTRIBUTION_TRIGGERED,), testator);

        Ok(())
    }

    /// Pay the next unpaid entry `heir` holds on `testator`'s will.
    ///
    /// The entry is marked paid and the record persisted before the token
    /// transfer, so a reentrant claim finds nothing left to pay.
    ///
    /// # Arguments
    /// * `heir` - Heir collecting its share
    /// * `testator` - Owner of a will in `Distributing`
    ///
    /// # Returns
    /// * The amount transferred
    pub fn claim(env: Env, heir: Address, testator: Address) -> Result<Amount, Error> {
        heir.require_auth();

        let mut will = get_will(&env, &testator).ok_or(Error::NoWaitingHeir)?;
        let index = payout::next_unpaid_entry(&will, &heir).ok_or(Error::NoWaitingHeir)?;
        let token = get_token(&env)?;

        let payout = payout::settle_entry(&env, &mut will, index)?;
        set_will(&env, &will);
        remove_heir_claim(&env, &heir, &testator);
        bump_instance(&env);

        let ledger = env.current_contract_address();
        if payout.completed {
            remove_notary_will(&env, &will.notary, &testator);
            if let Some(credential) = get_credential_contract(&env) {
                let client = CredentialClient::new(&env, &credential);
                if client.has_credential(&testator) {
                    client.revoke(&ledger, &testator);
                }
            }
        }

        if payout.amount > 0 {
            TokenClient::new(&env, &token).transfer(&ledger, &payout.heir, &payout.amount);
        }

        log!(&env, "heir paid", heir, payout.amount);
        env.events().publish((HEIR_PAID,), (heir, payout.amount));
        if payout.completed {
            env.events().publish((WILL_COMPLETED,), testator);
        }

        Ok(payout.amount)
    }

    /// True while `principal` owns a will that has not completed
    pub fn is_testator(env: Env, principal: Address) -> bool {
        get_will(&env, &principal).map_or(false, |will| will.is_live())
    }

    /// True when `principal` holds at least one unpaid claimable entry
    pub fn is_heir_claimable(env: Env, principal: Address) -> bool {
        !get_heir_claims(&env, &principal).is_empty()
    }

    /// Testators `heir` can currently claim from, one element per unpaid entry
    pub fn get_heir_claims(env: Env, heir: Address) -> Vec<Address> {
        get_heir_claims(&env, &heir)
    }

    /// Amount the next `claim(heir, testator)` would pay, 0 if nothing is claimable
    pub fn get_claimable_amount(env: Env, heir: Address, testator: Address) -> Amount {
        let Some(will) = get_will(&env, &testator) else {
            return 0;
        };
        let Some(index) = payout::next_unpaid_entry(&will, &heir) else {
            return 0;
        };
        let mut preview = will.clone();
        payout::settle_entry(&env, &mut preview, index).map_or(0, |p| p.amount)
    }

    pub fn get_will(env: Env, testator: Address) -> Result<Will, Error> {
        get_will(&env, &testator).ok_or(Error::NoTestator)
    }

    /// Live wills registered by `notary`
    pub fn get_wills_by_notary(env: Env, notary: Address) -> Vec<Will> {
        let mut wills = Vec::new(&env);
        for testator in get_notary_wills(&env, &notary).iter() {
            if let Some(will) = get_will(&env, &testator) {
                if will.notary == notary && will.is_live() {
                    wills.push_back(will);
                }
            }
        }
        wills
    }

    /// Deposit still held for `testator`
    pub fn get_locked_value(env: Env, testator: Address) -> Amount {
        get_will(&env, &testator).map_or(0, |will| will.locked_value())
    }

    /// Validate a heir list without storing it. Rejections carry the
    /// offending index or the actual percentage sum.
    pub fn check_heirs(_env: Env, testator: Address, heirs: Vec<HeirShare>) -> HeirCheck {
        validation::check_heirs(&testator, &heirs)
    }
}
