#![cfg(test)]

//! Claims against a hostile token: the token calls back into the ledger from
//! inside `transfer`, or refuses to pay out. The callback is stopped by the
//! host, which rejects re-entry into a contract already on the call stack;
//! the paid marker itself is covered in `payout::tests`.

use crate::{WillLedgerContract, WillLedgerContractClient};
use identity::{IdentityCredentialContract, IdentityCredentialContractClient};
use shared::types::{HeirShare, WillStatus};
use soroban_sdk::{
    contract, contractimpl, contracttype, testutils::Address as _, Address, Env, String, Vec,
};

#[contracttype]
#[derive(Clone)]
enum HostileKey {
    Balance(Address),
    Armed,
    Attempts,
    Reentered,
    Frozen(Address),
}

/// Minimal SEP-41 subset: balances, a transfer that can call back into the
/// ledger, and a switch that makes transfers out of an account fail.
#[contract]
pub struct HostileToken;

#[contractimpl]
impl HostileToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let key = HostileKey::Balance(to);
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        env.storage().persistent().set(&key, &(balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&HostileKey::Balance(id))
            .unwrap_or(0)
    }

    /// Reenter `ledger.claim(to, testator)` on every transfer out of `ledger`
    pub fn arm(env: Env, ledger: Address, testator: Address) {
        env.storage()
            .instance()
            .set(&HostileKey::Armed, &(ledger, testator));
    }

    pub fn freeze(env: Env, account: Address) {
        env.storage()
            .instance()
            .set(&HostileKey::Frozen(account), &true);
    }

    pub fn attempts(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&HostileKey::Attempts)
            .unwrap_or(0)
    }

    pub fn reentered(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&HostileKey::Reentered)
            .unwrap_or(false)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        if env
            .storage()
            .instance()
            .has(&HostileKey::Frozen(from.clone()))
        {
            panic!("account frozen");
        }

        let armed: Option<(Address, Address)> = env.storage().instance().get(&HostileKey::Armed);
        if let Some((ledger, testator)) = armed {
            if from == ledger {
                let attempts = Self::attempts(env.clone()) + 1;
                env.storage()
                    .instance()
                    .set(&HostileKey::Attempts, &attempts);

                let result = WillLedgerContractClient::new(&env, &ledger).try_claim(&to, &testator);
                if matches!(result, Ok(Ok(_))) {
                    env.storage()
                        .instance()
                        .set(&HostileKey::Reentered, &true);
                }
            }
        }

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        env.storage()
            .persistent()
            .set(&HostileKey::Balance(from), &(from_balance - amount));
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&HostileKey::Balance(to), &(to_balance + amount));
    }
}

struct Hostile<'a> {
    env: Env,
    ledger: WillLedgerContractClient<'a>,
    token: HostileTokenClient<'a>,
    notary: Address,
    testator: Address,
}

fn setup() -> Hostile<'static> {
    let env = Env::default();
    env.mock_all_auths_allowing_non_root_auth();

    let admin = Address::generate(&env);
    let token = HostileTokenClient::new(&env, &env.register_contract(None, HostileToken));
    let ledger =
        WillLedgerContractClient::new(&env, &env.register_contract(None, WillLedgerContract));
    let credential = IdentityCredentialContractClient::new(
        &env,
        &env.register_contract(None, IdentityCredentialContract),
    );
    credential.initialize(
        &admin,
        &ledger.address,
        &String::from_str(&env, "Will Credential"),
        &String::from_str(&env, "WILL"),
        &String::from_str(&env, "https://wills.example/credential/"),
    );

    ledger.initialize(&admin, &token.address);
    ledger.set_credential_contract(&admin, &credential.address);

    let notary = Address::generate(&env);
    ledger.register_notary(&admin, &notary);

    let testator = Address::generate(&env);
    token.mint(&testator, &100);

    Hostile {
        env,
        ledger,
        token,
        notary,
        testator,
    }
}

fn distribute(h: &Hostile, heirs: &[(&Address, u32)], deposit: i128) {
    let mut list = Vec::new(&h.env);
    for (address, percent) in heirs {
        list.push_back(HeirShare {
            address: Some((*address).clone()),
            percent: *percent,
        });
    }
    h.ledger.new_will(&h.notary, &h.testator);
    h.ledger.set_up_will(&h.testator, &list, &deposit);
    h.ledger.trigger_distribution(&h.notary, &h.testator);
}

#[test]
fn test_host_rejects_reentrant_claim() {
    let h = setup();
    let one = Address::generate(&h.env);
    let two = Address::generate(&h.env);
    distribute(&h, &[(&one, 50), (&two, 50)], 10);
    h.token.arm(&h.ledger.address, &h.testator);

    assert_eq!(h.ledger.claim(&one, &h.testator), 5);

    assert_eq!(h.token.attempts(), 1);
    assert!(!h.token.reentered());
    assert_eq!(h.token.balance(&one), 5);
    assert_eq!(h.ledger.get_locked_value(&h.testator), 5);
    assert!(!h.ledger.is_heir_claimable(&one));
    assert!(h.ledger.is_heir_claimable(&two));
}

#[test]
fn test_host_rejects_reentrant_claim_on_duplicate_entry() {
    let h = setup();
    let heir = Address::generate(&h.env);
    distribute(&h, &[(&heir, 70), (&heir, 30)], 10);
    h.token.arm(&h.ledger.address, &h.testator);

    // The second entry is still unpaid, yet the nested claim never gets in
    assert_eq!(h.ledger.claim(&heir, &h.testator), 7);
    assert!(!h.token.reentered());
    assert_eq!(h.token.balance(&heir), 7);
    assert_eq!(h.ledger.get_heir_claims(&heir).len(), 1);

    assert_eq!(h.ledger.claim(&heir, &h.testator), 3);
    assert_eq!(h.token.balance(&heir), 10);
    assert_eq!(h.ledger.get_will(&h.testator).status, WillStatus::Completed);
}

#[test]
fn test_failed_payout_keeps_entry_claimable() {
    let h = setup();
    let heir = Address::generate(&h.env);
    distribute(&h, &[(&heir, 100)], 10);
    h.token.freeze(&h.ledger.address);

    assert!(h.ledger.try_claim(&heir, &h.testator).is_err());

    let will = h.ledger.get_will(&h.testator);
    assert_eq!(will.status, WillStatus::Distributing);
    assert_eq!(will.distributed, 0);
    assert_eq!(will.paid.len(), 0);
    assert_eq!(h.ledger.get_locked_value(&h.testator), 10);
    assert!(h.ledger.is_heir_claimable(&heir));
    assert_eq!(h.ledger.get_claimable_amount(&heir, &h.testator), 10);
    assert_eq!(h.token.balance(&heir), 0);
}
