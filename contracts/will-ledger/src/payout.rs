use shared::errors::Error;
use shared::types::{Amount, Will, WillStatus};
use shared::PERCENT_TOTAL;
use soroban_sdk::{Address, Env, Vec};

/// What a settled entry owes its heir
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub heir: Address,
    pub amount: Amount,
    /// This entry was the last unpaid one
    pub completed: bool,
}

/// Floor share of `deposit` for an entry holding `percent`
pub fn entry_share(deposit: Amount, percent: u32) -> Result<Amount, Error> {
    deposit
        .checked_mul(percent as Amount)
        .map(|scaled| scaled / PERCENT_TOTAL as Amount)
        .ok_or(Error::InvalidInput)
}

/// First unpaid entry held by `heir` on a distributing will
pub fn next_unpaid_entry(will: &Will, heir: &Address) -> Option<u32> {
    if will.status != WillStatus::Distributing {
        return None;
    }
    will.heirs
        .iter()
        .enumerate()
        .map(|(index, entry)| (index as u32, entry))
        .find(|(index, entry)| entry.address == *heir && !will.paid.contains(*index))
        .map(|(index, _)| index)
}

/// Mark entry `index` paid and compute what it is owed.
///
/// Floor shares leave a remainder of at most `heirs.len() - 1` units; the
/// entry that completes the will receives `deposit - distributed`, so the sum
/// of all payouts equals the deposit. On completion the heir list is cleared
/// and the status becomes `Completed`.
///
/// The caller must persist `will` before transferring `amount`: once this
/// returns, the entry is no longer claimable.
pub fn settle_entry(env: &Env, will: &mut Will, index: u32) -> Result<Payout, Error> {
    if will.status != WillStatus::Distributing || will.paid.contains(index) {
        return Err(Error::NoWaitingHeir);
    }
    let entry = will.heirs.get(index).ok_or(Error::NoWaitingHeir)?;

    will.paid.push_back(index);
    let completed = will.paid.len() == will.heirs.len();

    let amount = if completed {
        will.deposit
            .checked_sub(will.distributed)
            .ok_or(Error::InvalidInput)?
    } else {
        entry_share(will.deposit, entry.percent)?
    };
    will.distributed = will
        .distributed
        .checked_add(amount)
        .ok_or(Error::InvalidInput)?;

    if completed {
        will.status = WillStatus::Completed;
        will.heirs = Vec::new(env);
        will.paid = Vec::new(env);
    }

    Ok(Payout {
        heir: entry.address,
        amount,
        completed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::Heir;
    use soroban_sdk::testutils::Address as _;

    fn distributing_will(env: &Env, deposit: Amount, heirs: &[(&Address, u32)]) -> Will {
        let mut entries = Vec::new(env);
        for (address, percent) in heirs {
            entries.push_back(Heir {
                address: (*address).clone(),
                percent: *percent,
            });
        }
        Will {
            testator: Address::generate(env),
            notary: Address::generate(env),
            status: WillStatus::Distributing,
            heirs: entries,
            deposit,
            paid: Vec::new(env),
            distributed: 0,
            created_at: 0,
        }
    }

    #[test]
    fn test_entry_share_floors() {
        assert_eq!(entry_share(10, 50), Ok(5));
        assert_eq!(entry_share(10, 33), Ok(3));
        assert_eq!(entry_share(7, 50), Ok(3));
        assert_eq!(entry_share(Amount::MAX, 2), Err(Error::InvalidInput));
    }

    #[test]
    fn test_settle_single_heir() {
        let env = Env::default();
        let heir = Address::generate(&env);
        let mut will = distributing_will(&env, 10, &[(&heir, 100)]);

        let payout = settle_entry(&env, &mut will, 0).unwrap();
        assert_eq!(payout.heir, heir);
        assert_eq!(payout.amount, 10);
        assert!(payout.completed);
        assert_eq!(will.status, WillStatus::Completed);
        assert!(will.heirs.is_empty());
        assert_eq!(will.locked_value(), 0);
    }

    #[test]
    fn test_settled_entry_is_not_payable_again() {
        let env = Env::default();
        let one = Address::generate(&env);
        let two = Address::generate(&env);
        let mut will = distributing_will(&env, 10, &[(&one, 50), (&two, 50)]);

        assert_eq!(next_unpaid_entry(&will, &one), Some(0));
        settle_entry(&env, &mut will, 0).unwrap();

        // A reentrant call made between settlement and transfer sees the marker
        assert_eq!(next_unpaid_entry(&will, &one), None);
        assert_eq!(settle_entry(&env, &mut will, 0), Err(Error::NoWaitingHeir));
        assert_eq!(will.distributed, 5);
        assert_eq!(will.status, WillStatus::Distributing);
    }

    #[test]
    fn test_residual_goes_to_last_claimant() {
        let env = Env::default();
        let one = Address::generate(&env);
        let two = Address::generate(&env);
        let three = Address::generate(&env);
        let mut will = distributing_will(&env, 10, &[(&one, 34), (&two, 33), (&three, 33)]);

        assert_eq!(settle_entry(&env, &mut will, 2).unwrap().amount, 3);
        assert_eq!(settle_entry(&env, &mut will, 0).unwrap().amount, 3);
        let last = settle_entry(&env, &mut will, 1).unwrap();
        assert_eq!(last.amount, 4);
        assert!(last.completed);
        assert_eq!(will.distributed, 10);
    }

    #[test]
    fn test_duplicate_heir_entries_paid_separately() {
        let env = Env::default();
        let heir = Address::generate(&env);
        let mut will = distributing_will(&env, 10, &[(&heir, 70), (&heir, 30)]);

        let first = next_unpaid_entry(&will, &heir).unwrap();
        assert_eq!(settle_entry(&env, &mut will, first).unwrap().amount, 7);

        let second = next_unpaid_entry(&will, &heir).unwrap();
        assert_eq!(second, 1);
        let payout = settle_entry(&env, &mut will, second).unwrap();
        assert_eq!(payout.amount, 3);
        assert!(payout.completed);
    }

    #[test]
    fn test_not_distributing() {
        let env = Env::default();
        let heir = Address::generate(&env);
        let mut will = distributing_will(&env, 10, &[(&heir, 100)]);
        will.status = WillStatus::Configured;

        assert_eq!(next_unpaid_entry(&will, &heir), None);
        assert_eq!(settle_entry(&env, &mut will, 0), Err(Error::NoWaitingHeir));
    }
}
