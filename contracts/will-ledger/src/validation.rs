use shared::errors::Error;
use shared::types::{Heir, HeirCheck, HeirShare};
use shared::PERCENT_TOTAL;
use soroban_sdk::{Address, Env, Vec};

/// Validate a heir list submitted by `testator`. The first failing rule wins:
/// empty list, then per entry in order (missing address, testator as heir,
/// percent outside 1..=100), then the percentage sum.
pub fn check_heirs(testator: &Address, heirs: &Vec<HeirShare>) -> HeirCheck {
    if heirs.is_empty() {
        return HeirCheck::NoHeirs;
    }

    let mut total: u32 = 0;
    for (index, heir) in heirs.iter().enumerate() {
        let index = index as u32;
        match heir.address {
            None => return HeirCheck::HeirWithoutAddress(index),
            Some(ref address) if address == testator => return HeirCheck::TestatorHeir(index),
            Some(_) => {}
        }
        if heir.percent == 0 || heir.percent > PERCENT_TOTAL {
            return HeirCheck::InvalidShare(index);
        }
        total = total.saturating_add(heir.percent);
    }

    if total != PERCENT_TOTAL {
        return HeirCheck::BadPercent(total);
    }
    HeirCheck::Valid(total)
}

/// Map a failed check onto its error code; the payload stays with the check
pub fn check_to_result(check: &HeirCheck) -> Result<(), Error> {
    match check {
        HeirCheck::Valid(_) => Ok(()),
        HeirCheck::NoHeirs => Err(Error::NoHeirs),
        HeirCheck::HeirWithoutAddress(_) => Err(Error::HeirWithoutAddress),
        HeirCheck::TestatorHeir(_) => Err(Error::TestatorHeir),
        HeirCheck::InvalidShare(_) => Err(Error::InvalidShare),
        HeirCheck::BadPercent(_) => Err(Error::BadPercent),
    }
}

/// Check the list and convert it to the stored form
pub fn validated_heirs(
    env: &Env,
    testator: &Address,
    heirs: &Vec<HeirShare>,
) -> Result<Vec<Heir>, Error> {
    check_to_result(&check_heirs(testator, heirs))?;

    let mut validated = Vec::new(env);
    for heir in heirs.iter() {
        let address = heir.address.ok_or(Error::HeirWithoutAddress)?;
        validated.push_back(Heir {
            address,
            percent: heir.percent,
        });
    }
    Ok(validated)
}
