use soroban_sdk::{contracttype, Address, Vec};

/// Token amount in the custody token's minor units
pub type Amount = i128;

/// Lifecycle of a will record. Cancellation deletes the record instead of
/// storing a status, so a cancelled will is indistinguishable from no will.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum WillStatus {
    /// Created by a notary, waiting for the testator to configure it
    Registered = 0,
    /// Heirs stored and deposit locked
    Configured = 1,
    /// Triggered by a notary; heirs may claim
    Distributing = 2,
    /// Every heir entry has been paid
    Completed = 3,
}

/// Heir entry as submitted by the testator. `None` is an unset address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeirShare {
    pub address: Option<Address>,
    pub percent: u32,
}

/// Validated heir entry stored on a will
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Heir {
    pub address: Address,
    pub percent: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Will {
    pub testator: Address,
    pub notary: Address,
    pub status: WillStatus,
    pub heirs: Vec<Heir>,
    pub deposit: Amount,
    /// Indices into `heirs` that have already been paid
    pub paid: Vec<u32>,
    /// Sum of every payout made so far
    pub distributed: Amount,
    pub created_at: u64,
}

impl Will {
    /// A completed record is kept for inspection but no longer blocks a new will.
    pub fn is_live(&self) -> bool {
        self.status != WillStatus::Completed
    }

    pub fn locked_value(&self) -> Amount {
        self.deposit - self.distributed
    }
}

/// Outcome of heir list validation. Each rejection carries the offending
/// index or the actual percentage sum.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HeirCheck {
    Valid(u32),
    NoHeirs,
    HeirWithoutAddress(u32),
    TestatorHeir(u32),
    InvalidShare(u32),
    BadPercent(u32),
}

/// Non-transferable proof that `owner` holds an active will
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Credential {
    pub owner: Address,
    pub token_id: Address,
    pub issued_at: u64,
}
