use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    NotFound = 5,

    // Will errors
    AlreadySet = 10,
    NoTestator = 11,
    NoHeirs = 12,
    HeirWithoutAddress = 13,
    TestatorHeir = 14,
    BadPercent = 15,
    InvalidShare = 16,
    NotEnoughAmount = 17,
    NoWaitingHeir = 18,
    CredentialNotSet = 19,

    // Credential errors
    AlreadyIssued = 30,
    InvalidPrincipal = 31,
    TransferNotAllowed = 32,
    NotEngineCaller = 33,
}

/// Coarse families callers can branch on without matching every code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Caller lacks the admin, notary, owner or engine role.
    Authorization,
    /// Operation is not valid for the record's current status.
    State,
    NotFound,
    /// Rejected input; the detail is available through the ledger's heir check.
    Validation,
    AlreadyExists,
    /// The credential can never change hands.
    Policy,
    /// Contract wiring is missing or already fixed.
    Configuration,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized | Error::NotEngineCaller => ErrorKind::Authorization,
            Error::NoTestator => ErrorKind::State,
            Error::NotFound | Error::NoWaitingHeir => ErrorKind::NotFound,
            Error::InvalidInput
            | Error::NoHeirs
            | Error::HeirWithoutAddress
            | Error::TestatorHeir
            | Error::BadPercent
            | Error::InvalidShare
            | Error::NotEnoughAmount
            | Error::InvalidPrincipal => ErrorKind::Validation,
            Error::AlreadySet | Error::AlreadyIssued => ErrorKind::AlreadyExists,
            Error::TransferNotAllowed => ErrorKind::Policy,
            Error::NotInitialized | Error::AlreadyInitialized | Error::CredentialNotSet => {
                ErrorKind::Configuration
            }
        }
    }
}
