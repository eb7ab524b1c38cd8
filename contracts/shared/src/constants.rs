/// Heir percentages of a configured will must add up to exactly this value
pub const PERCENT_TOTAL: u32 = 100;

/// Ledgers closed per day at ~5s per ledger
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage is bumped to this TTL on every mutating call
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Persistent records (wills, notaries, credentials) outlive instance data
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Upper bound on the credential base URI so token URIs fit a fixed buffer
pub const MAX_BASE_URI_LEN: u32 = 128;

/// Length of a Stellar strkey (`G...` account or `C...` contract)
pub const STRKEY_LEN: u32 = 56;
