use soroban_sdk::{symbol_short, Symbol};

// Access registry
pub const NOTARY_REGISTERED: Symbol = symbol_short!("not_reg");
pub const CREDENTIAL_CONTRACT_SET: Symbol = symbol_short!("cred_set");

// Will lifecycle
pub const WILL_REGISTERED: Symbol = symbol_short!("will_reg");
pub const WILL_CONFIGURED: Symbol = symbol_short!("will_cfg");
pub const DEPOSIT_LOCKED: Symbol = symbol_short!("dep_lock");
pub const DISTRIBUTION_TRIGGERED: Symbol = symbol_short!("dist_trig");
pub const HEIR_PAID: Symbol = symbol_short!("heir_paid");
pub const WILL_COMPLETED: Symbol = symbol_short!("will_done");
pub const WILL_CANCELLED: Symbol = symbol_short!("will_cncl");
pub const DEPOSIT_REFUNDED: Symbol = symbol_short!("dep_rfnd");

// Credential
pub const CREDENTIAL_ISSUED: Symbol = symbol_short!("cred_iss");
pub const CREDENTIAL_REVOKED: Symbol = symbol_short!("cred_rev");
