#![no_std]

pub mod constants;
pub mod credential;
pub mod errors;
pub mod events;
pub mod types;

pub use constants::PERCENT_TOTAL;
