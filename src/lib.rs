//! A password-gated inventory ledger: named product groups expand into
//! uniquely identified units that are sold down to zero and removed, with
//! destructive operations gated behind a two-phase password challenge and
//! every mutation written through to a key-value store.

pub mod error;
pub mod gateway;
pub mod group;
pub mod guard;
pub mod ids;
pub mod service;
pub mod utils;
pub mod wallet;
