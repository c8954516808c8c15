//! Mint panel: node package purchase, earnings ledger, and transfers.

mod component;
pub mod state;

pub use component::MintPage;
