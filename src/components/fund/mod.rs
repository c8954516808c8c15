//! Fund panel: flexible and fixed yield products with mock deposit and withdraw flows.

mod component;
pub mod state;

pub use component::FundPage;
