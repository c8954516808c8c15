mod component;
pub mod state;

pub use component::SwapPage;
