//! Profile panel: invite codes and the transfer placeholder.

mod component;
pub mod state;

pub use component::MyPage;
