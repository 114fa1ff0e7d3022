mod helper;
mod types;
pub(crate) mod dispatch;

pub use helper::*;
pub use types::*;
