mod app;
pub mod cmd;
pub mod err;
pub mod utils;

pub use app::*;
