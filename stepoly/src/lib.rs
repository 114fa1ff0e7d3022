mod poly;
mod step;

pub use poly::*;
pub use step::*;

pub mod codegen;
pub mod util;
