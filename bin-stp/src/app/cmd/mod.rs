pub mod gen;
pub mod step;
