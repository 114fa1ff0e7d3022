pub mod digits;
pub mod format;
pub mod log;
