pub mod entry;
pub mod process;
pub mod requirement;
