pub mod process;
pub mod setting;
