pub mod process_repo;
pub mod setting_repo;

pub use process_repo::ProcessRepo;
pub use setting_repo::SettingRepo;
