pub mod field_definitions;
pub mod processes;
pub mod settings;
