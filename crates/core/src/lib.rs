//! Domain logic for the Brainstudio process console.
//!
//! Holds the field-definition registry, the per-process field binder, the
//! form renderer and validator, and the store contract they persist
//! through. Nothing in this crate talks to a database or HTTP directly.

pub mod error;
pub mod form_fields;
pub mod process;
pub mod settings;
pub mod store;
pub mod types;
