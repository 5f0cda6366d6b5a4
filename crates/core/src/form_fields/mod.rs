//! Dynamic form configuration engine.
//!
//! Field definitions live in a [`registry::FieldRegistry`]; a
//! [`binder::ConfigurationBinder`] copies an ordered subset of them onto one
//! process; [`render`] and [`evaluator`] turn the resulting
//! [`configuration::ProcessFormConfiguration`] into input controls and
//! field-level errors; [`session::FormSession`] ties those together for one
//! editing screen.

pub mod binder;
pub mod configuration;
pub mod definition;
pub mod evaluator;
pub mod registry;
pub mod render;
pub mod session;

pub use binder::ConfigurationBinder;
pub use configuration::{FieldValue, FormValues, ProcessFormConfiguration};
pub use definition::{FieldDefinition, FieldDefinitionInput, FieldType};
pub use evaluator::{validate_form, FieldError, FieldErrors};
pub use registry::FieldRegistry;
pub use session::FormSession;
