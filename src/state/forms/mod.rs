//! Form domain layer
//!
//! Type-safe descriptors for the project form steps. Values are not held
//! here; they are read from and written to the form metadata store.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FormButton, StepForm};
