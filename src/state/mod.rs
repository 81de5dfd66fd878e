//! Application state module

mod app_state;
mod draft;
mod forms;
mod store;
mod submission;

pub use app_state::*;
pub use draft::*;
pub use forms::*;
pub use store::*;
pub use submission::*;
