//! Reusable UI components

mod button;
mod error_banner;

pub use button::{render_action_button, BUTTON_HEIGHT};
pub use error_banner::{render_error_banner, BANNER_HEIGHT};
