//! Form rendering module
//!
//! This module contains UI components for rendering the project form steps:
//! - `field_renderer`: Field rendering utilities
//! - `button_row`: Back / Next / Submit buttons
//! - `metadata_form`: Project details
//! - `verification_form`: Twitter and GitHub identity verification
//! - `preview`: Read-only review before submission

mod button_row;
mod field_renderer;
pub mod metadata_form;
pub mod preview;
pub mod verification_form;
