//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod alerts_state;
pub mod i18n_state;
pub mod nav_state;
pub mod registration_state;
pub mod settings_state;
