//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on application state beyond what
//! their constructors receive.

pub mod composite;
pub mod layout;
pub mod primitives;
