//! Opsdeck Client Library
//!
//! This crate provides the main application logic for opsdeck, a native
//! dashboard client with a system alert feed and registration onboarding.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
