//! Externally-loaded configuration models.

pub mod config;
