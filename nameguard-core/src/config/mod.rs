//! Configuration for the NameGuard engine.

pub mod check_config;

pub use check_config::CheckConfig;
