//! # Lemon Shared
//!
//! Configuration, telemetry, and constants shared by the Little Lemon crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;
pub mod utils;

pub use self::config::AppConfig;
pub use error::AppError;
