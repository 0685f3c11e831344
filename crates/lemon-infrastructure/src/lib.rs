//! # Lemon Infrastructure
//!
//! Database and file storage implementations (adapters).

pub mod database;
pub mod storage;

pub use database::{create_pool, run_migrations, PgMenuItemRepository};
pub use storage::{MediaStorage, StorageError};
