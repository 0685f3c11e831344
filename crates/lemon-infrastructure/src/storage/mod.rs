//! File storage for uploaded menu images

pub mod media;

pub use media::{MediaStorage, StorageError};
