//! Domain errors

use thiserror::Error;

use crate::domain::MenuItemId;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(MenuItemId),

    #[error("Menu item name already exists: {0}")]
    MenuItemNameAlreadyExists(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::MenuItemNotFound(_))
    }
}
