// ============================================================================
// Lemon Core - Menu Item Entity
// File: crates/lemon-core/src/domain/menu_item.rs
// Description: A single dish listed on the restaurant menu
// ============================================================================

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::price::normalize_price;
use crate::error::DomainError;

/// Surrogate key assigned by the database.
pub type MenuItemId = i64;

/// Menu Item entity, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    /// Storage-relative path of the uploaded image, e.g. `menu_images/salad.jpg`.
    pub image: Option<String>,
}

/// Menu Item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMenuItem {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,

    pub price: Decimal,

    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Image path must be between 1 and 100 characters"))]
    pub image: Option<String>,
}

impl NewMenuItem {
    pub fn new(
        name: String,
        price: Decimal,
        description: String,
        image: Option<String>,
    ) -> Result<Self, DomainError> {
        let item = Self {
            name: name.trim().to_string(),
            price: normalize_price(price)?,
            description,
            image: image.map(|i| i.trim().to_string()),
        };

        item.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(item)
    }
}

/// Partial update of a stored item. `image: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
}

impl MenuItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }
}

impl MenuItem {
    /// Returns a copy with `changes` applied, re-validated like a new item.
    pub fn with_changes(&self, changes: MenuItemChanges) -> Result<Self, DomainError> {
        let draft = NewMenuItem::new(
            changes.name.unwrap_or_else(|| self.name.clone()),
            changes.price.unwrap_or(self.price),
            changes.description.unwrap_or_else(|| self.description.clone()),
            changes.image.unwrap_or_else(|| self.image.clone()),
        )?;

        Ok(Self {
            id: self.id,
            name: draft.name,
            price: draft.price,
            description: draft.description,
            image: draft.image,
        })
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greek_salad() -> MenuItem {
        MenuItem {
            id: 1,
            name: "Greek Salad".to_string(),
            price: Decimal::new(1250, 2),
            description: "Crispy lettuce, peppers, olives".to_string(),
            image: Some("menu_images/greek_salad.jpg".to_string()),
        }
    }

    #[test]
    fn test_create_menu_item() {
        let item = NewMenuItem::new(
            "  Bruschetta ".to_string(),
            Decimal::new(8, 0),
            String::new(),
            None,
        )
        .unwrap();
        assert_eq!(item.name, "Bruschetta");
        assert_eq!(item.price.to_string(), "8.00");
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let item = NewMenuItem::new("   ".to_string(), Decimal::ONE, String::new(), None);
        assert!(matches!(item, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_long_name_rejected() {
        let item = NewMenuItem::new("x".repeat(121), Decimal::ONE, String::new(), None);
        assert!(matches!(item, Err(DomainError::ValidationError(_))));
        assert!(NewMenuItem::new("x".repeat(120), Decimal::ONE, String::new(), None).is_ok());
    }

    #[test]
    fn test_price_precision_rejected() {
        let item = NewMenuItem::new("Soup".to_string(), Decimal::new(1999, 3), String::new(), None);
        assert!(matches!(item, Err(DomainError::InvalidPrice(_))));
    }

    #[test]
    fn test_with_changes_keeps_id() {
        let item = greek_salad();
        let updated = item
            .with_changes(MenuItemChanges {
                price: Some(Decimal::new(13, 0)),
                image: Some(None),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Greek Salad");
        assert_eq!(updated.price.to_string(), "13.00");
        assert!(!updated.has_image());
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(greek_salad().to_string(), "Greek Salad");
    }
}
