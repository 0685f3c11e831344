//! # Lemon Core - Domain Module
//!
//! Domain entities for the restaurant menu.

pub mod menu_item;
pub mod price;

pub use menu_item::{MenuItem, MenuItemChanges, MenuItemId, NewMenuItem};
pub use price::{format_price, normalize_price, parse_price};
