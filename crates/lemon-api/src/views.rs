//! Template contexts

use lemon_core::domain::{format_price, MenuItem, MenuItemId};
use lemon_shared::utils::join_url;
use serde::Serialize;

use crate::routes::AbsoluteUrl;

#[derive(Debug, Serialize)]
pub struct MenuItemView {
    pub id: MenuItemId,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_url: Option<String>,
    pub absolute_url: String,
}

impl MenuItemView {
    pub fn new(item: &MenuItem, media_url: &str) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: format_price(&item.price),
            description: item.description.clone(),
            image_url: item.image.as_deref().map(|path| join_url(media_url, path)),
            absolute_url: item.absolute_url(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuPage {
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Serialize)]
pub struct MenuItemPage {
    pub item: MenuItemView,
}
