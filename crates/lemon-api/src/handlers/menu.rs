//! Menu listing and item detail

use axum::{extract::State, response::Html};
use tracing::debug;

use crate::error::ApiError;
use crate::routes::ItemPk;
use crate::state::AppState;
use crate::templates;
use crate::views::{MenuItemPage, MenuItemView, MenuPage};

/// GET /menu/
pub async fn menu_list(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let items = state.menu.list_items().await?;

    let page = MenuPage {
        items: items
            .iter()
            .map(|item| MenuItemView::new(item, &state.media_url))
            .collect(),
    };
    state.templates.render(templates::MENU, &page)
}

/// GET /menu/{pk}/
pub async fn item_detail(
    State(state): State<AppState>,
    ItemPk(pk): ItemPk,
) -> Result<Html<String>, ApiError> {
    debug!("Menu item detail: {}", pk);
    let item = state.menu.get_item(pk).await?;

    let page = MenuItemPage {
        item: MenuItemView::new(&item, &state.media_url),
    };
    state.templates.render(templates::MENU_ITEM, &page)
}
