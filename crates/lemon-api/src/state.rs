use std::sync::Arc;

use lemon_core::repositories::MenuItemRepository;
use lemon_core::services::MenuService;

use crate::templates::Templates;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<MenuService<dyn MenuItemRepository>>,
    pub templates: Arc<Templates>,
    pub media_url: Arc<str>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn MenuItemRepository>,
        templates: Templates,
        media_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            menu: Arc::new(MenuService::new(repository)),
            templates: Arc::new(templates),
            media_url: media_url.into(),
        }
    }
}
