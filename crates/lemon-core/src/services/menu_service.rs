// ============================================================================
// Lemon Core - Menu Service
// File: crates/lemon-core/src/services/menu_service.rs
// ============================================================================
//! Read access for the website and write access for the admin tool

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{MenuItem, MenuItemChanges, MenuItemId, NewMenuItem};
use crate::error::DomainError;
use crate::repositories::MenuItemRepository;

/// Menu service over any [`MenuItemRepository`], including `dyn` ones.
pub struct MenuService<R: MenuItemRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: MenuItemRepository + ?Sized> MenuService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All menu items, name ascending
    pub async fn list_items(&self) -> Result<Vec<MenuItem>, DomainError> {
        let items = self.repo.find_all_ordered_by_name().await?;
        debug!("Loaded {} menu items", items.len());
        Ok(items)
    }

    pub async fn get_item(&self, id: MenuItemId) -> Result<MenuItem, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(id))
    }

    /// Store a new item. The name must not be taken.
    pub async fn add_item(&self, item: NewMenuItem) -> Result<MenuItem, DomainError> {
        info!("Adding menu item: {}", item.name);

        if self.repo.find_by_name(&item.name).await?.is_some() {
            warn!("Menu item name already exists: {}", item.name);
            return Err(DomainError::MenuItemNameAlreadyExists(item.name));
        }

        let created = self.repo.create(&item).await?;
        info!("Menu item created: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn update_item(
        &self,
        id: MenuItemId,
        changes: MenuItemChanges,
    ) -> Result<MenuItem, DomainError> {
        let current = self.get_item(id).await?;
        if changes.is_empty() {
            return Ok(current);
        }

        let updated = current.with_changes(changes)?;

        if updated.name != current.name {
            if let Some(other) = self.repo.find_by_name(&updated.name).await? {
                if other.id != id {
                    warn!("Rename of {} rejected, name taken: {}", id, updated.name);
                    return Err(DomainError::MenuItemNameAlreadyExists(updated.name));
                }
            }
        }

        let saved = self.repo.update(&updated).await?;
        info!("Menu item updated: {}", saved.id);
        Ok(saved)
    }

    pub async fn remove_item(&self, id: MenuItemId) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::MenuItemNotFound(id));
        }
        info!("Menu item removed: {}", id);
        Ok(())
    }
}
