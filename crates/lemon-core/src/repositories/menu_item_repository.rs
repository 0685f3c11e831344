//! Menu item repository trait (port)

use async_trait::async_trait;

use crate::domain::{MenuItem, MenuItemId, NewMenuItem};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Every stored item, name ascending.
    async fn find_all_ordered_by_name(&self) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, DomainError>;
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    /// Returns `false` when no row had that id.
    async fn delete(&self, id: MenuItemId) -> Result<bool, DomainError>;
}
