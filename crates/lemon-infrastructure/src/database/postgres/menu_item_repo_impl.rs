// ============================================================================
// Lemon Infrastructure - PostgreSQL MenuItem Repository
// File: crates/lemon-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use lemon_core::domain::{MenuItem, MenuItemId, NewMenuItem};
use lemon_core::error::DomainError;
use lemon_core::repositories::MenuItemRepository;

/// Postgres `numeric_value_out_of_range`
const NUMERIC_OUT_OF_RANGE: &str = "22003";

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn find_all_ordered_by_name(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, description, image
            FROM menu_menuitem
            ORDER BY name ASC
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menu items: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, description, image
            FROM menu_menuitem
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu item by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, description, image
            FROM menu_menuitem
            WHERE name = $1
            "#
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu item by name: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item: {}", item.name);

        let row: MenuItemRow = sqlx::query_as(
            r#"
            INSERT INTO menu_menuitem (name, price, description, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, description, image
            "#
        )
        .bind(&item.name)
        .bind(item.price)
        .bind(&item.description)
        .bind(&item.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &item.name))?;

        info!("Menu item created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            UPDATE menu_menuitem
            SET name = $2, price = $3, description = $4, image = $5
            WHERE id = $1
            RETURNING id, name, price, description, image
            "#
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.price)
        .bind(&item.description)
        .bind(&item.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &item.name))?;

        row.map(Into::into)
            .ok_or(DomainError::MenuItemNotFound(item.id))
    }

    async fn delete(&self, id: MenuItemId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_menuitem WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting menu item: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(e: sqlx::Error, name: &str) -> DomainError {
    error!("Database error writing menu item: {}", e);
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::MenuItemNameAlreadyExists(name.to_string());
        }
        if db_err.code().as_deref() == Some(NUMERIC_OUT_OF_RANGE) {
            return DomainError::InvalidPrice(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: Option<String>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            image: row.image,
        }
    }
}
