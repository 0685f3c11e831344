//! Runs against a real PostgreSQL server:
//! `DATABASE_URL=postgres://... cargo test -p lemon-infrastructure -- --ignored`

use lemon_core::domain::{MenuItemChanges, NewMenuItem};
use lemon_core::error::DomainError;
use lemon_core::repositories::MenuItemRepository;
use lemon_infrastructure::PgMenuItemRepository;
use rust_decimal::Decimal;
use sqlx::PgPool;

fn draft(name: &str, cents: i64) -> NewMenuItem {
    NewMenuItem::new(name.to_string(), Decimal::new(cents, 2), String::new(), None).unwrap()
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn lists_items_in_name_order(pool: PgPool) {
    let repo = PgMenuItemRepository::new(pool);
    repo.create(&draft("Greek Salad", 1250)).await.unwrap();
    repo.create(&draft("Bruschetta", 800)).await.unwrap();

    let items = repo.find_all_ordered_by_name().await.unwrap();
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Bruschetta", "Greek Salad"]);
    assert_eq!(items[0].price.to_string(), "8.00");
    assert_eq!(items[1].price.to_string(), "12.50");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_name_is_rejected(pool: PgPool) {
    let repo = PgMenuItemRepository::new(pool);
    repo.create(&draft("Greek Salad", 1250)).await.unwrap();

    let err = repo.create(&draft("Greek Salad", 900)).await.unwrap_err();
    assert!(matches!(err, DomainError::MenuItemNameAlreadyExists(_)));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn oversized_price_is_rejected(pool: PgPool) {
    let repo = PgMenuItemRepository::new(pool);
    let oversized = NewMenuItem {
        name: "Caviar".to_string(),
        price: Decimal::new(1_000_000, 2),
        description: String::new(),
        image: None,
    };

    let err = repo.create(&oversized).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidPrice(_)));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn update_and_delete(pool: PgPool) {
    let repo = PgMenuItemRepository::new(pool);
    let created = repo.create(&draft("Bruschetta", 800)).await.unwrap();

    let changed = created
        .with_changes(MenuItemChanges {
            image: Some(Some("menu_images/bruschetta.jpg".to_string())),
            ..Default::default()
        })
        .unwrap();
    let saved = repo.update(&changed).await.unwrap();
    assert_eq!(saved.image.as_deref(), Some("menu_images/bruschetta.jpg"));

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}
