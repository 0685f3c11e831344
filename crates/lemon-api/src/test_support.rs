use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use lemon_core::domain::{MenuItem, MenuItemId, NewMenuItem};
use lemon_core::error::DomainError;
use lemon_core::repositories::MenuItemRepository;
use mockall::mock;
use rust_decimal::Decimal;
use tower::ServiceExt;

use crate::{build_router, AppState, Templates};

mock! {
    pub MenuRepo {}

    #[async_trait]
    impl MenuItemRepository for MenuRepo {
        async fn find_all_ordered_by_name(&self) -> Result<Vec<MenuItem>, DomainError>;
        async fn find_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, DomainError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, DomainError>;
        async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError>;
        async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
        async fn delete(&self, id: MenuItemId) -> Result<bool, DomainError>;
    }
}

pub fn item(id: MenuItemId, name: &str, cents: i64) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        description: String::new(),
        image: None,
    }
}

pub fn router(repo: MockMenuRepo) -> Router {
    let templates = Templates::new().unwrap();
    build_router(AppState::new(Arc::new(repo), templates, "/media/"))
}

/// Router over a repository that behaves like the database would for `items`.
pub fn router_with(items: Vec<MenuItem>) -> Router {
    let mut sorted = items.clone();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut repo = MockMenuRepo::new();
    repo.expect_find_all_ordered_by_name()
        .returning(move || Ok(sorted.clone()));
    repo.expect_find_by_id()
        .returning(move |id| Ok(items.iter().find(|i| i.id == id).cloned()));
    router(repo)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        location,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
