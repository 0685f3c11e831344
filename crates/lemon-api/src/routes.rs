//! URL routing table for the `menu` namespace.
//!
//! Five fixed routes. Paths are produced with [`reverse`] and matched with
//! [`resolve`]; [`build_router`] turns the same table into the axum router.

use axum::{
    extract::{FromRequestParts, Path},
    http::{header, request::Parts, Method, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use lemon_core::domain::{MenuItem, MenuItemId};
use lemon_shared::constants::ROUTE_NAMESPACE;

use crate::error::ApiError;
use crate::handlers::{self, error_pages::render_error_pages};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    Home,
    About,
    MenuList,
    Book,
    ItemDetail,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::About => "about",
            RouteName::MenuList => "menu_list",
            RouteName::Book => "book",
            RouteName::ItemDetail => "item_detail",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub name: RouteName,
    /// axum path pattern; `{pk}` segments take a non-negative integer.
    pub pattern: &'static str,
}

pub static URL_PATTERNS: [Route; 5] = [
    Route { name: RouteName::Home, pattern: "/" },
    Route { name: RouteName::About, pattern: "/about/" },
    Route { name: RouteName::MenuList, pattern: "/menu/" },
    Route { name: RouteName::Book, pattern: "/book/" },
    Route { name: RouteName::ItemDetail, pattern: "/menu/{pk}/" },
];

/// A concrete path matched against [`URL_PATTERNS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub name: RouteName,
    pub pk: Option<MenuItemId>,
}

fn is_placeholder(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// Parses a path segment the way an `int` converter would: ASCII digits only.
pub fn parse_pk(segment: &str) -> Option<MenuItemId> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl Route {
    fn build(&self, args: &[&str]) -> Option<String> {
        let placeholders = self.pattern.split('/').filter(|s| is_placeholder(s)).count();
        if placeholders != args.len() {
            return None;
        }

        let mut args = args.iter();
        let mut path = String::with_capacity(self.pattern.len());
        for (i, segment) in self.pattern.split('/').enumerate() {
            if i > 0 {
                path.push('/');
            }
            if is_placeholder(segment) {
                let arg = args.next()?;
                parse_pk(arg)?;
                path.push_str(arg);
            } else {
                path.push_str(segment);
            }
        }
        Some(path)
    }

    fn matches(&self, path: &str) -> Option<Resolved> {
        let mut pk = None;
        let mut pattern = self.pattern.split('/');
        let mut concrete = path.split('/');
        loop {
            match (pattern.next(), concrete.next()) {
                (None, None) => return Some(Resolved { name: self.name, pk }),
                (Some(p), Some(c)) if is_placeholder(p) => pk = Some(parse_pk(c)?),
                (Some(p), Some(c)) if p == c => {},
                _ => return None,
            }
        }
    }
}

/// Path for a namespaced route name such as `menu:item_detail`.
pub fn reverse(qualified_name: &str, args: &[&str]) -> Option<String> {
    let name = qualified_name
        .strip_prefix(ROUTE_NAMESPACE)?
        .strip_prefix(':')?;
    URL_PATTERNS
        .iter()
        .find(|route| route.name.as_str() == name)?
        .build(args)
}

pub fn resolve(path: &str) -> Option<Resolved> {
    URL_PATTERNS.iter().find_map(|route| route.matches(path))
}

/// Canonical URL of a stored entity.
pub trait AbsoluteUrl {
    fn absolute_url(&self) -> String;
}

impl AbsoluteUrl for MenuItem {
    fn absolute_url(&self) -> String {
        let id = self.id.to_string();
        reverse("menu:item_detail", &[&id]).unwrap_or_else(|| format!("/menu/{}/", id))
    }
}

/// Primary key taken from the `{pk}` segment. Anything but digits is a 404.
#[derive(Debug, Clone, Copy)]
pub struct ItemPk(pub MenuItemId);

impl<S: Send + Sync> FromRequestParts<S> for ItemPk {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound(e.body_text()))?;

        parse_pk(&raw)
            .map(ItemPk)
            .ok_or_else(|| ApiError::NotFound(format!("menu item {}", raw)))
    }
}

fn method_router(name: RouteName) -> MethodRouter<AppState> {
    match name {
        RouteName::Home => get(handlers::pages::home),
        RouteName::About => get(handlers::pages::about),
        RouteName::MenuList => get(handlers::menu::menu_list),
        RouteName::Book => get(handlers::pages::book),
        RouteName::ItemDetail => get(handlers::menu::item_detail),
    }
}

/// Unmatched paths: redirect to the slashed form when that resolves, else 404.
async fn fallback(method: Method, uri: Uri) -> Result<Response, ApiError> {
    let path = uri.path();
    if (method == Method::GET || method == Method::HEAD) && !path.ends_with('/') {
        let slashed = format!("{}/", path);
        if resolve(&slashed).is_some() {
            let location = match uri.query() {
                Some(query) => format!("{}?{}", slashed, query),
                None => slashed,
            };
            return Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response());
        }
    }
    Err(ApiError::NotFound(path.to_string()))
}

pub fn build_router(state: AppState) -> Router {
    let site = URL_PATTERNS.iter().fold(Router::new(), |router, route| {
        router.route(route.pattern, method_router(route.name))
    });

    site.route("/health", get(handlers::health::health_check))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), render_error_pages))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get, item, router_with};
    use axum::http::StatusCode;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("menu:home", &[]).as_deref(), Some("/"));
        assert_eq!(reverse("menu:about", &[]).as_deref(), Some("/about/"));
        assert_eq!(reverse("menu:menu_list", &[]).as_deref(), Some("/menu/"));
        assert_eq!(reverse("menu:book", &[]).as_deref(), Some("/book/"));
        assert_eq!(reverse("menu:item_detail", &["12"]).as_deref(), Some("/menu/12/"));
    }

    #[test]
    fn test_reverse_rejects_bad_input() {
        assert_eq!(reverse("home", &[]), None);
        assert_eq!(reverse("shop:home", &[]), None);
        assert_eq!(reverse("menu:item_detail", &[]), None);
        assert_eq!(reverse("menu:item_detail", &["abc"]), None);
        assert_eq!(reverse("menu:about", &["1"]), None);
    }

    #[test]
    fn test_resolve_round_trips_reverse() {
        for route in URL_PATTERNS.iter() {
            let args: &[&str] = if route.name == RouteName::ItemDetail { &["7"] } else { &[] };
            let path = reverse(&format!("menu:{}", route.name.as_str()), args).unwrap();
            let resolved = resolve(&path).unwrap();
            assert_eq!(resolved.name, route.name);
        }
        assert_eq!(
            resolve("/menu/7/"),
            Some(Resolved { name: RouteName::ItemDetail, pk: Some(7) })
        );
    }

    #[test]
    fn test_resolve_rejects_non_matching() {
        assert_eq!(resolve("/menu/abc/"), None);
        assert_eq!(resolve("/menu/-1/"), None);
        assert_eq!(resolve("/menu/99999999999999999999/"), None);
        assert_eq!(resolve("/about"), None);
        assert_eq!(resolve("/menu/1/extra/"), None);
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(item(42, "Bruschetta", 800).absolute_url(), "/menu/42/");
    }

    #[tokio::test]
    async fn test_missing_slash_redirects() {
        let response = get(router_with(vec![]), "/about?x=1").await;
        assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.location.as_deref(), Some("/about/?x=1"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found_page() {
        let response = get(router_with(vec![]), "/reservations/").await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.body.contains("Page not found"));
    }
}
