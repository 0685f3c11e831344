//! Handlebars page templates, compiled into the binary.

use axum::response::Html;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
    TemplateError,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::routes::reverse;

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const BOOK: &str = "book";
pub const MENU: &str = "menu";
pub const MENU_ITEM: &str = "menu_item";
pub const NOT_FOUND: &str = "404";
pub const SERVER_ERROR: &str = "500";

const BASE_LAYOUT: &str = include_str!("../templates/base.hbs");

const PAGES: [(&str, &str); 7] = [
    (HOME, include_str!("../templates/home.hbs")),
    (ABOUT, include_str!("../templates/about.hbs")),
    (BOOK, include_str!("../templates/book.hbs")),
    (MENU, include_str!("../templates/menu.hbs")),
    (MENU_ITEM, include_str!("../templates/menu_item.hbs")),
    (NOT_FOUND, include_str!("../templates/404.hbs")),
    (SERVER_ERROR, include_str!("../templates/500.hbs")),
];

pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_partial("base", BASE_LAYOUT)?;
        for (name, source) in PAGES {
            registry.register_template_string(name, source)?;
        }
        registry.register_helper("url", Box::new(url_helper));
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, ApiError> {
        Ok(Html(self.registry.render(name, data)?))
    }
}

/// `{{url "menu:item_detail" id}}` resolves a namespaced route to its path.
fn url_helper<'reg, 'rc>(
    h: &Helper<'rc>,
    _: &'reg Handlebars<'reg>,
    _: &'rc Context,
    _: &mut RenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let name = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("url", 0))?;

    let args: Vec<String> = h
        .params()
        .iter()
        .skip(1)
        .map(|p| match p.value() {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let path = reverse(name, &args)
        .ok_or_else(|| RenderErrorReason::Other(format!("no route named {name} for {args:?}")))?;
    out.write(&path)?;
    Ok(())
}
