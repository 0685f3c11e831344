pub mod error_pages;
pub mod health;
pub mod menu;
pub mod pages;
