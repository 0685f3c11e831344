//! Application-wide constants

pub const PRICE_MAX_DIGITS: u32 = 6;
pub const PRICE_DECIMAL_PLACES: u32 = 2;
pub const IMAGE_PATH_MAX_LENGTH: usize = 100;
pub const MENU_IMAGE_UPLOAD_DIR: &str = "menu_images";
pub const ROUTE_NAMESPACE: &str = "menu";
pub const DEFAULT_MEDIA_URL: &str = "/media/";
pub const STATIC_URL: &str = "/static/";
