//! Fixed client settings shared by pages, components, and networking.

/// `localStorage` key holding the bearer credential.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Origin-relative prefix for every backend resource. The host forwards it.
pub const API_PREFIX: &str = "/api";

/// Picture used when a product has none or its encoding is unusable.
pub const DEFAULT_PICTURE: &str = "/pictures/missing picture.jpg";

/// Company logo shown in both headers.
pub const LOGO_PATH: &str = "/pictures/elvangLogo.png";

pub const HERO_IMAGE_PATH: &str = "/pictures/elvang.jpg";
pub const STORY_IMAGE_PATH: &str = "/pictures/elvangv2.jpg";

/// Maximum number of search-bar suggestions.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Stock at or above this level is not styled as critical.
pub const LOW_STOCK_CRITICAL_BELOW: i64 = 3;

/// How long a notification stays visible.
pub const NOTIFICATION_MS: u32 = 5_000;

/// Raw base64 pictures shorter than this are treated as missing.
pub const RAW_PICTURE_MIN_LEN: usize = 50;
