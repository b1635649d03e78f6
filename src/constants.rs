use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// At most this many categories appear on the homepage.
pub const MAX_CATEGORIES: i64 = 6;

/// At most this many projects appear in the "all" view of the homepage.
pub const MAX_PROJECTS_ALL_VIEW: i64 = 6;

/// Status marker a project must carry to be considered published.
pub const PUBLISHED_STATUS: &str = "published";
