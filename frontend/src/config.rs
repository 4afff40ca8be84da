//! Configuration for the admin frontend.

/// Backend API base URL, read at compile time.
///
/// Never ends with `/admin`; admin routes add that prefix themselves.
pub const API_BASE: &str = match option_env!("ZETHO_ADMIN_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3001/api",
};

/// Rows per page on the main-groups table.
pub const MAIN_GROUPS_PAGE_SIZE: usize = 8;

/// How long toasts stay on screen.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Dashboard counter count-up duration.
pub const COUNTER_ANIMATION_MS: f64 = 700.0;

/// Skeleton cards shown while the dashboard loads.
pub const DASHBOARD_SKELETONS: usize = 8;

/// Reporter badges shown on a post card before collapsing into "+N more".
pub const MAX_REPORTER_BADGES: usize = 4;

/// News cards cut their content preview at this many characters.
pub const NEWS_PREVIEW_CHARS: usize = 120;

/// Preview length on reported post cards.
pub const POST_PREVIEW_CHARS: usize = 80;

/// Content preview length on reported news cards.
pub const REPORTED_NEWS_PREVIEW_CHARS: usize = 220;
