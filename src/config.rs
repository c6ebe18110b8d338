/// Products shown per page in the tabbed shelves.
pub const SHELF_PAGE_SIZE: usize = 4;

/// Pixels a carousel chevron scrolls per click, roughly one card width.
pub const CAROUSEL_SCROLL_PX: f64 = 320.0;

/// How long the newsletter confirmation stays up before the form resets.
pub const NEWSLETTER_RESET_MS: u32 = 3_000;

/// Scroll depth at which the fixed header gains a solid background.
pub const HEADER_SOLID_AFTER_PX: f64 = 100.0;

/// Delay before the page shell fades in on first mount.
pub const PAGE_FADE_IN_MS: u32 = 100;
