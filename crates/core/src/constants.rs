//! Shared constants for NoteHub.

/// Application name used as the page title prefix.
pub const APP_NAME: &str = "NoteHub";

/// Notes fetched per page on the filter route.
pub const PER_PAGE: u32 = 8;

/// Page prefetched on the server before hydration.
pub const FIRST_PAGE: u32 = 1;

/// Query scope shared by every notes list query key.
pub const NOTES_QUERY_SCOPE: &str = "notes";

/// Route prefix of the category filter page.
pub const FILTER_ROUTE_PREFIX: &str = "/notes/filter";

/// Social preview image attached to every filter page.
pub const OG_IMAGE_URL: &str = "https://ac.goit.global/fullstack/react/notehub-og-meta.jpg";

/// Default base URL of the NoteHub notes API.
pub const DEFAULT_API_URL: &str = "https://notehub-public.goit.study/api";

/// Default public origin used for canonical URLs.
pub const DEFAULT_SITE_URL: &str = "https://08-zustand-phi-three.vercel.app";

/// Default timeout for outbound API calls, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default listen port for `notehub serve`.
pub const DEFAULT_PORT: u16 = 3000;
