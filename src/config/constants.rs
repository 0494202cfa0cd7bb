//! Configuration constants.
//!
//! Fixed labels, defaults and display strings shared by the pipeline and the
//! renderers.

/// Category filter value meaning "no category restriction".
///
/// Always the first entry of the category list shown to the user.
pub const ALL_CATEGORIES: &str = "all";

/// Catalog compiled into the binary, used when no `--catalog` path is given.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/videos.json");

/// Label shown in place of the catalog path when the bundled catalog is used.
pub const BUNDLED_CATALOG_LABEL: &str = "<bundled>";

// Display fallbacks
pub const UNTITLED_LABEL: &str = "Untitled";
pub const UNKNOWN_VIEWS_LABEL: &str = "unknown views";
pub const AUTHOR_LINK_LABEL: &str = "Author page";

/// Glyph shown when a card has no thumbnail or its thumbnail failed to load.
pub const THUMBNAIL_PLACEHOLDER: &str = "▶";

// Empty-state copy
pub const EMPTY_STATE_TITLE: &str = "No videos found";
pub const EMPTY_STATE_HINT: &str = "Try adjusting your search or filter options";
pub const CATALOG_UNAVAILABLE_TITLE: &str = "Video catalog unavailable";

/// Page heading for the gallery.
pub const GALLERY_TITLE: &str = "Video Library";

/// Placeholder text of the search box in the HTML export.
pub const SEARCH_PLACEHOLDER: &str = "Search titles, descriptions or categories...";

// View-count abbreviation thresholds
pub const VIEWS_MILLION: u64 = 1_000_000;
pub const VIEWS_THOUSAND: u64 = 1_000;

/// Prompt printed by the interactive browse session.
pub const BROWSE_PROMPT: &str = "gallery> ";
