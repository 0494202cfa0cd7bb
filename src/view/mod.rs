//! Derived gallery views and card presentation.

mod card;
mod summary;

// Re-export public API
pub use card::{format_views, Card, Thumbnail};
pub use summary::{GalleryView, ResultState};
