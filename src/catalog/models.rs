//! Video record model.

use serde::Serialize;

/// One validated catalog entry.
///
/// Only `link` is guaranteed; every other field is independently optional.
/// `view_count: None` means the count is unknown and is kept distinct from
/// `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// External video URL, never empty
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Free-form display text such as "12:34"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    /// Single free-form tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl VideoRecord {
    /// Creates a record with only its link set.
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            title: None,
            description: None,
            thumbnail_url: None,
            duration: None,
            view_count: None,
            author_url: None,
            category: None,
        }
    }

    /// View count used for ordering; unknown counts compare as zero.
    pub fn views_for_sort(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }
}

/// A JSON object key under which a record field may appear.
///
/// Catalogs use either the English label or the label of the original
/// Chinese-language catalog. The English label wins when both are present.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldLabel {
    pub name: &'static str,
    pub legacy: &'static str,
}

pub(crate) const LINK: FieldLabel = FieldLabel {
    name: "link",
    legacy: "视频链接",
};
pub(crate) const TITLE: FieldLabel = FieldLabel {
    name: "title",
    legacy: "标题",
};
pub(crate) const DESCRIPTION: FieldLabel = FieldLabel {
    name: "description",
    legacy: "description",
};
pub(crate) const THUMBNAIL_URL: FieldLabel = FieldLabel {
    name: "thumbnailUrl",
    legacy: "封面链接",
};
pub(crate) const DURATION: FieldLabel = FieldLabel {
    name: "duration",
    legacy: "时长",
};
pub(crate) const VIEW_COUNT: FieldLabel = FieldLabel {
    name: "viewCount",
    legacy: "播放量",
};
pub(crate) const AUTHOR_URL: FieldLabel = FieldLabel {
    name: "authorUrl",
    legacy: "博主链接",
};
pub(crate) const CATEGORY: FieldLabel = FieldLabel {
    name: "category",
    legacy: "关键词",
};
