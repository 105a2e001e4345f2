//! Content type enum and validation.
//!
//! The catalog only knows three kinds of content. Any other value is
//! rejected at the request boundary before the document is touched.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Valid `type` values for a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Video,
    News,
}

impl ContentType {
    /// Parse from the wire value.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "article" => Ok(Self::Article),
            "video" => Ok(Self::Video),
            "news" => Ok(Self::News),
            other => Err(CoreError::Validation(format!(
                "Unknown content type '{other}'. Must be one of: article, video, news"
            ))),
        }
    }

    /// Wire value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::News => "news",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
