//! Media references for image and video messages.

use serde::{Deserialize, Serialize};

/// Caller-facing media descriptor.
///
/// Deserializes from `{"type": "id", "id": ..}` or `{"type": "url", "link": ..}`.
/// The `type` tag only selects the variant; it is never sent to the API
/// (see [`MediaReference::resolve`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaReference {
    /// Media previously uploaded to the platform.
    Id {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Publicly reachable media URL.
    Url {
        link: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl MediaReference {
    pub fn id(id: impl Into<String>) -> Self {
        MediaReference::Id {
            id: id.into(),
            caption: None,
        }
    }

    pub fn url(link: impl Into<String>) -> Self {
        MediaReference::Url {
            link: link.into(),
            caption: None,
        }
    }

    pub fn with_caption(self, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match self {
            MediaReference::Id { id, .. } => MediaReference::Id { id, caption: text },
            MediaReference::Url { link, .. } => MediaReference::Url {
                link,
                caption: text,
            },
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self {
            MediaReference::Id { caption, .. } | MediaReference::Url { caption, .. } => {
                caption.as_deref()
            }
        }
    }

    /// Wire form of this reference: `id` or `link`, plus `caption`, no tag.
    pub fn resolve(&self) -> ResolvedMedia {
        match self {
            MediaReference::Id { id, caption } => ResolvedMedia {
                id: Some(id.clone()),
                link: None,
                caption: caption.clone(),
            },
            MediaReference::Url { link, caption } => ResolvedMedia {
                id: None,
                link: Some(link.clone()),
                caption: caption.clone(),
            },
        }
    }
}

/// Media object as the messages endpoint accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Media value inside a template parameter: `{"id": ..}` or `{"link": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaLink {
    Id { id: String },
    Link { link: String },
}

impl MediaLink {
    pub fn id(id: impl Into<String>) -> Self {
        MediaLink::Id { id: id.into() }
    }

    pub fn link(link: impl Into<String>) -> Self {
        MediaLink::Link { link: link.into() }
    }

    /// Carousel card headers only accept `link`; an id is carried over as-is.
    pub(crate) fn as_link(&self) -> MediaLink {
        match self {
            MediaLink::Id { id } => MediaLink::Link { link: id.clone() },
            MediaLink::Link { link } => MediaLink::Link { link: link.clone() },
        }
    }
}
