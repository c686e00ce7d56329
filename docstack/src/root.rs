//! Root collection metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::DocumentUri;

/// Capability flags a provider reports for a root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RootFlags {
    /// Documents can be created directly under the root.
    pub supports_create: bool,
    /// The root can be searched.
    pub supports_search: bool,
    /// The root's contents live on the local device only.
    pub local_only: bool,
}

/// Metadata describing a root collection, looked up by `(authority, root_id)`.
///
/// # Examples
///
/// ```
/// use docstack::RootDescriptor;
///
/// let root = RootDescriptor::new("auth", "root1", "Home");
/// assert_eq!(root.to_string(), "auth:root1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootDescriptor {
    /// Authority of the owning provider.
    pub authority: String,
    /// Provider-scoped root identifier.
    pub root_id: String,
    /// Name shown to users.
    pub title: String,
    /// Secondary line shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The root's own top-level document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_uri: Option<DocumentUri>,
    /// Capability flags.
    #[serde(default)]
    pub flags: RootFlags,
}

impl RootDescriptor {
    /// Creates a root with no summary, document, or capabilities.
    #[must_use]
    pub fn new(
        authority: impl Into<String>,
        root_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            authority: authority.into(),
            root_id: root_id.into(),
            title: title.into(),
            summary: None,
            document_uri: None,
            flags: RootFlags::default(),
        }
    }

    /// Sets the root's top-level document.
    #[must_use]
    pub fn with_document(mut self, uri: DocumentUri) -> Self {
        self.document_uri = Some(uri);
        self
    }
}

impl fmt::Display for RootDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.authority, self.root_id)
    }
}
