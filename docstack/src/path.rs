//! Abstract paths returned by a provider's native path resolution.

use serde::{Deserialize, Serialize};

use crate::document::DocumentUri;

/// A provider's answer to "where does this document live".
///
/// `segments` run from the root's child down to the target document,
/// inclusive of the target.
///
/// # Examples
///
/// ```
/// use docstack::{AbstractPath, DocumentUri};
///
/// let path = AbstractPath::new(
///     Some("root1".to_string()),
///     vec![DocumentUri::parse("doc://auth/1").unwrap()],
/// );
/// assert_eq!(path.root_id(), Some("root1"));
///
/// let anonymous = AbstractPath::new(Some(String::new()), Vec::new());
/// assert_eq!(anonymous.root_id(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractPath {
    root_id: Option<String>,
    segments: Vec<DocumentUri>,
}

impl AbstractPath {
    /// Creates a path.
    #[must_use]
    pub fn new(root_id: Option<String>, segments: Vec<DocumentUri>) -> Self {
        Self { root_id, segments }
    }

    /// The root the provider placed the document under, if it supplied one.
    ///
    /// An empty string counts as absent.
    #[must_use]
    pub fn root_id(&self) -> Option<&str> {
        self.root_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Ordered document identifiers, root child first.
    #[must_use]
    pub fn segments(&self) -> &[DocumentUri] {
        &self.segments
    }

    /// The target document, if the path is non-empty.
    #[must_use]
    pub fn target(&self) -> Option<&DocumentUri> {
        self.segments.last()
    }
}
