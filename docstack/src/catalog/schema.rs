//! Catalog file schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::{DocumentDescriptor, DocumentFlags, DocumentUri};
use crate::root::{RootDescriptor, RootFlags};

/// Top-level catalog file.
///
/// # Examples
///
/// ```
/// use docstack::catalog::CatalogFile;
///
/// let file: CatalogFile = serde_yaml::from_str(r#"
/// providers:
///   - authority: auth
///     supports_find_path: false
/// "#).unwrap();
/// assert_eq!(file.providers.len(), 1);
/// assert!(!file.providers[0].supports_find_path);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Providers in the catalog.
    #[serde(default)]
    pub providers: Vec<ProviderSpec>,
}

/// One document provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSpec {
    /// The provider's authority.
    pub authority: String,

    /// Whether the provider answers native path resolution.
    #[serde(default = "default_true")]
    pub supports_find_path: bool,

    /// When set, path resolution fails with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,

    /// Roots offered by the provider.
    #[serde(default)]
    pub roots: Vec<RootSpec>,

    /// Documents offered by the provider.
    #[serde(default)]
    pub documents: Vec<DocumentSpec>,
}

/// A root, scoped to its provider's authority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RootSpec {
    /// Provider-scoped root identifier.
    pub root_id: String,
    /// Name shown to users.
    pub title: String,
    /// Secondary line shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The root's top-level document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_uri: Option<DocumentUri>,
    /// Capability flags.
    #[serde(default)]
    pub flags: RootFlags,
}

impl RootSpec {
    /// The descriptor this entry describes under `authority`.
    #[must_use]
    pub fn to_descriptor(&self, authority: &str) -> RootDescriptor {
        RootDescriptor {
            authority: authority.to_string(),
            root_id: self.root_id.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            document_uri: self.document_uri.clone(),
            flags: self.flags,
        }
    }
}

/// A document and its parent link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentSpec {
    /// The document's identifier.
    pub uri: DocumentUri,
    /// Name shown to users.
    pub display_name: String,
    /// MIME type.
    pub mime_type: String,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last modification time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// Capability flags.
    #[serde(default)]
    pub flags: DocumentFlags,
    /// The containing document, absent for documents directly under nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<DocumentUri>,
}

impl DocumentSpec {
    /// The descriptor this entry describes.
    #[must_use]
    pub fn to_descriptor(&self) -> DocumentDescriptor {
        DocumentDescriptor {
            uri: self.uri.clone(),
            display_name: self.display_name.clone(),
            mime_type: self.mime_type.clone(),
            size: self.size,
            last_modified: self.last_modified,
            flags: self.flags,
        }
    }
}

const fn default_true() -> bool {
    true
}
