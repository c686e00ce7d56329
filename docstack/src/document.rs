//! Document identifiers and document metadata.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// MIME type providers report for directories.
pub const MIME_TYPE_DIR: &str = "vnd.android.document/directory";

/// An opaque, provider-scoped reference to a single document.
///
/// The authority (the provider's addressable namespace) is mandatory and is
/// extracted once at parse time. The identifier itself is kept exactly as
/// given: equality, ordering and the string form all use the original text.
///
/// # Examples
///
/// ```
/// use docstack::DocumentUri;
///
/// let uri = DocumentUri::parse("doc://auth/42").unwrap();
/// assert_eq!(uri.authority(), "auth");
/// assert_eq!(uri.as_str(), "doc://auth/42");
///
/// assert!(DocumentUri::parse("doc:/42").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentUri {
    raw: String,
    authority: String,
}

impl DocumentUri {
    /// Parses a document identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDocumentUri`] if the input is not an absolute
    /// URI and [`Error::MissingAuthority`] if it has no host component.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|e| Error::InvalidDocumentUri {
            uri: input.to_string(),
            reason: e.to_string(),
        })?;

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => {
                return Err(Error::MissingAuthority {
                    uri: input.to_string(),
                })
            }
        };

        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        Ok(Self {
            raw: input.to_string(),
            authority,
        })
    }

    /// The provider authority this document belongs to.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// The identifier in its string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for DocumentUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DocumentUri {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DocumentUri> for String {
    fn from(uri: DocumentUri) -> Self {
        uri.raw
    }
}

/// Capability flags a provider reports for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentFlags {
    /// Children can be created under this document.
    pub supports_create: bool,
    /// The document can be deleted.
    pub supports_delete: bool,
    /// The document can be renamed.
    pub supports_rename: bool,
    /// The document's contents can be written.
    pub supports_write: bool,
    /// The document has children that can be enumerated.
    pub supports_children: bool,
}

/// Metadata describing a single document.
///
/// # Examples
///
/// ```
/// use docstack::{DocumentDescriptor, DocumentUri};
///
/// let doc = DocumentDescriptor::new(
///     DocumentUri::parse("doc://auth/1").unwrap(),
///     "Projects",
///     docstack::document::MIME_TYPE_DIR,
/// );
/// assert!(doc.is_directory());
/// assert_eq!(doc.authority(), "auth");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    /// The document's identifier.
    pub uri: DocumentUri,
    /// Name shown to users.
    pub display_name: String,
    /// MIME type, [`MIME_TYPE_DIR`] for directories.
    pub mime_type: String,
    /// Size in bytes, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last modification time, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// Capability flags.
    #[serde(default)]
    pub flags: DocumentFlags,
}

impl DocumentDescriptor {
    /// Creates a descriptor with no size, timestamp, or capabilities.
    #[must_use]
    pub fn new(uri: DocumentUri, display_name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            uri,
            display_name: display_name.into(),
            mime_type: mime_type.into(),
            size: None,
            last_modified: None,
            flags: DocumentFlags::default(),
        }
    }

    /// The authority of the provider that owns this document.
    #[must_use]
    pub fn authority(&self) -> &str {
        self.uri.authority()
    }

    /// Whether this document is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.mime_type == MIME_TYPE_DIR
    }
}

impl fmt::Display for DocumentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.uri)
    }
}
