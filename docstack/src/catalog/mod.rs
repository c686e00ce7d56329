//! File-backed document providers.
//!
//! A catalog describes providers, their roots, and their documents in a
//! YAML file. It answers all three collaborator contracts from memory, which
//! makes it usable both as a fixture and as the command-line provider.
//!
//! ```yaml
//! providers:
//!   - authority: com.example.docs
//!     supports_find_path: true
//!     roots:
//!       - root_id: home
//!         title: Home
//!         document_uri: doc://com.example.docs/0
//!     documents:
//!       - uri: doc://com.example.docs/1
//!         display_name: Projects
//!         mime_type: vnd.android.document/directory
//!         parent: doc://com.example.docs/0
//! ```

mod schema;
mod validator;

pub use schema::{CatalogFile, DocumentSpec, ProviderSpec, RootSpec};
pub use validator::CatalogValidator;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::access::{DocumentsAccess, ProviderAccess, RootsAccess};
use crate::document::{DocumentDescriptor, DocumentFlags, DocumentUri, MIME_TYPE_DIR};
use crate::error::{Error, Result};
use crate::path::AbstractPath;
use crate::root::RootDescriptor;

/// One provider's data, indexed for lookup.
#[derive(Debug)]
struct ProviderIndex {
    supports_find_path: bool,
    fault: Option<String>,
    roots: Vec<RootDescriptor>,
    documents: HashMap<DocumentUri, DocumentDescriptor>,
    parents: HashMap<DocumentUri, DocumentUri>,
    root_documents: HashMap<DocumentUri, String>,
}

impl ProviderIndex {
    fn from_spec(spec: &ProviderSpec) -> Self {
        let roots: Vec<RootDescriptor> = spec
            .roots
            .iter()
            .map(|root| root.to_descriptor(&spec.authority))
            .collect();

        let mut documents: HashMap<DocumentUri, DocumentDescriptor> = spec
            .documents
            .iter()
            .map(|doc| (doc.uri.clone(), doc.to_descriptor()))
            .collect();

        let parents = spec
            .documents
            .iter()
            .filter_map(|doc| Some((doc.uri.clone(), doc.parent.clone()?)))
            .collect();

        let mut root_documents = HashMap::new();
        for root in &roots {
            if let Some(uri) = &root.document_uri {
                root_documents.insert(uri.clone(), root.root_id.clone());
                // Root documents not listed explicitly are presented as
                // directories named after the root.
                documents.entry(uri.clone()).or_insert_with(|| {
                    let mut doc = DocumentDescriptor::new(uri.clone(), &root.title, MIME_TYPE_DIR);
                    doc.flags = DocumentFlags {
                        supports_children: true,
                        ..DocumentFlags::default()
                    };
                    doc
                });
            }
        }

        Self {
            supports_find_path: spec.supports_find_path,
            fault: spec.fault.clone(),
            roots,
            documents,
            parents,
            root_documents,
        }
    }

    /// Walks parent links from `uri` up to the first root document.
    fn walk_up(&self, authority: &str, uri: &DocumentUri) -> Result<AbstractPath> {
        let mut segments = vec![uri.clone()];
        let mut seen = HashSet::new();
        let mut current = uri;

        loop {
            if let Some(root_id) = self.root_documents.get(current) {
                if current != uri {
                    // The root's own document is not part of the path.
                    segments.pop();
                }
                segments.reverse();
                return Ok(AbstractPath::new(Some(root_id.clone()), segments));
            }
            if !seen.insert(current) {
                return Err(Error::Provider {
                    authority: authority.to_string(),
                    message: format!("parent cycle through {current}"),
                });
            }
            let Some(parent) = self.parents.get(current) else {
                return Err(Error::Provider {
                    authority: authority.to_string(),
                    message: format!("{uri} is not reachable from any root"),
                });
            };
            segments.push(parent.clone());
            current = parent;
        }
    }
}

/// In-memory providers loaded from a catalog file.
///
/// # Examples
///
/// ```
/// use docstack::access::ProviderAccess;
/// use docstack::catalog::Catalog;
/// use docstack::DocumentUri;
///
/// let catalog = Catalog::from_yaml(r#"
/// providers:
///   - authority: auth
///     roots:
///       - root_id: home
///         title: Home
///         document_uri: doc://auth/0
///     documents:
///       - uri: doc://auth/1
///         display_name: Projects
///         mime_type: vnd.android.document/directory
///         parent: doc://auth/0
///       - uri: doc://auth/2
///         display_name: plan.md
///         mime_type: text/markdown
///         parent: doc://auth/1
/// "#).unwrap();
///
/// let path = catalog
///     .find_path(&DocumentUri::parse("doc://auth/2").unwrap())
///     .unwrap()
///     .unwrap();
/// assert_eq!(path.root_id(), Some("home"));
/// assert_eq!(path.segments().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Catalog {
    providers: HashMap<String, ProviderIndex>,
}

impl Catalog {
    /// Builds a catalog from a parsed file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the file is inconsistent.
    pub fn from_file(file: &CatalogFile) -> Result<Self> {
        CatalogValidator::validate(file)?;

        let providers = file
            .providers
            .iter()
            .map(|spec| (spec.authority.clone(), ProviderIndex::from_spec(spec)))
            .collect();

        Ok(Self { providers })
    }

    /// Parses and validates catalog YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the catalog is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::from_file(&file)
    }

    /// Loads a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "catalog file does not exist".to_string(),
            });
        }

        debug!("Loading catalog from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Known authorities, sorted.
    #[must_use]
    pub fn authorities(&self) -> Vec<&str> {
        let mut authorities: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        authorities.sort_unstable();
        authorities
    }

    /// Number of documents across all providers, root documents included.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.providers.values().map(|p| p.documents.len()).sum()
    }

    fn provider(&self, authority: &str) -> Result<&ProviderIndex> {
        self.providers.get(authority).ok_or_else(|| Error::NotFound {
            resource: format!("provider {authority}"),
        })
    }
}

impl ProviderAccess for Catalog {
    fn find_path(&self, uri: &DocumentUri) -> Result<Option<AbstractPath>> {
        let authority = uri.authority();
        let provider = self.provider(authority)?;

        if let Some(message) = &provider.fault {
            return Err(Error::Provider {
                authority: authority.to_string(),
                message: message.clone(),
            });
        }
        if !provider.supports_find_path {
            trace!("Provider {authority} has no native path resolution");
            return Ok(None);
        }
        if !provider.documents.contains_key(uri) {
            return Err(Error::NotFound {
                resource: format!("document {uri}"),
            });
        }

        provider.walk_up(authority, uri).map(Some)
    }
}

impl RootsAccess for Catalog {
    fn get_root_oneshot(&self, authority: &str, root_id: &str) -> Option<RootDescriptor> {
        self.providers
            .get(authority)?
            .roots
            .iter()
            .find(|root| root.root_id == root_id)
            .cloned()
    }
}

impl DocumentsAccess for Catalog {
    fn get_documents(
        &self,
        authority: &str,
        uris: &[DocumentUri],
    ) -> Option<Vec<DocumentDescriptor>> {
        let provider = self.providers.get(authority)?;
        uris.iter()
            .map(|uri| {
                if uri.authority() != authority {
                    return None;
                }
                provider.documents.get(uri).cloned()
            })
            .collect()
    }
}
