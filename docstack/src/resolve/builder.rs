//! Assembly of a document stack from an abstract path.

use log::{debug, error};

use crate::access::{DocumentsAccess, RootsAccess};
use crate::path::AbstractPath;
use crate::stack::DocumentStack;

use super::Resolution;

/// Turns a provider's abstract path into a concrete [`DocumentStack`].
///
/// Both the root and the document sequence must be found; a partially known
/// ancestry is never returned.
///
/// # Examples
///
/// ```
/// use docstack::catalog::Catalog;
/// use docstack::resolve::StackBuilder;
/// use docstack::{AbstractPath, DocumentUri};
///
/// let catalog = Catalog::from_yaml(r#"
/// providers:
///   - authority: auth
///     roots:
///       - root_id: root1
///         title: Home
///         document_uri: doc://auth/0
///     documents:
///       - uri: doc://auth/1
///         display_name: Projects
///         mime_type: vnd.android.document/directory
///         parent: doc://auth/0
/// "#).unwrap();
///
/// let builder = StackBuilder::new("auth", &catalog, &catalog);
/// let path = AbstractPath::new(
///     Some("root1".to_string()),
///     vec![DocumentUri::parse("doc://auth/1").unwrap()],
/// );
/// let stack = builder.build(path).unwrap();
/// assert_eq!(stack.breadcrumb(), vec!["Home", "Projects"]);
/// ```
pub struct StackBuilder<'a> {
    authority: &'a str,
    roots: &'a dyn RootsAccess,
    docs: &'a dyn DocumentsAccess,
}

impl<'a> StackBuilder<'a> {
    /// Creates a builder for documents of `authority`.
    #[must_use]
    pub fn new(authority: &'a str, roots: &'a dyn RootsAccess, docs: &'a dyn DocumentsAccess) -> Self {
        Self {
            authority,
            roots,
            docs,
        }
    }

    /// Builds the stack, or `None` if any part of it cannot be looked up.
    #[must_use]
    pub fn build(&self, path: AbstractPath) -> Option<DocumentStack> {
        self.try_build(path).into_stack()
    }

    /// Builds the stack and reports why it could not be built.
    #[must_use]
    pub fn try_build(&self, path: AbstractPath) -> Resolution {
        let Some(root_id) = path.root_id() else {
            error!("Provider {} doesn't provide root id.", self.authority);
            return Resolution::MissingRootId;
        };

        let root = self
            .roots
            .get_root_oneshot(self.authority, root_id)
            .filter(|root| root.root_id == root_id);
        let docs = self.docs.get_documents(self.authority, path.segments());

        let (root, docs) = match (root, docs) {
            (Some(root), Some(docs)) => (root, docs),
            (root, docs) => {
                error!(
                    "Either root: {} or docs: {} failed to load.",
                    root.as_ref()
                        .map_or_else(|| format!("<missing {root_id}>"), ToString::to_string),
                    docs.as_ref().map_or_else(
                        || "<missing>".to_string(),
                        |docs| format!("{} documents", docs.len())
                    ),
                );
                return Resolution::LookupFailed {
                    root_found: root.is_some(),
                    documents_found: docs.is_some(),
                };
            }
        };

        if docs.len() != path.segments().len() {
            error!(
                "Document lookup for root {root} returned {} of {} documents.",
                docs.len(),
                path.segments().len()
            );
            return Resolution::LookupFailed {
                root_found: true,
                documents_found: false,
            };
        }

        match DocumentStack::new(root, docs) {
            Ok(stack) => {
                debug!(
                    "Built document stack of {} documents under {}.",
                    stack.len(),
                    stack.root()
                );
                Resolution::Resolved(stack)
            }
            Err(e) => {
                error!("Failed to assemble document stack: {e}");
                Resolution::LookupFailed {
                    root_found: true,
                    documents_found: true,
                }
            }
        }
    }
}
