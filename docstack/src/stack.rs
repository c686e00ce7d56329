//! The resolved ancestry of a document.

use serde::Serialize;

use crate::document::DocumentDescriptor;
use crate::error::{Error, Result};
use crate::root::RootDescriptor;

/// An ordered chain of documents from a root down to a target document.
///
/// A stack always holds at least one document and every document belongs to
/// the same authority as the root. Stacks are only assembled by
/// [`StackBuilder`](crate::resolve::StackBuilder) and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStack {
    root: RootDescriptor,
    documents: Vec<DocumentDescriptor>,
}

impl DocumentStack {
    pub(crate) fn new(root: RootDescriptor, documents: Vec<DocumentDescriptor>) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::StackInvariant {
                details: format!("no documents under root {root}"),
            });
        }

        if let Some(stray) = documents.iter().find(|d| d.authority() != root.authority) {
            return Err(Error::StackInvariant {
                details: format!(
                    "document {} does not belong to authority {}",
                    stray.uri, root.authority
                ),
            });
        }

        Ok(Self { root, documents })
    }

    /// The root collection the chain starts from.
    #[must_use]
    pub fn root(&self) -> &RootDescriptor {
        &self.root
    }

    /// Documents ordered from the root's child to the target.
    #[must_use]
    pub fn documents(&self) -> &[DocumentDescriptor] {
        &self.documents
    }

    /// The target document.
    #[must_use]
    pub fn leaf(&self) -> &DocumentDescriptor {
        // Construction guarantees at least one document.
        &self.documents[self.documents.len() - 1]
    }

    /// Number of documents in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the stack holds no documents. Never true for an assembled stack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterates documents from the root's child to the target.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentDescriptor> {
        self.documents.iter()
    }

    /// Title for the stack, the target's display name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.leaf().display_name
    }

    /// The root title followed by each document's display name.
    #[must_use]
    pub fn breadcrumb(&self) -> Vec<&str> {
        std::iter::once(self.root.title.as_str())
            .chain(self.documents.iter().map(|d| d.display_name.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DocumentStack {
    type Item = &'a DocumentDescriptor;
    type IntoIter = std::slice::Iter<'a, DocumentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
