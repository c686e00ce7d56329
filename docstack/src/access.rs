//! Collaborator contracts consumed by the resolver.
//!
//! Implementations are externally owned services. Handles are shared with the
//! background phase of a resolution, so every contract is `Send + Sync`.

use std::sync::Arc;

use crate::document::{DocumentDescriptor, DocumentUri};
use crate::error::Result;
use crate::path::AbstractPath;
use crate::root::RootDescriptor;

/// Native path resolution offered by a document provider.
#[cfg_attr(test, mockall::automock)]
pub trait ProviderAccess: Send + Sync {
    /// Finds the path from a root down to `uri`.
    ///
    /// Providers without native support return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures, timeouts, or malformed
    /// provider responses.
    fn find_path(&self, uri: &DocumentUri) -> Result<Option<AbstractPath>>;
}

/// Lookup of root metadata.
#[cfg_attr(test, mockall::automock)]
pub trait RootsAccess: Send + Sync {
    /// Fetches a root once, possibly performing I/O. `None` for unknown ids.
    fn get_root_oneshot(&self, authority: &str, root_id: &str) -> Option<RootDescriptor>;
}

/// Lookup of document metadata.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentsAccess: Send + Sync {
    /// Fetches descriptors for `uris` in order.
    ///
    /// All-or-nothing: returns `None` if any identifier cannot be resolved,
    /// never a partial list.
    fn get_documents(&self, authority: &str, uris: &[DocumentUri])
        -> Option<Vec<DocumentDescriptor>>;
}

impl<T: ProviderAccess + ?Sized> ProviderAccess for Arc<T> {
    fn find_path(&self, uri: &DocumentUri) -> Result<Option<AbstractPath>> {
        (**self).find_path(uri)
    }
}

impl<T: RootsAccess + ?Sized> RootsAccess for Arc<T> {
    fn get_root_oneshot(&self, authority: &str, root_id: &str) -> Option<RootDescriptor> {
        (**self).get_root_oneshot(authority, root_id)
    }
}

impl<T: DocumentsAccess + ?Sized> DocumentsAccess for Arc<T> {
    fn get_documents(
        &self,
        authority: &str,
        uris: &[DocumentUri],
    ) -> Option<Vec<DocumentDescriptor>> {
        (**self).get_documents(authority, uris)
    }
}

impl<T: ProviderAccess + ?Sized> ProviderAccess for &T {
    fn find_path(&self, uri: &DocumentUri) -> Result<Option<AbstractPath>> {
        (**self).find_path(uri)
    }
}

impl<T: RootsAccess + ?Sized> RootsAccess for &T {
    fn get_root_oneshot(&self, authority: &str, root_id: &str) -> Option<RootDescriptor> {
        (**self).get_root_oneshot(authority, root_id)
    }
}

impl<T: DocumentsAccess + ?Sized> DocumentsAccess for &T {
    fn get_documents(
        &self,
        authority: &str,
        uris: &[DocumentUri],
    ) -> Option<Vec<DocumentDescriptor>> {
        (**self).get_documents(authority, uris)
    }
}
