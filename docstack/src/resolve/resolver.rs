//! Best-effort resolution of a document's ancestry.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{error, info};

use crate::access::{DocumentsAccess, ProviderAccess, RootsAccess};
use crate::document::DocumentUri;
use crate::features::Features;
use crate::stack::DocumentStack;

use super::{Resolution, StackBuilder};

/// Handles to the externally owned services a resolution talks to.
#[derive(Clone)]
pub struct Collaborators {
    /// Native path resolution.
    pub providers: Arc<dyn ProviderAccess>,
    /// Root metadata lookup.
    pub roots: Arc<dyn RootsAccess>,
    /// Document metadata lookup.
    pub docs: Arc<dyn DocumentsAccess>,
}

impl Collaborators {
    /// Bundles three collaborator handles.
    pub fn new(
        providers: Arc<dyn ProviderAccess>,
        roots: Arc<dyn RootsAccess>,
        docs: Arc<dyn DocumentsAccess>,
    ) -> Self {
        Self {
            providers,
            roots,
            docs,
        }
    }

    /// Uses one service for all three roles.
    pub fn from_shared<T>(service: Arc<T>) -> Self
    where
        T: ProviderAccess + RootsAccess + DocumentsAccess + 'static,
    {
        Self {
            providers: service.clone(),
            roots: service.clone(),
            docs: service,
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Resolves the [`DocumentStack`] of one document.
///
/// Resolution never fails loudly: a disabled feature, a provider without
/// native support, a provider error, or an incomplete lookup all yield `None`
/// and are distinguished only in the log (or through
/// [`resolve_outcome`](Self::resolve_outcome)).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use docstack::catalog::Catalog;
/// use docstack::resolve::{Collaborators, DocStackResolver};
/// use docstack::{DocumentUri, Features};
///
/// let catalog = Arc::new(Catalog::from_yaml(r#"
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
///       - uri: doc://auth/42
///         display_name: report.pdf
///         mime_type: application/pdf
///         parent: doc://auth/1
/// "#).unwrap());
///
/// let uri = DocumentUri::parse("doc://auth/42").unwrap();
/// let collaborators = Collaborators::from_shared(catalog);
///
/// let disabled = DocStackResolver::new(uri.clone(), Features::default(), collaborators.clone());
/// assert!(disabled.resolve().is_none());
///
/// let enabled = DocStackResolver::new(uri, Features::with_find_path(), collaborators);
/// let stack = enabled.resolve().unwrap();
/// assert_eq!(stack.breadcrumb(), vec!["Home", "Projects", "report.pdf"]);
/// ```
#[derive(Debug, Clone)]
pub struct DocStackResolver {
    uri: DocumentUri,
    authority: String,
    features: Features,
    collaborators: Collaborators,
}

impl DocStackResolver {
    /// Creates a resolver for `uri`, capturing its authority.
    #[must_use]
    pub fn new(uri: DocumentUri, features: Features, collaborators: Collaborators) -> Self {
        let authority = uri.authority().to_string();
        Self {
            uri,
            authority,
            features,
            collaborators,
        }
    }

    /// The document being resolved.
    #[must_use]
    pub fn uri(&self) -> &DocumentUri {
        &self.uri
    }

    /// The authority every lookup is scoped to.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Resolves the stack, `None` when the ancestry could not be determined.
    #[must_use]
    pub fn resolve(&self) -> Option<DocumentStack> {
        self.resolve_outcome().into_stack()
    }

    /// Resolves the stack and reports how the attempt ended.
    ///
    /// This performs blocking provider calls; run it off the host's primary
    /// context.
    #[must_use]
    pub fn resolve_outcome(&self) -> Resolution {
        if !self.features.find_path {
            return Resolution::Disabled;
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.resolve_with_provider())) {
            Ok(outcome) => outcome,
            Err(payload) => {
                error!(
                    "Panicked while building document stack for uri: {}: {}",
                    self.uri,
                    panic_message(payload.as_ref())
                );
                Resolution::Panicked
            }
        }
    }

    fn resolve_with_provider(&self) -> Resolution {
        match self.collaborators.providers.find_path(&self.uri) {
            Ok(Some(path)) => StackBuilder::new(
                &self.authority,
                &*self.collaborators.roots,
                &*self.collaborators.docs,
            )
            .try_build(path),
            Ok(None) => {
                info!("Remote provider {} doesn't support find_path.", self.authority);
                Resolution::Unsupported
            }
            Err(e) => {
                error!("Failed to build document stack for uri: {}: {e}", self.uri);
                Resolution::ProviderFailed {
                    message: e.to_string(),
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}
