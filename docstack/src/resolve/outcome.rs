//! Tagged resolution outcomes.

use std::fmt;

use crate::stack::DocumentStack;

/// Why a resolution ended the way it did.
///
/// Callers that only need the stack collapse this with [`Resolution::into_stack`];
/// every variant other than `Resolved` becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The full ancestry was assembled.
    Resolved(DocumentStack),
    /// Native path resolution is switched off for this deployment.
    Disabled,
    /// The provider has no native path resolution.
    Unsupported,
    /// The provider call failed.
    ProviderFailed {
        /// Rendered provider error.
        message: String,
    },
    /// The provider returned a path without a root id.
    MissingRootId,
    /// The root or document lookup came back empty.
    LookupFailed {
        /// Whether the root lookup succeeded.
        root_found: bool,
        /// Whether the document lookup succeeded.
        documents_found: bool,
    },
    /// A collaborator panicked during resolution.
    Panicked,
}

impl Resolution {
    /// Whether a stack was produced.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Collapses the outcome to the caller-visible signal.
    #[must_use]
    pub fn into_stack(self) -> Option<DocumentStack> {
        match self {
            Self::Resolved(stack) => Some(stack),
            _ => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(stack) => write!(f, "resolved ({} documents)", stack.len()),
            Self::Disabled => write!(f, "disabled"),
            Self::Unsupported => write!(f, "unsupported"),
            Self::ProviderFailed { message } => write!(f, "provider failed: {message}"),
            Self::MissingRootId => write!(f, "missing root id"),
            Self::LookupFailed {
                root_found,
                documents_found,
            } => write!(
                f,
                "lookup failed (root: {}, documents: {})",
                if *root_found { "found" } else { "missing" },
                if *documents_found { "found" } else { "missing" }
            ),
            Self::Panicked => write!(f, "panicked"),
        }
    }
}
