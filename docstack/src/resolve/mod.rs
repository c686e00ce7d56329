//! Resolution of a document's ancestry.
//!
//! [`DocStackResolver`] asks the document's provider for a native path when
//! the deployment enables it, hands the answer to [`StackBuilder`], and
//! reports every outcome as a [`Resolution`]. All failure modes collapse to
//! `None` for callers that only want the stack.

mod builder;
mod outcome;
mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::StackBuilder;
pub use outcome::Resolution;
pub use resolver::{Collaborators, DocStackResolver};
