#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # docstack
//!
//! A library for resolving where a document lives: the chain of documents
//! from a provider's root down to the document itself.
//!
//! Resolution asks the document's provider for a native path (when the
//! deployment enables it), looks up the root and each document on the way,
//! and hands the assembled [`DocumentStack`] to a callback on the host's
//! primary context. Any failure along the way yields no stack.
//!
//! ## Core Types
//!
//! - [`DocumentUri`], [`DocumentDescriptor`] and [`RootDescriptor`]: provider metadata
//! - [`AbstractPath`] and [`DocumentStack`]: a path as reported, and as resolved
//! - [`resolve::DocStackResolver`] and [`resolve::StackBuilder`]: the resolution steps
//! - [`task::load_doc_stack`]: background resolution with primary-context delivery
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use docstack::catalog::Catalog;
//! use docstack::resolve::{Collaborators, DocStackResolver};
//! use docstack::{DocumentUri, Features};
//!
//! let catalog = Catalog::from_yaml(r#"
//! providers:
//!   - authority: auth
//!     roots:
//!       - root_id: home
//!         title: Home
//!         document_uri: doc://auth/0
//!     documents:
//!       - uri: doc://auth/7
//!         display_name: notes.txt
//!         mime_type: text/plain
//!         parent: doc://auth/0
//! "#).unwrap();
//!
//! let resolver = DocStackResolver::new(
//!     DocumentUri::parse("doc://auth/7").unwrap(),
//!     Features::with_find_path(),
//!     Collaborators::from_shared(Arc::new(catalog)),
//! );
//! let stack = resolver.resolve().unwrap();
//! assert_eq!(stack.breadcrumb(), vec!["Home", "notes.txt"]);
//! ```

pub mod access;
pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod path;
pub mod resolve;
pub mod root;
pub mod stack;
pub mod task;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use document::{DocumentDescriptor, DocumentFlags, DocumentUri};
pub use error::{Error, Result};
pub use features::Features;
pub use logging::{init_logger, LogLevel, Logger};
pub use path::AbstractPath;
pub use resolve::{Collaborators, DocStackResolver, Resolution, StackBuilder};
pub use root::{RootDescriptor, RootFlags};
pub use stack::DocumentStack;
pub use task::{load_doc_stack, DocStackCallback, Host, HostHandle, MainLoop};
