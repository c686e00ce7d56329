//! CLI command implementations.
//!
//! - `resolve`: Resolve a document's ancestry stack
//! - `validate`: Validate a catalog file
//! - `show_config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod show_config;
pub mod validate;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;
