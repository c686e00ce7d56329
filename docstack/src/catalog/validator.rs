//! Catalog consistency checks.

use std::collections::{HashMap, HashSet};

use crate::catalog::schema::{CatalogFile, ProviderSpec};
use crate::document::DocumentUri;
use crate::error::{Error, Result};

/// Validates catalog files before they are indexed.
///
/// # Examples
///
/// ```
/// use docstack::catalog::{CatalogFile, CatalogValidator};
///
/// let file: CatalogFile = serde_yaml::from_str(r#"
/// providers:
///   - authority: auth
///   - authority: auth
/// "#).unwrap();
/// assert!(CatalogValidator::validate(&file).is_err());
/// ```
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate a complete catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(file: &CatalogFile) -> Result<()> {
        let mut authorities = HashSet::new();

        for (index, provider) in file.providers.iter().enumerate() {
            let field = format!("providers[{index}]");

            if provider.authority.trim().is_empty() {
                return Err(validation(format!("{field}.authority"), "cannot be empty"));
            }
            if !authorities.insert(provider.authority.as_str()) {
                return Err(validation(
                    format!("{field}.authority"),
                    format!("duplicate authority '{}'", provider.authority),
                ));
            }

            Self::validate_provider(&field, provider)?;
        }

        Ok(())
    }

    fn validate_provider(field: &str, provider: &ProviderSpec) -> Result<()> {
        let authority = provider.authority.as_str();

        let mut root_ids = HashSet::new();
        let mut root_documents = HashSet::new();
        for (index, root) in provider.roots.iter().enumerate() {
            let root_field = format!("{field}.roots[{index}]");
            if root.root_id.trim().is_empty() {
                return Err(validation(format!("{root_field}.root_id"), "cannot be empty"));
            }
            if !root_ids.insert(root.root_id.as_str()) {
                return Err(validation(
                    format!("{root_field}.root_id"),
                    format!("duplicate root id '{}'", root.root_id),
                ));
            }
            if let Some(uri) = &root.document_uri {
                Self::check_authority(&format!("{root_field}.document_uri"), uri, authority)?;
                root_documents.insert(uri);
            }
        }

        let mut parents: HashMap<&DocumentUri, Option<&DocumentUri>> = HashMap::new();
        for (index, doc) in provider.documents.iter().enumerate() {
            let doc_field = format!("{field}.documents[{index}]");
            Self::check_authority(&format!("{doc_field}.uri"), &doc.uri, authority)?;
            if parents.insert(&doc.uri, doc.parent.as_ref()).is_some() {
                return Err(validation(
                    format!("{doc_field}.uri"),
                    format!("duplicate document '{}'", doc.uri),
                ));
            }
        }

        for (index, doc) in provider.documents.iter().enumerate() {
            if let Some(parent) = &doc.parent {
                if !parents.contains_key(parent) && !root_documents.contains(parent) {
                    return Err(validation(
                        format!("{field}.documents[{index}].parent"),
                        format!("unknown parent '{parent}'"),
                    ));
                }
            }
        }

        Self::check_acyclic(field, &parents)
    }

    fn check_authority(field: &str, uri: &DocumentUri, authority: &str) -> Result<()> {
        if uri.authority() == authority {
            Ok(())
        } else {
            Err(validation(
                field.to_string(),
                format!("'{uri}' does not belong to authority '{authority}'"),
            ))
        }
    }

    fn check_acyclic(
        field: &str,
        parents: &HashMap<&DocumentUri, Option<&DocumentUri>>,
    ) -> Result<()> {
        let mut cleared: HashSet<&DocumentUri> = HashSet::new();

        for &start in parents.keys() {
            let mut trail = HashSet::new();
            let mut current = Some(start);

            while let Some(uri) = current {
                if cleared.contains(uri) {
                    break;
                }
                if !trail.insert(uri) {
                    return Err(validation(
                        format!("{field}.documents"),
                        format!("parent cycle through '{uri}'"),
                    ));
                }
                current = parents.get(uri).copied().flatten();
            }

            cleared.extend(trail);
        }

        Ok(())
    }
}

fn validation(field: String, message: impl Into<String>) -> Error {
    Error::Validation {
        field,
        message: message.into(),
    }
}
