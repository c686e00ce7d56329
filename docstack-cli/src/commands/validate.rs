//! Command to validate a catalog file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use docstack::catalog::{Catalog, CatalogFile};
use std::path::PathBuf;

/// Validate a catalog file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Catalog file to validate
    #[arg(value_name = "CATALOG_PATH")]
    pub catalog_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.catalog_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.catalog_path.display()
            )));
        }

        let contents = std::fs::read_to_string(&self.catalog_path)?;
        let file: CatalogFile = match serde_yaml::from_str(&contents) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Catalog file is invalid".to_string(),
                ));
            }
        };

        match Catalog::from_file(&file) {
            Ok(catalog) => {
                println!(
                    "Catalog is valid: {} providers, {} documents",
                    file.providers.len(),
                    catalog.document_count()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Catalog validation failed".to_string(),
                ))
            }
        }
    }
}
