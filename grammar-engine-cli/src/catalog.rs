//! Filesystem-backed [`CatalogLoader`]: resolves `<import file rule>` imports relative to a base
//! directory, the minimal loader a command-line tool needs (the library itself stays filesystem
//! free).
use grammar_engine::abnf::{parse_rulelist, CatalogLoader, Rulelist};
use grammar_engine::error::RulelistError;
use std::path::PathBuf;

pub struct DirectoryCatalog {
    base: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(base: PathBuf) -> Self {
        DirectoryCatalog { base }
    }
}

impl CatalogLoader for DirectoryCatalog {
    fn load(&self, filename: &str) -> Result<Rulelist, RulelistError> {
        let path = self.base.join(filename);
        let source = std::fs::read_to_string(&path).map_err(|e| RulelistError::ImportError {
            filename: filename.to_string(),
            cause: e.to_string(),
        })?;
        parse_rulelist(&source).map_err(|e| RulelistError::ImportError {
            filename: filename.to_string(),
            cause: format!("parse error at byte {}", e.index),
        })
    }
}

/// Lists every `.abnf` file directly inside `base`, for the `catalog-list` subcommand.
pub fn list_entries(base: &std::path::Path) -> std::io::Result<Vec<String>> {
    let mut names = vec![];
    for entry in std::fs::read_dir(base)? {
        let entry = entry?;
        if entry.path().extension().is_some_and(|ext| ext == "abnf") {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
