//! Catalog loading for the `<import file rule>` import extension. The engine itself never touches a
//! filesystem or network — callers supply a [`CatalogLoader`] and the resolver drives it,
//! tracking the chain of files visited so a cycle of imports is reported instead of looping
//! forever.
use crate::abnf::parser::parse_rulelist;
use crate::abnf::tree::Rulelist;
use crate::error::RulelistError;

/// Resolves a catalog filename (as it appears in `<import filename rule>`) to parsed ABNF source.
/// Implementations decide what a "filename" means — a path on disk, a key into an in-memory map,
/// a network fetch — the resolver only needs the parsed result.
pub trait CatalogLoader {
    fn load(&self, filename: &str) -> Result<Rulelist, RulelistError>;
}

/// A [`CatalogLoader`] backed by an in-memory map, primarily for tests and embedding scenarios
/// that don't want filesystem access.
pub struct MemoryCatalog {
    files: std::collections::HashMap<String, String>,
}

impl MemoryCatalog {
    pub fn new(files: impl IntoIterator<Item = (String, String)>) -> Self {
        MemoryCatalog {
            files: files.into_iter().collect(),
        }
    }
}

impl CatalogLoader for MemoryCatalog {
    fn load(&self, filename: &str) -> Result<Rulelist, RulelistError> {
        let source = self.files.get(filename).ok_or_else(|| RulelistError::ImportError {
            filename: filename.to_string(),
            cause: "not found in catalog".to_string(),
        })?;
        parse_rulelist(source).map_err(|e| RulelistError::ImportError {
            filename: filename.to_string(),
            cause: format!("parse error at byte {}", e.index),
        })
    }
}

/// Loads `filename` via `loader`, failing with [`RulelistError::CircularImport`] if it already
/// appears in `path` (the chain of files imported to get here).
pub(crate) fn load_checked(
    loader: &dyn CatalogLoader,
    filename: &str,
    path: &[String],
) -> Result<Rulelist, RulelistError> {
    if path.iter().any(|p| p == filename) {
        let mut cycle = path.to_vec();
        cycle.push(filename.to_string());
        return Err(RulelistError::CircularImport { path: cycle });
    }
    loader.load(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_catalog_round_trips() {
        let catalog = MemoryCatalog::new([("en.abnf".to_string(), "word = 1*ALPHA\r\n".to_string())]);
        let parsed = catalog.load("en.abnf").unwrap();
        assert_eq!(parsed.rules[0].name, "word");
    }

    #[test]
    fn missing_file_is_import_error() {
        let catalog = MemoryCatalog::new([]);
        assert!(matches!(
            catalog.load("missing.abnf"),
            Err(RulelistError::ImportError { .. })
        ));
    }

    #[test]
    fn detects_cycle_in_path() {
        let catalog = MemoryCatalog::new([("a.abnf".to_string(), "x = ALPHA\r\n".to_string())]);
        let err = load_checked(&catalog, "a.abnf", &["a.abnf".to_string()]).unwrap_err();
        assert!(matches!(err, RulelistError::CircularImport { .. }));
    }
}
