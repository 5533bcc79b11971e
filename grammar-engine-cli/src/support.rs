//! Shared "load an ABNF file and compile it" plumbing used by several subcommands. Intentionally
//! narrow: it does not attempt to be a catch-all CLI error type, each subcommand still defines its
//! own local error enum (see `main.rs`) and wraps this one in it with `#[from]`.
use crate::catalog::DirectoryCatalog;
use grammar_engine::abnf::{compile_rulelist, parse_rulelist, CompiledGrammar};
use grammar_engine::error::{ParseError, RulelistError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupportError {
    #[error("failed to read `{path}`: {cause}")]
    Io { path: String, cause: std::io::Error },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Rulelist(#[from] RulelistError),
}

pub fn compile_file(path: &Path) -> Result<CompiledGrammar, SupportError> {
    let source = std::fs::read_to_string(path).map_err(|cause| SupportError::Io {
        path: path.display().to_string(),
        cause,
    })?;
    let rulelist = parse_rulelist(&source)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let catalog = DirectoryCatalog::new(base.to_path_buf());
    log::debug!("compiling {} rule(s) from {}", rulelist.rules.len(), path.display());
    Ok(compile_rulelist(&rulelist, Some(&catalog))?)
}

pub fn ascii_symbols(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}
