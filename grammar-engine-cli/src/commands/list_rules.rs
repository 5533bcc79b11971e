//! `grammar-engine list-rules FILE` — prints every rule name defined in an ABNF file, along with
//! its direct dependencies (other rules, builtins, and imports).
use crate::support::{compile_file, SupportError};
use clap::Args;
use grammar_engine::abnf::{deps, parse_rulelist};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Args, Debug)]
pub struct ListRulesArgs {
    /// ABNF source file.
    pub file: PathBuf,
    /// Also compile every rule, failing loudly if any does not compile (catches recursive rules
    /// and prose-vals up front instead of only when something downstream needs that rule's DFA).
    #[arg(long)]
    pub verify: bool,
}

#[derive(Debug, Error)]
enum ListRulesError {
    #[error("failed to read `{0}`: {1}")]
    Io(String, std::io::Error),
    #[error(transparent)]
    Parse(#[from] grammar_engine::error::ParseError),
    #[error(transparent)]
    Support(#[from] SupportError),
}

pub fn run(args: &ListRulesArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_inner(args).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn run_inner(args: &ListRulesArgs) -> Result<(), ListRulesError> {
    let source = std::fs::read_to_string(&args.file)
        .map_err(|e| ListRulesError::Io(args.file.display().to_string(), e))?;
    let rulelist = parse_rulelist(&source)?;
    let analysed = deps::analyse(&rulelist);
    let cycles = deps::recursive_rules(&analysed);

    for rule in &rulelist.rules {
        let d = analysed.get(&rule.name).cloned().unwrap_or_default();
        let mut parts = vec![];
        if !d.rules.is_empty() {
            let mut names: Vec<_> = d.rules.into_iter().collect();
            names.sort();
            parts.push(format!("rules: {}", names.join(", ")));
        }
        if !d.builtins.is_empty() {
            let mut names: Vec<_> = d.builtins.into_iter().collect();
            names.sort();
            parts.push(format!("builtins: {}", names.join(", ")));
        }
        if !d.imports.is_empty() {
            let names: Vec<String> = d
                .imports
                .into_iter()
                .map(|(r, f)| format!("{r}@{f}"))
                .collect();
            parts.push(format!("imports: {}", names.join(", ")));
        }
        if cycles.contains_key(&rule.name) {
            parts.push("RECURSIVE".to_string());
        }
        if parts.is_empty() {
            println!("{}", rule.name);
        } else {
            println!("{} ({})", rule.name, parts.join("; "));
        }
    }

    if args.verify {
        compile_file(&args.file)?;
        log::info!("every rule in {} compiles", args.file.display());
    }

    Ok(())
}
