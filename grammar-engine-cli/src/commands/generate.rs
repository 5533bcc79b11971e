//! `grammar-engine generate FILE RULE --count 10` — enumerates accepted strings, shortest first.
use crate::support::SupportError;
use clap::Args;
use grammar_engine::iterate::iterate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    pub file: PathBuf,
    pub rule: String,
    #[arg(long, default_value_t = 10)]
    pub count: usize,
}

#[derive(Debug, Error)]
enum GenerateError {
    #[error(transparent)]
    Support(#[from] SupportError),
    #[error("no rule named `{0}` in this grammar")]
    UnknownRule(String),
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_inner(args).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn run_inner(args: &GenerateArgs) -> Result<(), GenerateError> {
    let grammar = crate::support::compile_file(&args.file)?;
    let dfa = grammar
        .get(&args.rule)
        .ok_or_else(|| GenerateError::UnknownRule(args.rule.clone()))?;
    for word in iterate(dfa).take(args.count) {
        let rendered: String = word
            .iter()
            .map(|&sym| char::from_u32(sym).unwrap_or('\u{FFFD}'))
            .collect();
        println!("{rendered}");
    }
    Ok(())
}
