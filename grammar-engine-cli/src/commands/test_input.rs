//! `grammar-engine test-input FILE RULE INPUT` — checks whether `INPUT` is accepted by `RULE`'s
//! compiled language.
use crate::support::{ascii_symbols, compile_file, SupportError};
use clap::Args;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Args, Debug)]
pub struct TestInputArgs {
    pub file: PathBuf,
    pub rule: String,
    pub input: String,
}

#[derive(Debug, Error)]
enum TestInputError {
    #[error(transparent)]
    Support(#[from] SupportError),
    #[error("no rule named `{0}` in this grammar")]
    UnknownRule(String),
}

pub fn run(args: &TestInputArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_inner(args).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn run_inner(args: &TestInputArgs) -> Result<(), TestInputError> {
    let grammar = compile_file(&args.file)?;
    let dfa = grammar
        .get(&args.rule)
        .ok_or_else(|| TestInputError::UnknownRule(args.rule.clone()))?;
    let accepted = dfa.contains(&ascii_symbols(&args.input));
    println!("{accepted}");
    if !accepted {
        std::process::exit(1);
    }
    Ok(())
}
