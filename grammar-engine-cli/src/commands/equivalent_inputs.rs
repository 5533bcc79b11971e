//! `grammar-engine equivalent-inputs FILE RULE INPUT` — prints a handful of strings behaviourally
//! identical to `INPUT` under `RULE` (same resulting state, hence identical future acceptance for
//! every possible continuation).
use crate::support::{ascii_symbols, SupportError};
use clap::Args;
use grammar_engine::iterate::iterate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Args, Debug)]
pub struct EquivalentInputsArgs {
    pub file: PathBuf,
    pub rule: String,
    pub input: String,
    #[arg(long, default_value_t = 10)]
    pub count: usize,
}

#[derive(Debug, Error)]
enum EquivalentInputsError {
    #[error(transparent)]
    Support(#[from] SupportError),
    #[error("no rule named `{0}` in this grammar")]
    UnknownRule(String),
}

pub fn run(args: &EquivalentInputsArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_inner(args).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn run_inner(args: &EquivalentInputsArgs) -> Result<(), EquivalentInputsError> {
    let grammar = crate::support::compile_file(&args.file)?;
    let dfa = grammar
        .get(&args.rule)
        .ok_or_else(|| EquivalentInputsError::UnknownRule(args.rule.clone()))?;
    let class = dfa.equivalent_inputs(&ascii_symbols(&args.input));
    if class.is_empty() {
        println!("(input is not live in this grammar: no continuation can ever be accepted)");
        return Ok(());
    }
    for word in iterate(&class).take(args.count) {
        let rendered: String = word
            .iter()
            .map(|&sym| char::from_u32(sym).unwrap_or('\u{FFFD}'))
            .collect();
        println!("{rendered}");
    }
    Ok(())
}
