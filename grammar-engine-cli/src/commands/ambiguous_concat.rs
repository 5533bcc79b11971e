//! `grammar-engine ambiguous-concat FILE RULE_A RULE_B` — reports whether concatenating
//! `RULE_A` then `RULE_B` can be split into the two pieces at more than one point, and if so
//! prints a handful of strings witnessing the overlap.
use crate::support::SupportError;
use clap::Args;
use grammar_engine::ambiguity::analyse_concat_ambiguity;
use grammar_engine::iterate::iterate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Args, Debug)]
pub struct AmbiguousConcatArgs {
    pub file: PathBuf,
    pub rule_a: String,
    pub rule_b: String,
    #[arg(long, default_value_t = 5)]
    pub witnesses: usize,
}

#[derive(Debug, Error)]
enum AmbiguousConcatError {
    #[error(transparent)]
    Support(#[from] SupportError),
    #[error("no rule named `{0}` in this grammar")]
    UnknownRule(String),
}

pub fn run(args: &AmbiguousConcatArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_inner(args).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn run_inner(args: &AmbiguousConcatArgs) -> Result<(), AmbiguousConcatError> {
    let grammar = crate::support::compile_file(&args.file)?;
    let a = grammar
        .get(&args.rule_a)
        .ok_or_else(|| AmbiguousConcatError::UnknownRule(args.rule_a.clone()))?;
    let b = grammar
        .get(&args.rule_b)
        .ok_or_else(|| AmbiguousConcatError::UnknownRule(args.rule_b.clone()))?;
    let result = analyse_concat_ambiguity(a, b);
    if !result.is_ambiguous() {
        println!("unambiguous: every accepted string splits into {} . {} exactly one way", args.rule_a, args.rule_b);
        return Ok(());
    }
    println!("ambiguous: the following strings admit more than one split point");
    for word in iterate(&result.overlap).take(args.witnesses) {
        let rendered: String = word
            .iter()
            .map(|&sym| char::from_u32(sym).unwrap_or('\u{FFFD}'))
            .collect();
        println!("  {rendered}");
    }
    Ok(())
}
