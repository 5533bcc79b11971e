//! `grammar-engine to-regex FILE RULE --dialect pcre` — synthesizes a regular expression
//! equivalent to `RULE`'s compiled language via state elimination and renders it in the requested
//! dialect.
use crate::support::SupportError;
use clap::{Args, ValueEnum};
use grammar_engine::regex::{self, Dialect};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Args, Debug)]
pub struct ToRegexArgs {
    pub file: PathBuf,
    pub rule: String,
    #[arg(long, value_enum, default_value_t = DialectArg::Pcre)]
    pub dialect: DialectArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DialectArg {
    PosixBre,
    PosixEre,
    Pcre,
    Pcre2,
    EcmaScript,
    Java,
    Python,
    Ruby,
    Perl,
    Re2,
    Rust,
    Go,
    Swift,
    IRegexp,
}

impl From<DialectArg> for Dialect {
    fn from(d: DialectArg) -> Self {
        match d {
            DialectArg::PosixBre => Dialect::PosixBre,
            DialectArg::PosixEre => Dialect::PosixEre,
            DialectArg::Pcre => Dialect::Pcre,
            DialectArg::Pcre2 => Dialect::Pcre2,
            DialectArg::EcmaScript => Dialect::EcmaScript,
            DialectArg::Java => Dialect::Java,
            DialectArg::Python => Dialect::Python,
            DialectArg::Ruby => Dialect::Ruby,
            DialectArg::Perl => Dialect::Perl,
            DialectArg::Re2 => Dialect::Re2,
            DialectArg::Rust => Dialect::Rust,
            DialectArg::Go => Dialect::Go,
            DialectArg::Swift => Dialect::Swift,
            DialectArg::IRegexp => Dialect::IRegexp,
        }
    }
}

#[derive(Debug, Error)]
enum ToRegexError {
    #[error(transparent)]
    Support(#[from] SupportError),
    #[error("no rule named `{0}` in this grammar")]
    UnknownRule(String),
}

pub fn run(args: &ToRegexArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_inner(args).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn run_inner(args: &ToRegexArgs) -> Result<(), ToRegexError> {
    let grammar = crate::support::compile_file(&args.file)?;
    let dfa = grammar
        .get(&args.rule)
        .ok_or_else(|| ToRegexError::UnknownRule(args.rule.clone()))?
        .minimize();
    let tree = regex::synthesize(&dfa);
    let rendered = regex::emit(&tree, args.dialect.into());
    println!("{rendered}");
    Ok(())
}
