//! Command-line front end over `grammar-engine`: parses and compiles ABNF grammars, synthesizes
//! regular expressions from the results, enumerates accepted strings, and analyses concatenation
//! ambiguity. The library itself never logs or touches a filesystem; both of those concerns live
//! entirely in this binary.
mod catalog;
mod commands;
mod support;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "grammar-engine", version, about = "ABNF grammar compiler and DFA toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every rule defined in an ABNF file, with its direct dependencies.
    ListRules(commands::list_rules::ListRulesArgs),
    /// Check whether an input string is accepted by a compiled rule.
    TestInput(commands::test_input::TestInputArgs),
    /// Synthesize a regular expression equivalent to a compiled rule.
    ToRegex(commands::to_regex::ToRegexArgs),
    /// Enumerate strings accepted by a compiled rule, shortest first.
    Generate(commands::generate::GenerateArgs),
    /// Print strings behaviourally identical to a given input under a compiled rule.
    EquivalentInputs(commands::equivalent_inputs::EquivalentInputsArgs),
    /// Check whether concatenating two rules admits more than one valid split point.
    AmbiguousConcat(commands::ambiguous_concat::AmbiguousConcatArgs),
    /// List the `.abnf` files available for import from a catalog directory.
    CatalogList(commands::catalog_list::CatalogListArgs),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match &cli.command {
        Command::ListRules(args) => commands::list_rules::run(args),
        Command::TestInput(args) => commands::test_input::run(args),
        Command::ToRegex(args) => commands::to_regex::run(args),
        Command::Generate(args) => commands::generate::run(args),
        Command::EquivalentInputs(args) => commands::equivalent_inputs::run(args),
        Command::AmbiguousConcat(args) => commands::ambiguous_concat::run(args),
        Command::CatalogList(args) => commands::catalog_list::run(args),
    };
    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(2);
    }
}
