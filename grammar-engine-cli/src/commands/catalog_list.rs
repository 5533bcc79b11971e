//! `grammar-engine catalog-list DIR` — lists the `.abnf` files a directory-backed catalog would
//! serve as import targets.
use clap::Args;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Args, Debug)]
pub struct CatalogListArgs {
    pub directory: PathBuf,
}

#[derive(Debug, Error)]
enum CatalogListError {
    #[error("failed to list `{0}`: {1}")]
    Io(String, std::io::Error),
}

pub fn run(args: &CatalogListArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_inner(args).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn run_inner(args: &CatalogListArgs) -> Result<(), CatalogListError> {
    let entries = crate::catalog::list_entries(&args.directory)
        .map_err(|e| CatalogListError::Io(args.directory.display().to_string(), e))?;
    for entry in entries {
        println!("{entry}");
    }
    Ok(())
}
