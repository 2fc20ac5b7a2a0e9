use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use oa2methods::{extract_methods_urls, Summary};
use tracing::debug;

#[derive(Debug, Args)]
pub struct Extract {
    /// OpenAPI document, JSON or YAML (.yaml/.yml)
    pub openapi_file: PathBuf,

    /// Where to write the mapping. Overwritten if it exists.
    #[arg(short, long, default_value = "method_paths.json")]
    pub output: PathBuf,
}

impl Extract {
    pub fn run(self) -> Result<()> {
        debug!(input = %self.openapi_file.display(), output = %self.output.display(), "Extracting");
        let mapping = extract_methods_urls(&self.openapi_file, &self.output)?;
        println!();
        println!("{}", Summary::new(&mapping).statistics());
        Ok(())
    }
}
