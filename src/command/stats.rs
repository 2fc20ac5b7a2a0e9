use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use oa2methods::{collect_method_paths, read_document, Summary};

#[derive(Debug, Args)]
pub struct Stats {
    /// OpenAPI document, JSON or YAML (.yaml/.yml)
    pub openapi_file: PathBuf,
}

impl Stats {
    pub fn run(self) -> Result<()> {
        println!("{}", self.report()?);
        Ok(())
    }

    /// Summary and per-method statistics for the document. Reads only.
    pub fn report(&self) -> Result<String> {
        let document = read_document(&self.openapi_file)?;
        let mapping = collect_method_paths(&document)?;
        let summary = Summary::new(&mapping);
        Ok(format!("{}\n\n{}", summary, summary.statistics()))
    }
}
