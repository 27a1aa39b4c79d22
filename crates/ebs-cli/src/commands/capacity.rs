use std::path::PathBuf;

use clap::Args;
use ebs_core::CodecOptions;

use crate::CliResult;

/// Prints how many bytes a collection of images can hide
#[derive(Args, Debug)]
pub struct CapacityArgs {
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image files",
        required = true,
        num_args = 1..
    )]
    pub images: Vec<PathBuf>,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let bytes = ebs_core::commands::capacity(&self.images, options)?;
        println!("{bytes}");

        Ok(())
    }
}
