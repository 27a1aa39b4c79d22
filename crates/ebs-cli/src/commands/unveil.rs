use std::path::PathBuf;

use clap::Args;
use ebs_core::CodecOptions;

use crate::CliResult;

/// Unveils data from a collection of images, in any order
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source images that contain secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image files",
        required = true,
        num_args = 1..
    )]
    pub images: Vec<PathBuf>,

    /// Final data will be stored in that file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output file",
        required = true
    )]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        ebs_core::commands::unveil(&self.images, &self.output_file, options)
    }
}
