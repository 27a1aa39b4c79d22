use std::path::PathBuf;

use clap::Args;
use ebs_core::CodecOptions;

use crate::CliResult;

/// Hides data across the highest entropy blocks of one or many images
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier images, used readonly. The order does not matter.
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image files",
        required = true,
        num_args = 1..
    )]
    pub images: Vec<PathBuf>,

    /// Folder that receives one PNG per carrier image
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        required = true
    )]
    pub output_folder: PathBuf,

    /// File to hide in the images
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        ebs_core::commands::hide(
            &self.images,
            &self.output_folder,
            self.data_file,
            self.message,
            options,
        )
    }
}
