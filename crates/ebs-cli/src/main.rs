use clap::Parser;
use ebs_core::{BlockSize, CodecOptions, EbsError};

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, EbsError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::with_block_size(BlockSize::new(args.block_size)?);
    log::debug!("using block size {}", args.block_size);

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Capacity(capacity) => capacity.run(options),
    }
}
