use std::path::{Path, PathBuf};

use log::debug;

use crate::media::image::io;
use crate::media::{BlockSize, CodecOptions};
use crate::{codec, EbsError, Message};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_images: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, the block size has to match the one used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_block_size(mut self, block_size: BlockSize) -> Self {
        self.options.block_size = block_size;
        self
    }

    /// One of the images that contain the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_images.push(secret_image.as_ref().to_path_buf());
        self
    }

    /// All images that contain the data to be unveiled, in any order
    pub fn from_secret_files(mut self, secret_images: Vec<PathBuf>) -> Self {
        self.secret_images.extend(secret_images);
        self
    }

    /// This is the file the raw message bytes will be saved to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Unveils the message without writing it anywhere
    pub fn unveil_message(&self) -> Result<Message, EbsError> {
        if self.secret_images.is_empty() {
            return Err(EbsError::CarrierNotSet);
        }
        let images = self
            .secret_images
            .iter()
            .map(io::open)
            .collect::<Result<Vec<_>, _>>()?;

        codec::extract(&images, self.options.block_size)
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), EbsError> {
        let Some(output_file) = self.output_file.as_ref() else {
            return Err(EbsError::TargetNotSet);
        };
        let message = self.unveil_message()?;
        debug!("writing {} unveiled bytes to {output_file:?}", message.len());

        message.save_as(output_file)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::test_utils::prepare_noise_image;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carriers: Vec<PathBuf> = (0..3)
            .map(|i| {
                let carrier = temp_dir.path().join(format!("carrier-{i}.png"));
                io::save_as(&prepare_noise_image(48, 32, 4, i), &carrier).unwrap();
                carrier
            })
            .collect();
        let secrets = temp_dir.path().join("secrets");
        std::fs::create_dir(&secrets).unwrap();

        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_images(carriers)
            .with_block_size(BlockSize::new(8).unwrap())
            .into_output_folder(&secrets)
            .execute()
            .expect("Failed to hide message in images");

        let unveiled = temp_dir.path().join("secret-message.txt");
        crate::api::unveil::prepare()
            .from_secret_file(secrets.join("carrier-2.png"))
            .from_secret_file(secrets.join("carrier-0.png"))
            .from_secret_file(secrets.join("carrier-1.png"))
            .with_block_size(BlockSize::new(8).unwrap())
            .into_output_file(&unveiled)
            .execute()
            .expect("Failed to unveil message from images");

        let secret_message = std::fs::read_to_string(unveiled).expect("Failed to read file");
        assert_eq!(secret_message, "Hello World");
    }

    #[test]
    fn should_require_images_and_output() {
        assert!(matches!(
            prepare().into_output_file("/tmp/x").execute(),
            Err(EbsError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().from_secret_file("a.png").execute(),
            Err(EbsError::TargetNotSet)
        ));
    }
}
