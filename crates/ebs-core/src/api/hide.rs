use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;

use crate::media::image::io;
use crate::media::{BlockSize, CodecOptions};
use crate::{codec, EbsError, Message};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    images: Vec<PathBuf>,
    output_folder: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_block_size(mut self, block_size: BlockSize) -> Self {
        self.options.block_size = block_size;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Hide the content of this file, takes precedence over a text message
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.images.push(image.as_ref().to_path_buf());
        self
    }

    pub fn with_images(mut self, images: Vec<PathBuf>) -> Self {
        self.images.extend(images);
        self
    }

    /// Every carrier image is written into this folder as `<file stem>.png`
    pub fn into_output_folder<A: AsRef<Path>>(mut self, output_folder: A) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), EbsError> {
        if self.images.is_empty() {
            return Err(EbsError::CarrierNotSet);
        }
        let Some(output_folder) = self.output_folder else {
            return Err(EbsError::TargetNotSet);
        };
        let message = match (self.file, self.message) {
            (Some(file), _) => Message::from_file(file)?,
            (None, Some(text)) => Message::from_text(&text),
            (None, None) => return Err(EbsError::MissingMessage),
        };
        let targets = output_files(&self.images, &output_folder)?;

        let mut images = self
            .images
            .iter()
            .map(io::open)
            .collect::<Result<Vec<_>, _>>()?;

        codec::embed(&mut images, message.as_bytes(), self.options.block_size)?;

        for (image, target) in images.iter().zip(&targets) {
            debug!("writing carrier image {target:?}");
            io::save_as(image, target)?;
        }

        Ok(())
    }
}

/// `<output_folder>/<file stem>.png` for every image, file stems have to be unique
fn output_files(images: &[PathBuf], output_folder: &Path) -> Result<Vec<PathBuf>, EbsError> {
    let mut seen = HashSet::new();
    images
        .iter()
        .map(|image| {
            let mut name: OsString = image.file_stem().ok_or(EbsError::InvalidFileName)?.into();
            if !seen.insert(name.clone()) {
                return Err(EbsError::InvalidFileName);
            }
            name.push(".png");

            Ok(output_folder.join(name))
        })
        .collect()
}
