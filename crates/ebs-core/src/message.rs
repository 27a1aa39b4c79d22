use std::fs;
use std::path::Path;

use log::error;

use crate::error::EbsError;
use crate::result::Result;

/// The payload that gets hidden, a plain byte buffer of up to `u64::MAX` bytes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Message {
    data: Vec<u8>,
}

impl Message {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }

    /// reads the whole file as message
    pub fn from_file(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        fs::read(file).map(Self::new).map_err(|source| {
            error!("Error reading data file {file:?}: {source}");
            EbsError::ReadError { source }
        })
    }

    /// writes the raw message bytes to `file`
    pub fn save_as(&self, file: impl AsRef<Path>) -> Result<()> {
        let file = file.as_ref();
        fs::write(file, &self.data).map_err(|source| {
            error!("Error writing message to {file:?}: {source}");
            EbsError::WriteError { source }
        })
    }

    /// length in bytes, as stored in the length header
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for Message {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Message {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<Message> for Vec<u8> {
    fn from(message: Message) -> Self {
        message.into_bytes()
    }
}
