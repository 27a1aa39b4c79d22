use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EbsError {
    /// Represents a block side that is 0, not a multiple of 4 or not below 256
    #[error("Bad block size: {0} (must be a non zero multiple of 4 below 256)")]
    BadBlockSize(u64),

    /// Represents an image with a zero dimension or a pixel buffer that does not match them
    #[error("Image #{index} is invalid: zero dimension or pixel buffer of the wrong length")]
    InvalidImage { index: usize },

    /// Represents a message that does not fit into the usable capacity of the images
    #[error("Capacity Error: the message needs {required} bytes but the images can carry only {available} bytes")]
    Overflow { required: u64, available: u64 },

    /// Represents a decoded length header that the images could never have carried.
    /// Usually caused by a block size mismatch or images without any secret.
    #[error("Invalid message: the header declares {declared} bytes but the images can carry only {available} bytes")]
    InvalidMessage { declared: u64, available: u64 },

    /// Represents a failed allocation while building block indices or the output buffer
    #[error("Out of memory")]
    OutOfMemory(#[from] TryReserveError),

    /// Represents an unsupported carrier media. For example, a text file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an error caused by an invalid filename, for example a path without a file stem
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
