use crate::error::EbsError;

pub type Result<T> = std::result::Result<T, EbsError>;
