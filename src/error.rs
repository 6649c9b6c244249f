use thiserror::Error;

use crate::info::InfoCode;

#[derive(Debug, Error)]
pub enum ProductInfoError {
    #[error("could not find a product info source")]
    NoBackendAvailable,

    #[error("could not find key for {0}")]
    KeyNotMapped(InfoCode),

    #[error("could not fetch value for key {key}: {message}")]
    BackendFetchFailed { key: String, message: String },

    #[error("could not find value for key {key}")]
    EmptyValue { key: String },

    #[error("unsupported sw version string: {0}")]
    MalformedReleaseString(String),

    #[error("unknown software: {0}")]
    UnknownFamily(String),

    #[error("unknown product: {0}")]
    UnknownHardware(String),

    #[error("can set only OSSO_VERSION, not {0}")]
    UnsupportedSetCode(InfoCode),

    #[error("block {block} write error: {source}")]
    WriteFailed {
        block: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProductInfoError>;
