use thiserror::Error;

/// Protocol serialization errors
#[derive(Error, Debug)]
pub enum DavError {
    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("XML output was not valid UTF-8")]
    InvalidUtf8,

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

pub type DavResult<T> = std::result::Result<T, DavError>;
