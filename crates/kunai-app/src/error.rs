use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    StoreError(#[from] kunai_store::error::StoreError),

    #[error(transparent)]
    DavError(#[from] kunai_dav::error::DavError),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
