use cc_core::CcError;
use cc_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    Config(#[from] CcError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type NavResult<T> = Result<T, NavError>;
