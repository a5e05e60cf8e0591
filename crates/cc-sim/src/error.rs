use cc_core::CcError;
use cc_nav::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CcError),

    #[error(transparent)]
    Nav(#[from] NavError),
}

pub type SimResult<T> = Result<T, SimError>;
