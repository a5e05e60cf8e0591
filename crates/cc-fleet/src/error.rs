use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    /// Malformed catalog data (non-finite coordinates, negative size, …).
    #[error("configuration error: {0}")]
    Config(String),

    #[error("duplicate {what} name {name:?}")]
    DuplicateName {
        what: &'static str,
        name: String,
    },

    /// Raised only under `ResolvePolicy::Strict`.
    #[error("ship {ship:?} has unresolved destination {destination:?}")]
    UnresolvedReference {
        ship:        String,
        destination: String,
    },

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
