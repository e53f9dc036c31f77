use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiloError {
    #[error("{silo}: activity has no '{field}' identifier")]
    MissingIdentifier {
        silo: &'static str,
        field: &'static str,
    },

    #[error("{silo}: could not determine the logged in user")]
    UnknownUser { silo: &'static str },

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("no silo registered for '{0}'")]
    UnknownSilo(String),

    #[error("a silo is already registered for '{0}'")]
    DuplicateSilo(String),
}

pub type Result<T> = std::result::Result<T, SiloError>;
