use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no [{provider}] section in the credentials file")]
    MissingProvider { provider: String },

    #[error("missing or empty '{field}' in the [{provider}] section")]
    MissingField {
        provider: String,
        field: &'static str,
    },

    #[error("failed to read credentials file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse credentials file: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database file '{path}' not found; run `salesdb init --db {path}` to create it")]
    MissingDatabase { path: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
