use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Placeholder '{0}' produces blocked content when sanitizing")]
    UnsafePlaceholder(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

pub type Result<T> = std::result::Result<T, Error>;
