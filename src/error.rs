use thiserror::Error;

/// Things which can go wrong when building a map.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A map needs at least one bucket to reduce hash codes into.
    #[error("Invalid configuration: bucket count must be positive, got {bucket_count}")]
    InvalidConfiguration { bucket_count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
