use thiserror::Error;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),

    #[error("carousel requires at least one slide")]
    EmptyCarousel,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("snapshot differs from expectation in: {}", .0.join(", "))]
    SnapshotMismatch(Vec<&'static str>),
}
