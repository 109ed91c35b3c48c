use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid rank: {0} (must be -1 for unranked, or positive)")]
    InvalidRank(i32),

    #[error("Invalid score: {0} (must be -1 for unranked, or non-negative)")]
    InvalidScore(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
