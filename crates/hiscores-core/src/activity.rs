use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

// The hiscores format reserves -1 in both fields to mean "no entry".
const UNRANKED: i32 = -1;

/// A player's standing in a single hiscores activity.
///
/// Rank and score are stored exactly as the hiscores report them,
/// including the `-1` unranked sentinel, so equality and hashing follow
/// the raw pair. The accessors translate the sentinel into `None` so
/// callers never handle `-1` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    rank: i32,
    score: i32,
}

impl Activity {
    /// Create an activity from already-parsed values.
    ///
    /// Fails if `rank` is neither -1 nor positive, or if `score` is
    /// neither -1 nor non-negative.
    pub fn new(rank: i32, score: i32) -> Result<Self> {
        if rank != UNRANKED && rank <= 0 {
            return Err(Error::InvalidRank(rank));
        }
        if score < UNRANKED {
            return Err(Error::InvalidScore(score));
        }
        Ok(Self { rank, score })
    }

    /// Parse an activity from the fields of one hiscores row.
    ///
    /// Returns `None` if fewer than two fields are present, if either
    /// field is not a whole decimal integer, or if the parsed pair is
    /// outside the rank/score domain. Fields past the second are
    /// ignored.
    pub fn from_record<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        if fields.len() < 2 {
            return None;
        }

        let rank: i32 = fields[0].as_ref().parse().ok()?;
        let score: i32 = fields[1].as_ref().parse().ok()?;

        match Self::new(rank, score) {
            Ok(activity) => Some(activity),
            Err(err) => {
                debug!("Discarding activity row: {}", err);
                None
            }
        }
    }

    /// Split one comma-separated hiscores line and parse it.
    ///
    /// The format carries no quoting or escaping, so a plain split is
    /// sufficient.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        Self::from_record(&fields)
    }

    /// The player's rank in the activity, or `None` if unranked.
    pub fn rank(&self) -> Option<i32> {
        if self.rank == UNRANKED {
            None
        } else {
            Some(self.rank)
        }
    }

    /// The player's score in the activity, or `None` if unranked.
    pub fn score(&self) -> Option<i32> {
        if self.score == UNRANKED {
            None
        } else {
            Some(self.score)
        }
    }
}
