use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use thiserror::Error;

/// Round lengths a player may pick, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum RoundDuration {
    Four,
    #[default]
    Six,
    Ten,
    Twelve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} seconds is not an allowed round duration")]
pub struct InvalidDuration(pub u32);

impl RoundDuration {
    pub fn seconds(self) -> u32 {
        match self {
            RoundDuration::Four => 4,
            RoundDuration::Six => 6,
            RoundDuration::Ten => 10,
            RoundDuration::Twelve => 12,
        }
    }
}

impl TryFrom<u32> for RoundDuration {
    type Error = InvalidDuration;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        match seconds {
            4 => Ok(RoundDuration::Four),
            6 => Ok(RoundDuration::Six),
            10 => Ok(RoundDuration::Ten),
            12 => Ok(RoundDuration::Twelve),
            other => Err(InvalidDuration(other)),
        }
    }
}

impl From<RoundDuration> for u32 {
    fn from(duration: RoundDuration) -> Self {
        duration.seconds()
    }
}
