use serde::Serialize;

use super::EphemeralId;
use crate::game::Shot;

/// Colour tier used by the renderer for a hit marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerTone {
    Bullseye,
    Inner,
    Outer,
    Miss,
}

impl MarkerTone {
    pub fn for_shot(shot: &Shot) -> Self {
        match shot.points {
            _ if shot.is_miss => MarkerTone::Miss,
            p if p >= 80 => MarkerTone::Bullseye,
            p if p >= 40 => MarkerTone::Inner,
            _ => MarkerTone::Outer,
        }
    }
}

/// Transient feedback for one shot, as sent to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotMarker {
    /// Stable key for the renderer. Two shots in the same millisecond still differ.
    pub id: EphemeralId,
    #[serde(flatten)]
    pub shot: Shot,
    pub tone: MarkerTone,
    pub label: String,
}

impl ShotMarker {
    pub fn new(id: EphemeralId, shot: &Shot) -> Self {
        let label = if shot.is_miss {
            "MISS".to_string()
        } else {
            format!("+{}", shot.points)
        };

        Self {
            id,
            shot: *shot,
            tone: MarkerTone::for_shot(shot),
            label,
        }
    }
}
