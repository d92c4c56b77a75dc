use serde::{Deserialize, Serialize};

/// A point on the target surface, in percentages of the target's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPoint {
    pub x: f64,
    pub y: f64,
}

impl TargetPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in percentage units
    pub fn distance_to(&self, other: TargetPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Centre of the target box
pub const TARGET_CENTER: TargetPoint = TargetPoint::new(50.0, 50.0);

/// Ring bands as `(outer_radius_exclusive, points)`, innermost first.
/// A distance equal to a radius falls into the next band out.
pub const RING_BANDS: [(f64, u32); 5] = [(8.0, 100), (16.0, 80), (24.0, 60), (32.0, 40), (40.0, 20)];

/// Anything at or beyond this distance is a miss
pub const MISS_DISTANCE: f64 = 40.0;

/// Outcome of evaluating a single click
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotResolution {
    pub points: u32,
    pub is_miss: bool,
    pub distance: f64,
}

impl ShotResolution {
    fn from_distance(distance: f64) -> Self {
        let band = RING_BANDS
            .iter()
            .find(|(radius, _)| distance < *radius)
            .map(|(_, points)| *points);

        match band {
            Some(points) => Self {
                points,
                is_miss: false,
                distance,
            },
            None => Self {
                points: 0,
                is_miss: true,
                distance,
            },
        }
    }
}

/// Resolves a click against the default target centre (50, 50)
pub fn resolve_shot(click_x: f64, click_y: f64) -> ShotResolution {
    resolve_shot_from(click_x, click_y, TARGET_CENTER)
}

/// Resolves a click against an arbitrary centre.
///
/// Out-of-circle clicks (including ones outside the 0..100 box) are valid and score as a miss.
/// Non-finite input yields a NaN or infinite distance and therefore also a miss; callers that
/// need to reject such input check `is_finite` before getting here.
pub fn resolve_shot_from(click_x: f64, click_y: f64, center: TargetPoint) -> ShotResolution {
    let distance = TargetPoint::new(click_x, click_y).distance_to(center);
    ShotResolution::from_distance(distance)
}
