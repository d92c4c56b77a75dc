// Shot scoring
//
// Pure hit resolution against the concentric-ring target. No state, no rendering.

pub use engine::{
    resolve_shot, resolve_shot_from, ShotResolution, TargetPoint, MISS_DISTANCE, RING_BANDS,
    TARGET_CENTER,
};

mod engine;
