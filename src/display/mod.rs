// Presentation-only state
//
// Nothing in here feeds back into scoring. The runner owns these lists and clears them
// whenever a round starts or the participant changes.

pub use ephemeral::{EphemeralId, EphemeralList};
pub use markers::{MarkerTone, ShotMarker};

mod ephemeral;
mod markers;
