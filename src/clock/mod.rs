// Round timing
//
// `SessionClock` is the pure countdown owned by a game session. `Ticker` is the async
// one-second pulse that drives it; the runner arms it only while a round is active.

pub use countdown::{ClockSignal, ClockState, SessionClock};
pub use duration::{RoundDuration, InvalidDuration};
pub use ticker::Ticker;

mod countdown;
mod duration;
mod ticker;
