//! Frame scheduling.
//!
//! Render requests are coalesced by [`FrameThrottle`]; [`RefreshTicker`] tells the host
//! loop when a display refresh boundary has passed. Neither touches a clock on its own
//! unless asked, so both are deterministic under test.
//!
//! Intended usage:
//! - editing code calls `request()` as often as it likes
//! - the host loop calls `RefreshTicker::poll(now)` and, on `Some`, drives one frame

mod throttle;
mod ticker;

pub use throttle::FrameThrottle;
pub use ticker::{FrameTime, RefreshTicker};
