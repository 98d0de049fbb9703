//! # kairos-marker
//!
//! Placement of the current-time marker within a tick sequence produced by
//! `kairos_timescale`. Pure lookup: no clock reads, no state; the caller
//! supplies "now" explicitly.

mod locate;

pub use locate::{locate_now, NowMarker};
