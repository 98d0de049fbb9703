//! # kairos-timescale
//!
//! Time-scale engine for the Kairos Gantt timeline: wall-clock instants,
//! per-granularity step and padding tables, visible-range derivation, and
//! tick sequencing.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Instant"] -->|".add() / .start_of()"| A
//!     B["TaskSpan list"] -->|"derive_range()"| C["DateRange"]
//!     D["Granularity"] -->|".padding()"| C
//!     C -->|"tick_sequence()"| E["Vec of Instant"]
//!     D -->|".step()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_timescale::{derive_range, tick_sequence, Granularity, Instant, TaskSpan};
//!
//! let spans = vec![TaskSpan::new(
//!     Instant::from_ymd(2024, 2, 10),
//!     Instant::from_ymd(2024, 2, 12),
//! )];
//! let range = derive_range(&spans, Granularity::Day, 1);
//! let ticks = tick_sequence(range.start, range.end, Granularity::Day);
//! assert_eq!(ticks.len(), 23);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `instant` | Millisecond-resolution wall-clock instant and field normalization |
//! | `arith` | Single-unit offsets and truncation |
//! | `granularity` | Zoom levels with step and padding tables |
//! | `range` | Visible-range derivation from task spans |
//! | `sequence` | Tick sequence generation |
//! | `parse` | Timestamp parsing |
//! | `error` | Error types |

mod arith;
mod error;
mod granularity;
mod instant;
mod parse;
mod range;
mod sequence;

pub use error::TimescaleError;
pub use granularity::{Amount, Granularity, Pad, Padding, Step};
pub use instant::{days_in_month, Instant, TimeUnit};
pub use range::{derive_range, DateRange, TaskSpan};
pub use sequence::tick_sequence;
