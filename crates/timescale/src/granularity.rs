//! Zoom granularities and their step and padding tables.
//!
//! Each granularity maps to two pieces of data: the fixed increment between
//! consecutive ticks, and the policy for widening the derived range on each
//! side. Adding a granularity means adding a row to each table, not a new
//! branch of control flow.

use std::fmt;
use std::str::FromStr;

use crate::error::TimescaleError;
use crate::instant::TimeUnit;

/// Timeline zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Year,
    QuarterYear,
    Month,
    Week,
    Day,
    QuarterDay,
    HalfDay,
    Hour,
}

/// A fixed forward step of `quantity` `unit`s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub quantity: f64,
    pub unit: TimeUnit,
}

/// Signed padding amount, either fixed or scaled by the caller's lead-step
/// count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Fixed(f64),
    PerLeadStep(f64),
}

impl Amount {
    pub(crate) fn resolve(self, lead_steps: u32) -> f64 {
        match self {
            Amount::Fixed(quantity) => quantity,
            Amount::PerLeadStep(per) => per * f64::from(lead_steps),
        }
    }
}

/// How one side of a derived range is widened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pad {
    /// Offset by `amount` of `unit`, then truncate to the start of
    /// `truncate_to`.
    OffsetThenTruncate {
        amount: Amount,
        unit: TimeUnit,
        truncate_to: TimeUnit,
    },
    /// Truncate to the start of `truncate_to`, then offset by `amount` of
    /// `unit`.
    TruncateThenOffset {
        truncate_to: TimeUnit,
        amount: Amount,
        unit: TimeUnit,
    },
    /// Truncate to the start of the day, snap back to that week's Monday,
    /// then step back seven days per lead step.
    MondayAligned,
}

/// Per-granularity padding policy for range derivation.
///
/// The sides are deliberately asymmetric (a quarter-year view pads three
/// months back but three years forward); the table reproduces the documented
/// behavior, it does not smooth it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub start: Pad,
    pub end: Pad,
}

impl Granularity {
    /// All granularities, coarsest first.
    pub const ALL: [Granularity; 8] = [
        Granularity::Year,
        Granularity::QuarterYear,
        Granularity::Month,
        Granularity::Week,
        Granularity::Day,
        Granularity::QuarterDay,
        Granularity::HalfDay,
        Granularity::Hour,
    ];

    /// The fixed increment between consecutive ticks.
    pub fn step(self) -> Step {
        let (quantity, unit) = match self {
            Granularity::Year => (1.0, TimeUnit::Year),
            Granularity::QuarterYear => (3.0, TimeUnit::Month),
            Granularity::Month => (1.0, TimeUnit::Month),
            Granularity::Week => (7.0, TimeUnit::Day),
            Granularity::Day => (1.0, TimeUnit::Day),
            Granularity::QuarterDay => (6.0, TimeUnit::Hour),
            Granularity::HalfDay => (12.0, TimeUnit::Hour),
            Granularity::Hour => (1.0, TimeUnit::Hour),
        };
        Step { quantity, unit }
    }

    /// The start/end widening applied by the range deriver.
    pub fn padding(self) -> Padding {
        use Amount::{Fixed, PerLeadStep};
        use Pad::{MondayAligned, OffsetThenTruncate, TruncateThenOffset};
        use TimeUnit::{Day, Hour, Month, Year};

        match self {
            Granularity::Year => Padding {
                start: OffsetThenTruncate {
                    amount: Fixed(-1.0),
                    unit: Year,
                    truncate_to: Year,
                },
                end: OffsetThenTruncate {
                    amount: Fixed(1.0),
                    unit: Year,
                    truncate_to: Year,
                },
            },
            Granularity::QuarterYear => Padding {
                start: OffsetThenTruncate {
                    amount: Fixed(-3.0),
                    unit: Month,
                    truncate_to: Month,
                },
                end: OffsetThenTruncate {
                    amount: Fixed(3.0),
                    unit: Year,
                    truncate_to: Year,
                },
            },
            Granularity::Month => Padding {
                start: OffsetThenTruncate {
                    amount: PerLeadStep(-1.0),
                    unit: Month,
                    truncate_to: Month,
                },
                end: OffsetThenTruncate {
                    amount: Fixed(1.0),
                    unit: Year,
                    truncate_to: Year,
                },
            },
            Granularity::Week => Padding {
                start: MondayAligned,
                end: TruncateThenOffset {
                    truncate_to: Day,
                    amount: Fixed(1.5),
                    unit: Month,
                },
            },
            Granularity::Day => Padding {
                start: TruncateThenOffset {
                    truncate_to: Day,
                    amount: PerLeadStep(-1.0),
                    unit: Day,
                },
                end: TruncateThenOffset {
                    truncate_to: Day,
                    amount: Fixed(19.0),
                    unit: Day,
                },
            },
            Granularity::QuarterDay => Padding {
                start: TruncateThenOffset {
                    truncate_to: Day,
                    amount: PerLeadStep(-1.0),
                    unit: Day,
                },
                end: TruncateThenOffset {
                    truncate_to: Day,
                    amount: Fixed(66.0),
                    unit: Hour,
                },
            },
            Granularity::HalfDay => Padding {
                start: TruncateThenOffset {
                    truncate_to: Day,
                    amount: PerLeadStep(-1.0),
                    unit: Day,
                },
                end: TruncateThenOffset {
                    truncate_to: Day,
                    amount: Fixed(108.0),
                    unit: Hour,
                },
            },
            Granularity::Hour => Padding {
                start: TruncateThenOffset {
                    truncate_to: Hour,
                    amount: PerLeadStep(-1.0),
                    unit: Hour,
                },
                end: TruncateThenOffset {
                    truncate_to: Day,
                    amount: Fixed(1.0),
                    unit: Day,
                },
            },
        }
    }

    /// Kebab-case name used in configuration and CLI flags.
    pub fn name(self) -> &'static str {
        match self {
            Granularity::Year => "year",
            Granularity::QuarterYear => "quarter-year",
            Granularity::Month => "month",
            Granularity::Week => "week",
            Granularity::Day => "day",
            Granularity::QuarterDay => "quarter-day",
            Granularity::HalfDay => "half-day",
            Granularity::Hour => "hour",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = TimescaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| TimescaleError::UnknownGranularity {
                input: s.to_string(),
            })
    }
}
