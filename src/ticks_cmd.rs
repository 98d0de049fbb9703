use anyhow::{bail, Result};
use tracing::info;

use kairos_format::{iso_week_number, month_label, weekday_label, TextStyle};
use kairos_timescale::{derive_range, tick_sequence, Granularity, Instant};

use crate::cli::TicksArgs;
use crate::config;

pub fn run(args: TicksArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;
    let spans = cfg.spans()?;
    if spans.is_empty() {
        bail!("config has no [[items]]; the range deriver needs at least one span");
    }
    let granularity = cfg.granularity(args.granularity.as_deref())?;
    let lead_steps = args.lead_steps.unwrap_or(cfg.view.lead_steps);

    let range = derive_range(&spans, granularity, lead_steps);
    let ticks = tick_sequence(range.start, range.end, granularity);
    info!(n_ticks = ticks.len(), %granularity, "seeded ticks");

    if args.json {
        let doc = serde_json::json!({
            "granularity": granularity.to_string(),
            "start": range.start.to_string(),
            "end": range.end.to_string(),
            "ticks": ticks.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    for (index, tick) in ticks.iter().enumerate() {
        println!("{index:>4}  {tick}  {}", tick_label(*tick, granularity));
    }
    Ok(())
}

/// Human header label for one tick at the given zoom level.
fn tick_label(tick: Instant, granularity: Granularity) -> String {
    match granularity {
        Granularity::Year => tick.year().to_string(),
        Granularity::QuarterYear => format!("Q{} {}", tick.month() / 3 + 1, tick.year()),
        Granularity::Month => format!("{} {}", month_label(tick, TextStyle::Long), tick.year()),
        Granularity::Week => format!("W{:02}", iso_week_number(tick)),
        Granularity::Day => format!(
            "{} {}",
            weekday_label(tick, TextStyle::Short),
            tick.day()
        ),
        Granularity::QuarterDay | Granularity::HalfDay | Granularity::Hour => {
            format!("{:02}:{:02}", tick.hour(), tick.minute())
        }
    }
}
