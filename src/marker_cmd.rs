use anyhow::{bail, Context, Result};
use tracing::info;

use kairos_marker::locate_now;
use kairos_timescale::{derive_range, tick_sequence, Instant};

use crate::cli::MarkerArgs;
use crate::config;

pub fn run(args: MarkerArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;
    let spans = cfg.spans()?;
    if spans.is_empty() {
        bail!("config has no [[items]]; the range deriver needs at least one span");
    }
    let granularity = cfg.granularity(args.granularity.as_deref())?;
    let lead_steps = args.lead_steps.unwrap_or(cfg.view.lead_steps);
    let tick_width = args.tick_width.unwrap_or(cfg.layout.tick_width);
    let rtl = args.rtl || cfg.layout.rtl;
    let now: Instant = args.now.parse().context("parsing --now")?;

    let range = derive_range(&spans, granularity, lead_steps);
    let mut ticks = tick_sequence(range.start, range.end, granularity);
    if rtl {
        // A reversed reading direction consumes the sequence in reverse.
        ticks.reverse();
    }

    let marker = locate_now(&ticks, now, tick_width, rtl);
    info!(%now, %granularity, rtl, found = marker.is_some(), "located marker");

    if args.json {
        let doc = match marker {
            Some(m) => serde_json::json!({ "tick_index": m.tick_index, "x": m.x }),
            None => serde_json::json!({ "tick_index": null, "x": null }),
        };
        println!("{doc}");
        return Ok(());
    }

    match marker {
        Some(m) => {
            println!("tick  {}", m.tick_index);
            println!("x     {:.2}", m.x);
        }
        None => println!("now is outside the visible window"),
    }
    Ok(())
}
