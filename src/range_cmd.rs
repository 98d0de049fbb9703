use anyhow::{bail, Result};
use tracing::info;

use kairos_timescale::derive_range;

use crate::cli::RangeArgs;
use crate::config;

pub fn run(args: RangeArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;
    let spans = cfg.spans()?;
    if spans.is_empty() {
        bail!("config has no [[items]]; the range deriver needs at least one span");
    }
    let granularity = cfg.granularity(args.granularity.as_deref())?;
    let lead_steps = args.lead_steps.unwrap_or(cfg.view.lead_steps);

    let range = derive_range(&spans, granularity, lead_steps);
    info!(n_items = spans.len(), %granularity, lead_steps, "derived range");

    println!("granularity  {granularity}");
    println!("start        {}", range.start);
    println!("end          {}", range.end);
    Ok(())
}
