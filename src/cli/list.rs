use std::path::Path;
use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::models::parse_date;
use crate::renderer::Renderer;
use crate::{display, query, store};

/// List readings dated within the optional `[from, to]` range
pub fn run(
    config: &Config,
    ledger: &Path,
    from: Option<String>,
    to: Option<String>,
    json: bool,
) -> Result<()> {
    let from = from.as_deref().map(parse_date).transpose()?;
    let to = to.as_deref().map(parse_date).transpose()?;

    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            warn!(%from, %to, "--from is after --to, no reading can match");
        }
    }

    let readings = store::load(ledger)?;
    let matching = query::in_range(&readings, from, to);

    if json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
    } else {
        let styled = display::styled_output(config.display.color);
        let markdown = Renderer::new(styled).render_readings(&matching);
        display::print_markdown(&markdown, styled);
    }

    Ok(())
}
