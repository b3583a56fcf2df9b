use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::{display, query, store};

/// Show the reading count and the most frequently drawn cards
pub fn run(config: &Config, ledger: &Path, json: bool) -> Result<()> {
    let readings = store::load(ledger)?;
    let summary = query::summarize(&readings, config.top_cards);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let styled = display::styled_output(config.display.color);
        let markdown = Renderer::new(styled).render_summary(&summary);
        display::print_markdown(&markdown, styled);
    }

    Ok(())
}
