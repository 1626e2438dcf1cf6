use crate::config::Config;
use crate::input;
use crate::presentation::tui::{BrowseState, TuiRenderer};
use crate::types::InputFormat;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;

pub fn handle(config: &Config, file: &str, page_size: i64, input_format: InputFormat) -> Result<()> {
    if file == "-" {
        bail!("browse reads keys from the terminal; pass a file instead of stdin");
    }
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `folio show` instead");
    }

    let items = input::load(file, input_format)?;
    tracing::info!(items = items.len(), "starting browser");

    let state = BrowseState::new(items, page_size, config.window);
    TuiRenderer::new(file, state).run()
}
