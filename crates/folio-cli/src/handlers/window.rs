use crate::presentation::console::render_window;
use crate::types::OutputFormat;
use anyhow::Result;
use folio_engine::{PagePosition, PageWindow, WindowConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WindowReport {
    #[serde(flatten)]
    position: PagePosition,
    window: PageWindow,
}

pub fn handle(
    config: &WindowConfig,
    total_pages: i64,
    page: i64,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    // negative counts behave like an empty list: page 1 of 1
    let total_pages = usize::try_from(total_pages).unwrap_or(0);
    let position = PagePosition::from_request(page, total_pages);
    let window = config.build(position.current(), position.total_pages());

    if format == OutputFormat::Json {
        let report = WindowReport { position, window };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_window(&window, position.current(), color));
    }

    Ok(())
}
