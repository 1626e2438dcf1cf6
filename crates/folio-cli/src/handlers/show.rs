use crate::config::Config;
use crate::input::{self, Filter, Item};
use crate::presentation::console::render_page;
use crate::types::{InputFormat, OutputFormat};
use anyhow::Result;
use folio_engine::{PageStateManager, PageView};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    config: &Config,
    file: &str,
    page: i64,
    page_size: i64,
    filter: Option<&Filter>,
    input_format: InputFormat,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let items = input::load(file, input_format)?;
    let visible = input::apply(&items, filter);

    let mut manager =
        PageStateManager::new(visible.len(), page_size).with_window_config(config.window);
    manager.set_page(page);

    let view: PageView<'_, &Item> = manager.view(&visible);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render_page(&view, color));
    }

    Ok(())
}
