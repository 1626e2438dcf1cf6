use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::input::Filter;
use crate::logging;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let color =
        !cli.no_color && cli.format == OutputFormat::Plain && std::io::stdout().is_terminal();

    match cli.command {
        Commands::Show {
            file,
            page,
            page_size,
            filter,
            regex,
            input,
        } => {
            let filter = filter
                .as_deref()
                .map(|text| Filter::new(text, regex))
                .transpose()?;

            handlers::show::handle(
                &config,
                &file,
                page,
                page_size.unwrap_or(config.page_size),
                filter.as_ref(),
                input.unwrap_or(config.input),
                cli.format,
                color,
            )
        }

        Commands::Window {
            total_pages,
            page,
            siblings,
        } => {
            let mut window = config.window;
            if let Some(siblings) = siblings {
                window = window.with_siblings(siblings);
            }
            handlers::window::handle(&window, total_pages, page, cli.format, color)
        }

        Commands::Browse {
            file,
            page_size,
            input,
        } => handlers::browse::handle(
            &config,
            &file,
            page_size.unwrap_or(config.page_size),
            input.unwrap_or(config.input),
        ),
    }
}
