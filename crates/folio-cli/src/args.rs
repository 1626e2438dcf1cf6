use crate::types::{InputFormat, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Page through JSON, JSON Lines, or text files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $FOLIO_CONFIG, then <config dir>/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Diagnostics are written to stderr
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of a file with its pagination bar
    Show {
        /// Input file, or `-` for stdin
        file: String,

        /// Requested page; out-of-range values are clamped
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Items per page; values below 1 are treated as 1
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,

        /// Only keep items containing this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,

        /// Interpret --filter as a regular expression
        #[arg(long, requires = "filter")]
        regex: bool,

        #[arg(long)]
        input: Option<InputFormat>,
    },

    /// Print the page-number window for a page count
    Window {
        #[arg(long, allow_negative_numbers = true)]
        total_pages: i64,

        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Pages shown on each side of the current page
        #[arg(long)]
        siblings: Option<usize>,
    },

    /// Browse a file interactively
    Browse {
        file: String,

        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,

        #[arg(long)]
        input: Option<InputFormat>,
    },
}
