use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Browse, filter, and favorite a product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Products file (JSON array); defaults to the configured source or ./products.json
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Search across name and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column filter, e.g. price=20 or category=books (repeatable)
    #[arg(short, long = "filter", value_name = "COLUMN=VALUE")]
    pub filters: Vec<String>,

    /// Only show favorites
    #[arg(long)]
    pub favorites: bool,

    /// Sort key, e.g. price:desc (repeatable, first wins ties)
    #[arg(long, value_name = "COLUMN[:asc|desc]")]
    pub sort: Vec<String>,

    /// Page number, starting at 1
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub page_size: Option<usize>,

    /// Hide a column (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub hide: Vec<String>,

    /// Mark a product as selected (repeatable)
    #[arg(long, value_name = "ID")]
    pub select: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products (default)
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Toggle favorite state of one or more products
    #[command(alias = "f", display_order = 2)]
    Fav {
        /// Product ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show product details
    #[command(display_order = 3)]
    Show {
        /// Product id
        id: String,
    },

    /// List table columns and their filters
    #[command(display_order = 4)]
    Columns,

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (page-size, source, global-search)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
