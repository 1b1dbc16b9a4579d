use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "statfront", version, about = "STAT Global storefront page console")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Page fixture file (JSON); the built-in STAT Global page when omitted"
    )]
    pub page: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Session {
        #[arg(long, help = "Read events from a script file instead of stdin")]
        script: Option<String>,
    },
    Browse {
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum, default_value_t = SortOrder::Newest)]
        sort: SortOrder,
    },
    Show {
        product: String,
    },
    Validate,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    Newest,
    PriceLow,
    PriceHigh,
    Name,
}
