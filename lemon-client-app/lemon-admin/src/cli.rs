use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lemon_core::domain::{parse_price, MenuItemId};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(
    name = "lemon-admin",
    version,
    about = "Little Lemon - menu administration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending database migrations
    Migrate,

    /// List every menu item, name ascending
    List,

    /// Show a single menu item
    Show {
        id: MenuItemId,
    },

    /// Add a menu item
    Add {
        /// Unique dish name (max 120 characters)
        #[arg(long)]
        name: String,

        /// Price, up to 9999.99
        #[arg(long, value_parser = price_arg)]
        price: Decimal,

        #[arg(long, default_value = "")]
        description: String,

        /// Image file to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Change fields of a menu item
    Update {
        id: MenuItemId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_parser = price_arg)]
        price: Option<Decimal>,

        #[arg(long)]
        description: Option<String>,

        /// Replace the image with this file
        #[arg(long, conflicts_with = "clear_image")]
        image: Option<PathBuf>,

        /// Remove the image reference
        #[arg(long)]
        clear_image: bool,
    },

    /// Delete a menu item
    Remove {
        id: MenuItemId,
    },
}

fn price_arg(input: &str) -> Result<Decimal, String> {
    parse_price(input).map_err(|e| e.to_string())
}
