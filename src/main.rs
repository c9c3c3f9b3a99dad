#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]
use anyhow::Result;
use clap::Parser;
use produce_list::{
    cli, logging,
    model::{category::Category, Model},
    storage::{config_manager::ConfigManager, file_manager::FileManager},
    tui,
};
use std::{io, path::PathBuf};
use tracing::info;

/// Sort fruits and vegetables into a sectioned list.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// The category that new items go into when the app opens (Fruits or Vegetables)
    #[arg(long, short)]
    category: Option<Category>,

    /// Print the list to stdout after closing the app
    #[arg(long, short)]
    print: bool,

    /// Don't write a log file
    #[arg(long = "no-log")]
    no_log: bool,

    /// Override the local app storage directory (mostly for testing purposes)
    #[arg(long = "local-dir", hide = true)]
    local_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_manager = FileManager::init(args.local_dir.as_deref())?;
    let config = ConfigManager::new(&file_manager).read_config()?;
    if !args.no_log {
        logging::init(&file_manager, &config.log)?;
    }

    let default_category = args.category.unwrap_or(config.default_category);
    info!(%default_category, data_dir = %file_manager.data_dir().display(), "starting");

    let mut model = Model::new(default_category);
    tui::run(&mut model)?;

    if args.print {
        cli::print_sections(&model, &mut io::stdout().lock())?;
    }

    Ok(())
}
