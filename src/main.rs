use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use carpool::cli::{
    handle_config_command, handle_init_command, handle_load_command, handle_new_command,
    handle_presets_command, handle_price_command,
};
use carpool::config::{paths::DATA_DIR_ENV, CarpoolPaths, Settings};
use carpool::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "carpool",
    version,
    about = "Split weekly carpool costs between riders",
    long_about = "Carpool asks who rode in each morning and arvo trip of a week, \
                  splits the trip price between the riders and the driver, and \
                  totals what everyone owes. Results can be saved as a bundle of \
                  CSV files and loaded back later."
)]
struct Cli {
    /// Application directory (settings and saved bundles)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter a carpool's weeks interactively (the default)
    New {
        /// Folder the bundle is written to
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Don't offer to save the results
        #[arg(long)]
        no_save: bool,
    },

    /// Load a saved bundle and show its totals
    Load {
        /// Bundle folder (CARPOOL_<first>_TO_<last>)
        bundle: PathBuf,
    },

    /// Show the per-trip price and its inputs
    Price,

    /// List the rider presets
    Presets,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => CarpoolPaths::with_base_dir(dir),
        None => CarpoolPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::New {
        output: None,
        no_save: false,
    }) {
        Commands::New { output, no_save } => {
            handle_new_command(&paths, &settings, output, no_save)?;
        }
        Commands::Load { bundle } => {
            handle_load_command(&settings, &bundle)?;
        }
        Commands::Price => handle_price_command(&settings)?,
        Commands::Presets => handle_presets_command(&settings)?,
        Commands::Init => handle_init_command(&paths, &settings)?,
        Commands::Config => handle_config_command(&paths, &settings)?,
    }

    Ok(())
}
