use anyhow::Result;
use clap::{Parser, Subcommand};

use storytime::config::{paths::StorytimePaths, settings::Settings};
use storytime::display;
use storytime::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "storytime",
    version,
    about = "Terminal-based companion for a children's story service",
    long_about = "Storytime brings a children's story service to the terminal. \
                  It starts with an onboarding wizard that collects reading \
                  preferences: age range, story styles, and reading voice."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive onboarding wizard
    #[command(alias = "ui")]
    Tui,

    /// List the selectable preference options
    Options,

    /// Initialize the configuration directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = StorytimePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        // The wizard is the app's front door; run it by default
        None | Some(Commands::Tui) => {
            run_tui(&mut settings, &paths)?;
        }
        Some(Commands::Options) => {
            print!("{}", display::options::format_catalog());
        }
        Some(Commands::Init) => {
            println!("Initializing Storytime at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'storytime' to start the onboarding wizard.");
        }
        Some(Commands::Config) => {
            println!("Storytime Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!();
            println!("Settings:");
            println!("  Locale:               {}", settings.locale);
            println!("  Onboarding completed: {}", settings.onboarding_completed);
        }
    }

    Ok(())
}
