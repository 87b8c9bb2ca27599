use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use mockup_forge::{
    config::Config,
    icon::IconEditor,
    mockup::MockupEngine,
    text::FontLibrary,
};

#[derive(Parser)]
#[command(
    name = "mockup-forge",
    version,
    about = "Composite app screenshots into store-listing mockups and reposition icon artwork",
    long_about = "Mockup-Forge renders store-listing screenshots by compositing app captures \
into a phone-frame mockup with marketing text, and edits icon artwork by flipping and \
repositioning its arrow element."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render store-listing mockups from screenshots
    Mockups {
        /// Phone-frame artwork (PNG with transparent screen cutout)
        #[arg(short, long)]
        frame: PathBuf,

        /// Directory containing source screenshots
        #[arg(short, long)]
        screenshots: PathBuf,

        /// Output directory for the rendered mockups
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Flip and reposition the arrow element in icon artwork
    Icons {
        /// Directory containing the icon set
        #[arg(short, long)]
        assets: PathBuf,

        /// Write edited icons here instead of overwriting in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Mockup-Forge v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };
    config.validate()?;

    match cli.command {
        Command::Mockups { frame, screenshots, output } => {
            let fonts = FontLibrary::load(&config.text)
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;

            let engine = MockupEngine::new(config, fonts);
            engine.compose(&frame, &screenshots, &output).await?;

            info!("Mockups complete! Output saved to: {:?}", output);
        }
        Command::Icons { assets, output } => {
            let editor = IconEditor::new(config.icon);
            let updated = editor.process_directory(&assets, output.as_deref()).await?;

            info!("Icons complete! {} icon(s) updated", updated);
        }
    }

    Ok(())
}
