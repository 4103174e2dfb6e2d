// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "anatomy-viewer")]
#[command(about = "Interactive 3D anatomy model viewer", long_about = None)]
pub struct Cli {
    /// Path to a glTF model; the built-in figure is used when absent
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Path to a JSON viewer configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable the overlay UI (part label and FPS)
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
