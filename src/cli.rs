use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "reframe",
    about = "Convert static HTML template kits into framework projects",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an HTML kit into a framework project
    Convert {
        /// Project name (lowercase letters, digits, dashes)
        #[arg(long)]
        project_name: Option<String>,

        /// Target framework (see `reframe list`)
        #[arg(long)]
        framework: Option<String>,

        /// UI library shipped with the kit
        #[arg(long)]
        ui_library: Option<String>,

        /// Frontend asset pipeline (gulp or vite)
        #[arg(long)]
        frontend_pipeline: Option<String>,

        /// HTML kit root (pages under <src>/src)
        #[arg(long)]
        src_path: Option<PathBuf>,

        /// Destination project directory
        #[arg(long)]
        dest_path: Option<PathBuf>,

        /// Read missing values from a reframe.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use defaults instead of prompting
        #[arg(long)]
        defaults: bool,

        /// Convert into an existing destination
        #[arg(long)]
        overwrite: bool,

        /// Skip boilerplate scaffolding
        #[arg(long)]
        skip_scaffold: bool,

        /// Show planned files without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the route map a kit would produce
    Routes {
        /// HTML kit root (pages under <src>/src)
        #[arg(default_value = "./html")]
        src_path: PathBuf,
    },

    /// List supported frameworks
    List,
}
