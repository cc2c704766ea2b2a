mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    match Cli::parse().command {
        Commands::Convert {
            project_name,
            framework,
            ui_library,
            frontend_pipeline,
            src_path,
            dest_path,
            config,
            defaults,
            overwrite,
            skip_scaffold,
            dry_run,
        } => commands::convert::run(
            project_name,
            framework,
            ui_library,
            frontend_pipeline,
            src_path,
            dest_path,
            config,
            defaults,
            overwrite,
            skip_scaffold,
            dry_run,
        ),
        Commands::Routes { src_path } => commands::routes::run(src_path),
        Commands::List => commands::list::run(),
    }
}
