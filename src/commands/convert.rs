use std::path::{Path, PathBuf};

use console::style;
use miette::Result;
use reframe::config::{load_file_config, FileConfig};
use reframe::prompt::{fill_options, PartialOptions};

#[allow(clippy::too_many_arguments)]
pub fn run(
    project_name: Option<String>,
    framework: Option<String>,
    ui_library: Option<String>,
    frontend_pipeline: Option<String>,
    src_path: Option<PathBuf>,
    dest_path: Option<PathBuf>,
    config: Option<PathBuf>,
    defaults: bool,
    overwrite: bool,
    skip_scaffold: bool,
    dry_run: bool,
) -> Result<()> {
    let file = match config {
        Some(path) => load_file_config(&path)?,
        None if Path::new("reframe.toml").is_file() => {
            load_file_config(Path::new("reframe.toml"))?
        }
        None => FileConfig::default(),
    };

    let partial = PartialOptions {
        project_name: project_name.or(file.project_name),
        framework: framework.or(file.framework),
        ui_library: ui_library.or(file.ui_library),
        frontend_pipeline: frontend_pipeline.or(file.frontend_pipeline),
        src_path: src_path.or(file.src_path),
        dest_path: dest_path.or(file.dest_path),
        exclude: file.exclude,
        defaults,
        overwrite,
        skip_scaffold,
    };
    let options = fill_options(partial)?;

    if dry_run {
        let plan = reframe::plan_conversion(&options)?;

        println!(
            "\n{} Dry run \u{2014} files that would be written in {}:",
            style("==>").cyan().bold(),
            style(plan.config.dest_path.display()).cyan()
        );
        for file in plan
            .pages
            .iter()
            .chain(plan.partials.iter())
            .chain(plan.extra.iter())
        {
            println!("  {} {}", style("write").green(), file.dest_rel.display());
        }
        println!(
            "\nSummary: {} pages, {} partials, {} generated files, {} skipped",
            plan.pages.len(),
            plan.partials.len(),
            plan.extra.len(),
            plan.report.skipped_count()
        );
        println!(
            "\n{} Dry run \u{2014} no files written.",
            style("\u{2139}").blue().bold()
        );
    } else {
        reframe::convert(options)?;
    }

    Ok(())
}
