pub mod assets;
pub mod casing;
pub mod config;
pub mod emit;
pub mod error;
pub mod fragment;
pub mod pattern;
pub mod prompt;
pub mod report;
pub mod restructure;
pub mod rewrite;
pub mod scaffold;
pub mod scan;
pub mod vocab;

use std::path::{Path, PathBuf};

use crate::config::{Framework, Pipeline, ProjectConfig, UiLibrary};
use crate::emit::{emitter_for, route_name, RouteEntry, TemplateEmitter};
use crate::error::{ReframeError, Result};
use crate::fragment::rewrite_includes;
use crate::pattern::{PatternRegistry, VariableRegistry};
use crate::report::ConversionReport;
use crate::restructure::{build_route_map, path_key, restructure, RestructuredPath, RouteMap};
use crate::rewrite::{rewrite_links, rewrite_variables};
use crate::scan::{is_binary_file, scan_pages, ScannedPage};
use crate::vocab::Vocabulary;

/// Everything the `convert` entry point needs.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub project_name: String,
    pub framework: Framework,
    pub ui_library: UiLibrary,
    pub pipeline: Pipeline,
    pub src_path: PathBuf,
    pub dest_path: PathBuf,
    pub exclude: Vec<String>,
    pub overwrite: bool,
    pub skip_scaffold: bool,
}

impl ConvertOptions {
    pub fn to_config(&self) -> ProjectConfig {
        let mut config = ProjectConfig::new(
            self.project_name.clone(),
            self.framework,
            self.ui_library,
            self.pipeline,
            self.src_path.clone(),
            self.dest_path.clone(),
        );
        config.exclude = self.exclude.clone();
        config
    }
}

/// One file the conversion will write, relative to the project root.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub dest_rel: PathBuf,
    pub content: String,
}

/// A conversion that has been fully computed but not written to disk.
pub struct ConversionPlan {
    pub config: ProjectConfig,
    pub route_map: RouteMap,
    pub entries: Vec<RouteEntry>,
    pub pages: Vec<PlannedFile>,
    pub partials: Vec<PlannedFile>,
    /// Route tables and other generated boilerplate.
    pub extra: Vec<PlannedFile>,
    pub report: ConversionReport,
}

/// Plan a conversion: scan, restructure, rewrite — all in memory.
///
/// Per-file problems (binary data, broken encoding) become skip outcomes in
/// the plan's report; only configuration problems abort.
pub fn plan_conversion(options: &ConvertOptions) -> Result<ConversionPlan> {
    let config = options.to_config();
    config.validate()?;

    if config.dest_path.exists() && !options.overwrite {
        // An empty dir is fine
        let has_contents = std::fs::read_dir(&config.dest_path)
            .map(|mut d| d.next().is_some())
            .unwrap_or(false);
        if has_contents {
            return Err(ReframeError::DestinationExists {
                path: config.dest_path.clone(),
            });
        }
    }

    let emitter = emitter_for(config.framework);
    let registry = PatternRegistry::load_default()?;
    let variables = VariableRegistry::load_default()?;
    let vocab = Vocabulary::default();

    let skip_dirs = [config.partials_path.as_path(), config.assets_path.as_path()];
    let scanned = scan_pages(&config.pages_path, &skip_dirs, &config.exclude)?;
    let route_map = build_route_map(scanned.iter().map(|p| p.rel.as_path()), &vocab);

    let mut report = ConversionReport::new();
    let mut pages = Vec::new();
    let mut entries = Vec::new();

    for page in &scanned {
        let Some(content) = read_page(page, &mut report) else {
            continue;
        };

        let text = transform(&content, emitter.as_ref(), &registry, &variables, &route_map);

        let parent = page.rel.parent().unwrap_or_else(|| Path::new(""));
        let file_name = page
            .rel
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let restructured = restructure(&file_name, parent, &vocab);
        let page_rel =
            restructured.dest_relative(emitter.case_style(), emitter.file_extension());
        let dest_rel = emitter.pages_root().join(&page_rel);

        let source_key = path_key(&page.rel);
        let route = route_map
            .get(&source_key)
            .cloned()
            .unwrap_or_else(|| "/".to_string());
        entries.push(RouteEntry {
            source: source_key,
            view: emitter.view_ref(&page_rel),
            name: route_name(&route),
            title: text.title.clone(),
            route,
        });

        report.converted(&page.rel, &dest_rel);
        pages.push(PlannedFile {
            dest_rel,
            content: text.content,
        });
    }

    let mut partials = Vec::new();
    if config.partials_path.is_dir() {
        for partial in scan_pages(&config.partials_path, &[], &[])? {
            let Some(content) = read_page(&partial, &mut report) else {
                continue;
            };
            let text = transform(&content, emitter.as_ref(), &registry, &variables, &route_map);

            // Partials keep their own relative layout; only casing and the
            // target extension change.
            let shape = RestructuredPath {
                parent: partial.rel.parent().unwrap_or_else(|| Path::new("")).to_path_buf(),
                folders: Vec::new(),
                file_name: partial
                    .rel
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            };
            let dest_rel = emitter
                .partials_dest()
                .join(shape.dest_relative(emitter.case_style(), emitter.file_extension()));

            report.converted(&partial.rel, &dest_rel);
            partials.push(PlannedFile {
                dest_rel,
                content: text.content,
            });
        }
    }

    let mut extra = Vec::new();
    if let Some(routes_file) = emitter.routes_file(&entries, &config)? {
        extra.push(PlannedFile {
            dest_rel: routes_file.dest_rel,
            content: routes_file.content,
        });
    }

    Ok(ConversionPlan {
        config,
        route_map,
        entries,
        pages,
        partials,
        extra,
        report,
    })
}

struct TransformedText {
    content: String,
    title: Option<String>,
}

fn transform(
    content: &str,
    emitter: &dyn TemplateEmitter,
    registry: &PatternRegistry,
    variables: &VariableRegistry,
    route_map: &RouteMap,
) -> TransformedText {
    let outcome = rewrite_includes(content, registry, |path, params, _| {
        emitter.render_include(path, params)
    });
    let text = rewrite_links(&outcome.text, emitter.link_mode(), route_map);
    let text = rewrite_variables(&text, variables, emitter.variable_replacement());
    TransformedText {
        content: text,
        title: outcome.title,
    }
}

fn read_page(page: &ScannedPage, report: &mut ConversionReport) -> Option<String> {
    if is_binary_file(&page.abs) {
        report.skipped(&page.rel, "binary content");
        return None;
    }
    match std::fs::read_to_string(&page.abs) {
        Ok(content) => Some(content),
        Err(e) => {
            report.skipped(&page.rel, format!("unreadable or not UTF-8 ({e})"));
            None
        }
    }
}

/// Write a planned conversion to disk and copy the asset tree.
pub fn execute_conversion(plan: ConversionPlan) -> Result<ConversionReport> {
    let config = &plan.config;
    std::fs::create_dir_all(&config.dest_path).map_err(|e| ReframeError::Io {
        context: format!("creating destination {}", config.dest_path.display()),
        source: e,
    })?;

    for file in plan
        .pages
        .iter()
        .chain(plan.partials.iter())
        .chain(plan.extra.iter())
    {
        let dest = config.dest_path.join(&file.dest_rel);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ReframeError::Io {
                context: format!("creating directory {}", parent.display()),
                source: e,
            })?;
        }
        std::fs::write(&dest, &file.content).map_err(|e| ReframeError::Io {
            context: format!("writing {}", dest.display()),
            source: e,
        })?;
    }

    let emitter = emitter_for(config.framework);
    let assets_dest = config.dest_path.join(emitter.assets_root());
    let copied = assets::copy_assets(&config.assets_path, &assets_dest)?;

    let mut report = plan.report;
    report.assets_copied = copied;
    report.print_summary(&config.dest_path);
    Ok(report)
}

/// Scaffold the target boilerplate and convert the kit into it.
pub fn convert(options: ConvertOptions) -> Result<ConversionReport> {
    let plan = plan_conversion(&options)?;

    if !options.skip_scaffold {
        let emitter = emitter_for(plan.config.framework);
        scaffold::run(&plan.config, emitter.as_ref())?;
    }

    execute_conversion(plan)
}
