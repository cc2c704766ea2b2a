use std::path::PathBuf;

use console::style;
use miette::Result;
use reframe::restructure::build_route_map;
use reframe::scan::scan_pages;
use reframe::vocab::Vocabulary;

pub fn run(src_path: PathBuf) -> Result<()> {
    let pages_path = src_path.join("src");
    let partials = pages_path.join("partials");
    let assets = pages_path.join("assets");

    let pages = scan_pages(&pages_path, &[&partials, &assets], &[])?;
    let route_map = build_route_map(pages.iter().map(|p| p.rel.as_path()), &Vocabulary::default());

    let width = route_map.keys().map(String::len).max().unwrap_or(0);
    for (source, route) in &route_map {
        println!("  {:width$}  {}", source, style(route).cyan());
    }
    println!("\n{} pages", route_map.len());

    Ok(())
}
