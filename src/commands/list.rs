use console::style;
use miette::Result;
use reframe::config::Framework;
use reframe::emit::emitter_for;

pub fn run() -> Result<()> {
    println!("Supported frameworks:\n");
    for framework in Framework::ALL {
        let emitter = emitter_for(framework);
        let pipelines = if framework.vite_only() {
            "vite"
        } else {
            "gulp, vite"
        };
        println!(
            "  {:14} {:14} pages: {:28} pipelines: {}",
            style(framework.id()).green(),
            framework.display_name(),
            emitter.pages_root().display().to_string(),
            pipelines
        );
    }
    Ok(())
}
