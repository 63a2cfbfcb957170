//! squish CLI
//!
//! Shortens CSS class and id selectors across a set of stylesheets and
//! rewrites every reference in markup and scripts to match.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use squish_js::{Framework, SelectorPatterns};
use squish_pipeline::{Config, CssOutput, OutputTarget, Report, Session, list_files};

#[derive(Parser)]
#[command(
    name = "squish",
    version,
    about = "Shorten CSS class/id selectors across stylesheets, markup, and scripts"
)]
struct Cli {
    /// View directory, or comma-separated list of markup files
    #[arg(long, visible_alias = "html")]
    views: String,

    /// Stylesheet directory, or comma-separated list of CSS files.
    /// When omitted, selectors are discovered from the view files
    /// themselves (embedded style blocks) and no combined stylesheet is
    /// written.
    #[arg(long)]
    css: Option<String>,

    /// Comma-separated list of standalone script files to rewrite
    #[arg(long)]
    js: Option<String>,

    /// Comma-separated selector names to leave unrenamed
    #[arg(long)]
    ignore: Option<String>,

    /// Extension used when expanding a view directory
    #[arg(long, default_value = "html")]
    view_ext: String,

    /// Framework preset extending the selector-access call patterns
    /// (jquery, mootools)
    #[arg(long)]
    framework: Option<String>,

    /// Comma-separated custom selector-access call names
    #[arg(long)]
    selectors: Option<String>,

    /// Comma-separated class-access call names
    #[arg(long)]
    class_selectors: Option<String>,

    /// Comma-separated id-access call names
    #[arg(long)]
    id_selectors: Option<String>,

    /// File name for the combined stylesheet
    #[arg(long, default_value = "optimized.css")]
    css_file: String,

    /// Rewrite header stylesheet links to point at the combined artifact
    #[arg(long)]
    rewrite_css: bool,

    /// Write the rename maps to this JSON manifest
    #[arg(long)]
    js_manifest: Option<PathBuf>,

    /// Print the byte-savings summary
    #[arg(long)]
    show_savings: bool,

    /// Print per-file progress
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let mut session = Session::new(config);
    let report = session.run()?;

    println!(
        "renamed {} classes and {} ids",
        report.classes_renamed.bold(),
        report.ids_renamed.bold()
    );
    if cli.show_savings {
        print_savings(&report);
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<Config> {
    let (views, view_dir) = expand(&cli.views, &cli.view_ext)?;
    if views.is_empty() {
        bail!("no view files found for --views {}", cli.views);
    }

    let output = view_dir.as_ref().map_or(OutputTarget::Beside, |dir| {
        OutputTarget::Directory(PathBuf::from(format!("{}_optimized", dir.display())))
    });

    let (stylesheets, css_output) = match &cli.css {
        Some(arg) => {
            let (files, css_dir) = expand(arg, "css")?;
            let dir = css_dir
                .or_else(|| files.first().and_then(|f| f.parent().map(PathBuf::from)))
                .unwrap_or_else(|| PathBuf::from("."));
            (
                files,
                Some(CssOutput {
                    dir,
                    file_name: cli.css_file.clone(),
                }),
            )
        }
        // No stylesheets given: scan the views themselves, so embedded
        // style blocks still drive discovery.
        None => (views.clone(), None),
    };

    let scripts = match &cli.js {
        Some(arg) => expand(arg, "js")?.0,
        None => Vec::new(),
    };

    let mut patterns = SelectorPatterns::default();
    if let Some(name) = &cli.framework {
        let Ok(framework) = Framework::from_str(name) else {
            bail!("unknown framework: {name} (expected jquery or mootools)");
        };
        patterns.apply_framework(framework);
    }
    for name in cli.selectors.as_deref().map(csv).unwrap_or_default() {
        patterns.add_custom_pattern(name);
    }
    for name in cli.class_selectors.as_deref().map(csv).unwrap_or_default() {
        patterns.add_class_pattern(name);
    }
    for name in cli.id_selectors.as_deref().map(csv).unwrap_or_default() {
        patterns.add_id_pattern(name);
    }

    Ok(Config {
        stylesheets,
        views,
        scripts,
        ignore: cli.ignore.as_deref().map(csv).unwrap_or_default(),
        patterns,
        css_output,
        output,
        rewrite_links: cli.rewrite_css,
        manifest: cli.js_manifest.clone(),
        verbose: cli.verbose,
    })
}

/// Interpret an input argument as either a directory (expanded to the files
/// carrying `ext`, sorted) or a comma-separated file list.
fn expand(arg: &str, ext: &str) -> Result<(Vec<PathBuf>, Option<PathBuf>)> {
    let path = PathBuf::from(arg.trim_end_matches('/'));
    if path.is_dir() {
        let files = list_files(&path, ext)
            .with_context(|| format!("failed to list {}", path.display()))?;
        Ok((files, Some(path)))
    } else {
        Ok((csv(arg).into_iter().map(PathBuf::from).collect(), None))
    }
}

fn csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn print_savings(report: &Report) {
    for file in &report.files {
        println!(
            "  {}: {} -> {} bytes",
            file.path.display(),
            file.bytes_before,
            file.bytes_after.green()
        );
    }
    println!(
        "saved {} of {} bytes",
        report.total_saved().green().bold(),
        report.total_before()
    );
}
