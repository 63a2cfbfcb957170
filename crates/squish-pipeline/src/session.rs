//! One end-to-end selector-shortening run.

use std::fs;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use squish_common::warning::{clear_warnings, warn_once};
use squish_css::{
    BasicMinimizer, DiscoveredSelectors, Minimizer, NameAllocator, RenameMaps, build_maps,
    rewrite_stylesheet,
};
use squish_html::rewrite_markup;
use squish_js::rewrite_script;

use crate::config::{Config, OutputTarget};
use crate::error::{Error, Result};
use crate::manifest;
use crate::report::Report;

/// A single run: owns the configuration, the name allocator, and the
/// minimizer for its lifetime.
///
/// Sessions are independent — each starts with fresh counters, so the same
/// inputs always produce the same outputs. Running one session twice also
/// resets its counters between runs; nothing leaks from run to run.
pub struct Session {
    config: Config,
    allocator: NameAllocator,
    minimizer: Box<dyn Minimizer>,
}

impl Session {
    /// Create a session using the built-in minimizer.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_minimizer(config, Box::new(BasicMinimizer))
    }

    /// Create a session with a caller-supplied minimizer.
    #[must_use]
    pub fn with_minimizer(config: Config, minimizer: Box<dyn Minimizer>) -> Self {
        Self {
            config,
            allocator: NameAllocator::new(),
            minimizer,
        }
    }

    /// Run the pipeline: discover selectors across every stylesheet, build
    /// the rename maps, then rewrite and write every artifact.
    ///
    /// The maps are complete before the first rewrite happens. A rewrite
    /// against a partial map would permanently miss occurrences — there is
    /// no second pass — so discovery and mapping always finish first.
    ///
    /// # Errors
    ///
    /// Fails if any configured input is missing, or on any read/write
    /// failure. The run aborts at the first error.
    pub fn run(&mut self) -> Result<Report> {
        clear_warnings();
        self.allocator.reset();
        self.check_inputs()?;
        self.prepare_outputs()?;

        let mut stylesheets: Vec<(PathBuf, String)> = Vec::new();
        for path in &self.config.stylesheets {
            let css = read(path)?;
            stylesheets.push((path.clone(), css));
        }

        let mut discovered = DiscoveredSelectors::new();
        for (_, css) in &stylesheets {
            discovered.scan(css);
        }
        let maps = build_maps(&discovered, &self.config.ignore, &mut self.allocator);

        let mut report = Report {
            classes_renamed: maps.classes.len(),
            ids_renamed: maps.ids.len(),
            ..Report::default()
        };

        self.write_combined_css(&stylesheets, &maps, &mut report)?;
        self.rewrite_views(&maps, &mut report)?;
        self.rewrite_scripts(&maps, &mut report)?;
        self.write_manifest(&maps)?;

        Ok(report)
    }

    /// Every configured input must exist before anything is rewritten.
    fn check_inputs(&self) -> Result<()> {
        let inputs = self
            .config
            .stylesheets
            .iter()
            .chain(&self.config.views)
            .chain(&self.config.scripts);
        for path in inputs {
            if !path.is_file() {
                return Err(Error::MissingInput { path: path.clone() });
            }
        }
        Ok(())
    }

    /// Delete artifacts from previous runs and create output directories.
    fn prepare_outputs(&self) -> Result<()> {
        if let Some(css) = &self.config.css_output {
            remove_if_exists(&css.combined_path())?;
            remove_if_exists(&css.minimized_path())?;
            fs::create_dir_all(&css.dir).map_err(|source| Error::Prepare {
                path: css.dir.clone(),
                source,
            })?;
        }

        match &self.config.output {
            OutputTarget::Directory(dir) => {
                if dir.exists() {
                    fs::remove_dir_all(dir).map_err(|source| Error::Prepare {
                        path: dir.clone(),
                        source,
                    })?;
                }
                fs::create_dir_all(dir).map_err(|source| Error::Prepare {
                    path: dir.clone(),
                    source,
                })?;
            }
            OutputTarget::Beside => {
                for input in self.config.views.iter().chain(&self.config.scripts) {
                    remove_if_exists(&self.config.output.path_for(input))?;
                }
            }
        }
        Ok(())
    }

    /// Rewrite every stylesheet, concatenate them under per-file banners,
    /// and write the combined and minimized artifacts.
    fn write_combined_css(
        &self,
        stylesheets: &[(PathBuf, String)],
        maps: &RenameMaps,
        report: &mut Report,
    ) -> Result<()> {
        let Some(css_output) = &self.config.css_output else {
            return Ok(());
        };

        let combined_path = css_output.combined_path();
        let mut combined = String::new();
        let mut input_bytes = 0usize;
        for (path, css) in stylesheets {
            if self.config.verbose {
                println!(
                    "{} {} to {}",
                    "adding".green(),
                    path.display(),
                    combined_path.display()
                );
            }
            input_bytes += css.len();
            combined.push_str(&format!("/*\n * {}\n */\n", path.display()));
            combined.push_str(&rewrite_stylesheet(css, maps));
            combined.push_str("\n\n");
        }

        let minimized = self.minimizer.minimize(&combined);
        write(&combined_path, &combined)?;
        let minimized_path = css_output.minimized_path();
        write(&minimized_path, &minimized)?;
        report.record(minimized_path, input_bytes, minimized.len());
        Ok(())
    }

    /// Rewrite every view into its output location.
    fn rewrite_views(&self, maps: &RenameMaps, report: &mut Report) -> Result<()> {
        let link_href = if self.config.rewrite_links {
            match &self.config.css_output {
                Some(css) => Some(css.link_href(&self.config.output)),
                None => {
                    warn_once(
                        "pipeline",
                        "link rewriting needs a combined stylesheet output; links left unchanged",
                    );
                    None
                }
            }
        } else {
            None
        };

        for view in &self.config.views {
            let html = read(view)?;
            let rewritten = rewrite_markup(
                &html,
                maps,
                &self.config.patterns,
                self.minimizer.as_ref(),
                link_href.as_deref(),
            );
            let dest = self.config.output.path_for(view);
            write(&dest, &rewritten)?;
            if self.config.verbose {
                println!("{} {}", "rewrote".green(), dest.display());
            }
            report.record(dest, html.len(), rewritten.len());
        }
        Ok(())
    }

    /// Rewrite every standalone script file through the literal rewriter.
    fn rewrite_scripts(&self, maps: &RenameMaps, report: &mut Report) -> Result<()> {
        for script in &self.config.scripts {
            let js = read(script)?;
            let rewritten = rewrite_script(&js, maps, &self.config.patterns);
            let dest = self.config.output.path_for(script);
            write(&dest, &rewritten)?;
            if self.config.verbose {
                println!("{} {}", "rewrote".green(), dest.display());
            }
            report.record(dest, js.len(), rewritten.len());
        }
        Ok(())
    }

    /// Emit the JSON rename manifest when configured.
    fn write_manifest(&self, maps: &RenameMaps) -> Result<()> {
        if let Some(path) = &self.config.manifest {
            write(path, &manifest::render(maps))?;
        }
        Ok(())
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Prepare {
            path: path.to_path_buf(),
            source,
        }),
    }
}
