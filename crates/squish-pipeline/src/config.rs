//! Run configuration.
//!
//! The pipeline takes structured input — lists of files, an ignore list,
//! flags — and never parses arguments itself. Whether the input set holds
//! one artifact or fifty is just the length of a list; there is no separate
//! single-file mode.

use std::io;
use std::path::{Path, PathBuf};

use squish_js::SelectorPatterns;

/// Where rewritten views and scripts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Into this directory, keeping each input's file name.
    Directory(PathBuf),
    /// Beside each input, with `opt` inserted before the extension
    /// (`index.html` → `index.opt.html`).
    Beside,
}

impl OutputTarget {
    /// The output path for one input file.
    #[must_use]
    pub fn path_for(&self, input: &Path) -> PathBuf {
        match self {
            Self::Directory(dir) => {
                input.file_name().map_or_else(|| dir.clone(), |name| dir.join(name))
            }
            Self::Beside => input.extension().map_or_else(
                || input.with_extension("opt"),
                |ext| input.with_extension(format!("opt.{}", ext.to_string_lossy())),
            ),
        }
    }
}

/// Settings for the combined stylesheet artifact.
#[derive(Debug, Clone)]
pub struct CssOutput {
    /// Directory receiving the combined artifacts.
    pub dir: PathBuf,
    /// File name for the combined stylesheet.
    pub file_name: String,
}

impl CssOutput {
    /// Path of the combined (readable) stylesheet.
    #[must_use]
    pub fn combined_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Path of the minimized stylesheet: `optimized.css` →
    /// `optimized.min.css`.
    #[must_use]
    pub fn minimized_path(&self) -> PathBuf {
        let name = self.file_name.strip_suffix(".css").map_or_else(
            || format!("{}.min", self.file_name),
            |stem| format!("{stem}.min.css"),
        );
        self.dir.join(name)
    }

    /// The href views should use to reach the minimized stylesheet.
    ///
    /// When the stylesheet directory and the view output directory share
    /// the same parent, the href is made relative to the view directory by
    /// stripping that parent and prefixing `..`; otherwise the minimized
    /// path is used as written.
    #[must_use]
    pub fn link_href(&self, output: &OutputTarget) -> String {
        let minimized = self.minimized_path();
        let view_base = match output {
            OutputTarget::Directory(dir) => dir.parent(),
            OutputTarget::Beside => None,
        };
        match (self.dir.parent(), view_base) {
            (Some(css_base), Some(view_base))
                if css_base == view_base && !css_base.as_os_str().is_empty() =>
            {
                let rest = minimized.strip_prefix(css_base).unwrap_or(&minimized);
                format!("../{}", rest.display())
            }
            _ => minimized.display().to_string(),
        }
    }
}

/// Structured input for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Stylesheet files to scan and rewrite.
    pub stylesheets: Vec<PathBuf>,
    /// Markup files to rewrite.
    pub views: Vec<PathBuf>,
    /// Standalone script files to rewrite.
    pub scripts: Vec<PathBuf>,
    /// Selector names exempt from renaming.
    pub ignore: Vec<String>,
    /// Selector-access call patterns for script rewriting.
    pub patterns: SelectorPatterns,
    /// Combined stylesheet artifact settings; `None` skips the combined
    /// output entirely (inline-only runs).
    pub css_output: Option<CssOutput>,
    /// Where rewritten views and scripts land.
    pub output: OutputTarget,
    /// Collapse header stylesheet links onto the combined artifact.
    pub rewrite_links: bool,
    /// Optional path for the JSON rename manifest.
    pub manifest: Option<PathBuf>,
    /// Print per-file progress lines.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stylesheets: Vec::new(),
            views: Vec::new(),
            scripts: Vec::new(),
            ignore: Vec::new(),
            patterns: SelectorPatterns::default(),
            css_output: None,
            output: OutputTarget::Beside,
            rewrite_links: false,
            manifest: None,
            verbose: false,
        }
    }
}

/// List the files in `dir` carrying `extension`, sorted by name.
///
/// Sorting matters: discovery order decides which selector gets the
/// shortest replacement, so directory enumeration must not leak filesystem
/// ordering into the output.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be read.
pub fn list_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();
    files.sort();
    Ok(files)
}
