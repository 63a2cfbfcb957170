//! Tests for output-location policy and link href computation.

use std::path::{Path, PathBuf};

use squish_pipeline::{CssOutput, OutputTarget};

#[test]
fn test_directory_target_keeps_file_names() {
    let target = OutputTarget::Directory(PathBuf::from("site/views_optimized"));
    assert_eq!(
        target.path_for(Path::new("site/views/index.html")),
        PathBuf::from("site/views_optimized/index.html")
    );
}

#[test]
fn test_beside_target_inserts_opt_before_extension() {
    let target = OutputTarget::Beside;
    assert_eq!(
        target.path_for(Path::new("page.html")),
        PathBuf::from("page.opt.html")
    );
    assert_eq!(
        target.path_for(Path::new("noext")),
        PathBuf::from("noext.opt")
    );
}

#[test]
fn test_minimized_path_inserts_min_before_css_extension() {
    let css = CssOutput {
        dir: PathBuf::from("site/css"),
        file_name: "optimized.css".to_string(),
    };
    assert_eq!(css.combined_path(), PathBuf::from("site/css/optimized.css"));
    assert_eq!(
        css.minimized_path(),
        PathBuf::from("site/css/optimized.min.css")
    );
}

#[test]
fn test_link_href_is_relative_when_bases_match() {
    // css and view output directories share the parent `site`, so views
    // reach the stylesheet through `..`.
    let css = CssOutput {
        dir: PathBuf::from("site/css"),
        file_name: "optimized.css".to_string(),
    };
    let output = OutputTarget::Directory(PathBuf::from("site/views_optimized"));
    assert_eq!(css.link_href(&output), "../css/optimized.min.css");
}

#[test]
fn test_link_href_is_verbatim_when_bases_differ() {
    let css = CssOutput {
        dir: PathBuf::from("assets/css"),
        file_name: "optimized.css".to_string(),
    };
    let output = OutputTarget::Directory(PathBuf::from("site/views_optimized"));
    assert_eq!(css.link_href(&output), "assets/css/optimized.min.css");
}
