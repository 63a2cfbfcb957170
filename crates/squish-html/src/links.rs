//! Header stylesheet link collapsing.

use squish_common::warning::warn_once;

/// Collapse every stylesheet `<link>` line into a single link to the
/// combined minified stylesheet.
///
/// The document is scanned line by line; a line containing both `link href`
/// and `text/css` is treated as a stylesheet link. The first such line is
/// replaced by one `<link>` tag pointing at `href`; every later match is
/// dropped entirely, since the combined artifact replaces however many
/// stylesheets the document referenced. Non-matching lines pass through
/// unchanged.
#[must_use]
pub fn rewrite_stylesheet_links(html: &str, href: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut dropped = 0usize;
    let mut rewritten = false;

    for line in html.split('\n') {
        if !(line.contains("link href") && line.contains("text/css")) {
            lines.push(line.to_string());
            continue;
        }
        if rewritten {
            dropped += 1;
            continue;
        }
        lines.push(format!(
            "    <link href=\"{href}\" rel=\"stylesheet\" type=\"text/css\" />"
        ));
        rewritten = true;
    }

    if dropped > 0 {
        warn_once(
            "HTML",
            "stylesheet links beyond the first were dropped in favor of the combined artifact",
        );
    }

    lines.join("\n")
}
