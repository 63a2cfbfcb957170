//! Attribute and embedded-block rewriting over markup text.

use std::sync::LazyLock;

use regex::Regex;
use squish_common::warning::warn_once;
use squish_css::minimize::Minimizer;
use squish_css::rename::{RenameMap, RenameMaps};
use squish_css::rewrite::rewrite_stylesheet;
use squish_js::{SelectorPatterns, rewrite_script};

/// One `class="…"` attribute value. Matching stops at the closing quote, so
/// each attribute is captured on its own.
static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"class="([^"]*)""#).unwrap());

/// Embedded stylesheet blocks. Case-sensitive, non-greedy, spans newlines;
/// only the exact `type="text/css"` open tag is recognized.
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<style type="text/css">(.*?)</style>"#).unwrap());

/// Embedded script blocks, same matching rules as [`STYLE_BLOCK`].
static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<script type="text/javascript">(.*?)</script>"#).unwrap());

/// Rewrite one markup document in full: id attributes, class attributes,
/// embedded style blocks, embedded script blocks, and — when `link_href` is
/// supplied — the header stylesheet links.
///
/// Each stage runs to completion over the shared buffer before the next
/// starts. The stages only ever replace names present in the maps, so a
/// document that references no discovered selector passes through
/// unchanged.
#[must_use]
pub fn rewrite_markup(
    html: &str,
    maps: &RenameMaps,
    patterns: &SelectorPatterns,
    minimizer: &dyn Minimizer,
    link_href: Option<&str>,
) -> String {
    let html = replace_id_attributes(html, &maps.ids);
    let html = replace_class_attributes(&html, &maps.classes);
    let html = rewrite_style_blocks(&html, maps, minimizer);
    let html = rewrite_script_blocks(&html, maps, patterns);
    match link_href {
        Some(href) => crate::links::rewrite_stylesheet_links(&html, href),
        None => html,
    }
}

/// Replace every exact `id="<name>"` attribute with its short form.
///
/// Whole-value match only: an id attribute whose value is not exactly a
/// mapped name (extra tokens, different quoting) is left alone. Every
/// occurrence in the document is replaced, so documents that illegally
/// repeat an id are at least rewritten consistently.
#[must_use]
pub fn replace_id_attributes(html: &str, ids: &RenameMap) -> String {
    let mut html = html.to_string();
    for (name, short) in ids.iter() {
        html = html.replace(&format!("id=\"{name}\""), &format!("id=\"{short}\""));
    }
    html
}

/// Replace mapped class names inside every `class="…"` attribute value.
///
/// The replacement inside a captured value is an unbounded substring
/// substitution: a mapped name that is a prefix or suffix of another token
/// in the same value will corrupt it. Selector rewriting in stylesheets is
/// delimiter-bounded; attribute values deliberately keep the looser rule.
#[must_use]
pub fn replace_class_attributes(html: &str, classes: &RenameMap) -> String {
    let mut html = html.to_string();
    for (name, short) in classes.iter() {
        let values: Vec<String> = CLASS_ATTR
            .captures_iter(&html)
            .map(|caps| caps[1].to_string())
            .collect();
        for value in values {
            let rewritten = value.replace(name, short);
            if rewritten != value {
                html = html.replace(
                    &format!("class=\"{value}\""),
                    &format!("class=\"{rewritten}\""),
                );
            }
        }
    }
    html
}

/// Rewrite and minimize embedded `<style type="text/css">` blocks.
///
/// All block bodies are concatenated, rewritten as one stylesheet, and
/// minimized; the result is spliced in place of the first block's body
/// only. Later blocks keep their original text — their content has already
/// been folded into the first block, leaving them as dead rules. A document
/// with no style blocks passes through unchanged.
#[must_use]
pub fn rewrite_style_blocks(html: &str, maps: &RenameMaps, minimizer: &dyn Minimizer) -> String {
    let bodies: Vec<String> = STYLE_BLOCK
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect();

    let Some(first) = bodies.first() else {
        return html.to_string();
    };

    if bodies.len() > 1 {
        warn_once(
            "HTML",
            "multiple embedded style blocks merged into the first; later blocks are dead rules",
        );
    }

    let combined: String = bodies.concat();
    let minimized = minimizer.minimize(&rewrite_stylesheet(&combined, maps));
    html.replacen(first.as_str(), &minimized, 1)
}

/// Rewrite every embedded `<script type="text/javascript">` block through
/// the script literal rewriter. Blocks are independent; nothing is merged.
#[must_use]
pub fn rewrite_script_blocks(html: &str, maps: &RenameMaps, patterns: &SelectorPatterns) -> String {
    let bodies: Vec<String> = SCRIPT_BLOCK
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect();

    let mut html = html.to_string();
    for body in bodies {
        let rewritten = rewrite_script(&body, maps, patterns);
        if rewritten != body {
            html = html.replacen(&body, &rewritten, 1);
        }
    }
    html
}
