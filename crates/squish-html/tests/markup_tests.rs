//! Tests for markup rewriting: attributes, embedded blocks, and the
//! silent-degradation edges.

use squish_css::{BasicMinimizer, RenameMaps};
use squish_html::{
    replace_class_attributes, replace_id_attributes, rewrite_markup, rewrite_script_blocks,
    rewrite_style_blocks,
};
use squish_js::SelectorPatterns;

/// Maps with class `foo` → `a` and id `bar` → `a`.
fn maps() -> RenameMaps {
    let mut maps = RenameMaps::default();
    maps.classes.insert("foo", "a");
    maps.ids.insert("bar", "a");
    maps
}

fn rewrite(html: &str, maps: &RenameMaps) -> String {
    rewrite_markup(
        html,
        maps,
        &SelectorPatterns::default(),
        &BasicMinimizer,
        None,
    )
}

#[test]
fn test_id_and_class_attributes_are_rewritten() {
    let out = rewrite(r#"<div id="bar" class="foo"></div>"#, &maps());
    assert_eq!(out, r#"<div id="a" class="a"></div>"#);
}

#[test]
fn test_id_attribute_requires_whole_value_match() {
    // Ids are single tokens; an attribute with extra content is not an
    // exact match and stays untouched.
    let html = r#"<div id="bar extra"></div>"#;
    assert_eq!(replace_id_attributes(html, &maps().ids), html);
}

#[test]
fn test_every_duplicate_id_occurrence_is_rewritten() {
    let out = replace_id_attributes(
        r#"<div id="bar"></div><span id="bar"></span>"#,
        &maps().ids,
    );
    assert_eq!(out, r#"<div id="a"></div><span id="a"></span>"#);
}

#[test]
fn test_class_token_inside_a_list_is_rewritten() {
    let out = replace_class_attributes(r#"<div class="foo wide"></div>"#, &maps().classes);
    assert_eq!(out, r#"<div class="a wide"></div>"#);
}

#[test]
fn test_class_substring_corrupts_longer_tokens() {
    // Attribute values use unbounded substring replacement: `foo` inside
    // `footer` is rewritten in place. Accepted limitation.
    let out = replace_class_attributes(r#"<div class="footer"></div>"#, &maps().classes);
    assert_eq!(out, r#"<div class="ater"></div>"#);
}

#[test]
fn test_unquoted_class_attribute_degrades_to_no_op() {
    let html = "<div class=foo></div>";
    assert_eq!(replace_class_attributes(html, &maps().classes), html);
}

#[test]
fn test_style_block_is_rewritten_and_minimized() {
    let html = "<style type=\"text/css\">\n.foo { color: red; }\n</style>";
    let out = rewrite_style_blocks(html, &maps(), &BasicMinimizer);
    assert_eq!(out, "<style type=\"text/css\">.a{color:red;}</style>");
}

#[test]
fn test_multiple_style_blocks_merge_into_the_first() {
    let html = "<style type=\"text/css\">.foo { color: red; }</style>\n\
                <p></p>\n\
                <style type=\"text/css\">#bar { top: 0; }</style>";
    let out = rewrite_style_blocks(html, &maps(), &BasicMinimizer);

    // Both bodies land, rewritten, in the first block.
    assert!(out.contains("<style type=\"text/css\">.a{color:red;}#a{top:0;}</style>"));
    // The second block's original text is still there, now dead.
    assert!(out.contains("<style type=\"text/css\">#bar { top: 0; }</style>"));
}

#[test]
fn test_markup_without_style_blocks_passes_through() {
    let html = "<p class=\"untracked\"></p>";
    assert_eq!(rewrite_style_blocks(html, &maps(), &BasicMinimizer), html);
}

#[test]
fn test_style_block_with_other_attributes_is_not_recognized() {
    // Only the exact open tag is matched; anything else passes through.
    let html = r#"<style media="print" type="text/css">.foo {}</style>"#;
    assert_eq!(rewrite_style_blocks(html, &maps(), &BasicMinimizer), html);
}

#[test]
fn test_script_blocks_are_rewritten_independently() {
    let html = "<script type=\"text/javascript\">getElementById(\"bar\");</script>\n\
                <script type=\"text/javascript\">el.addClass('foo');</script>";
    let out = rewrite_script_blocks(html, &maps(), &SelectorPatterns::default());
    assert_eq!(
        out,
        "<script type=\"text/javascript\">getElementById(\"a\");</script>\n\
         <script type=\"text/javascript\">el.addClass('a');</script>"
    );
}

#[test]
fn test_full_document_rewrite() {
    let html = "<html>\n\
                <head>\n\
                <style type=\"text/css\">.foo { color: red; } #bar { color: blue; }</style>\n\
                </head>\n\
                <body>\n\
                <div id=\"bar\" class=\"foo\"></div>\n\
                <script type=\"text/javascript\">document.querySelector('#bar .foo');</script>\n\
                </body>\n\
                </html>";
    let out = rewrite(html, &maps());

    assert!(out.contains("<style type=\"text/css\">.a{color:red;}#a{color:blue;}</style>"));
    assert!(out.contains("<div id=\"a\" class=\"a\"></div>"));
    assert!(out.contains("document.querySelector('#a .a');"));
}

#[test]
fn test_unmapped_markup_passes_through_unchanged() {
    let html = r#"<div id="other" class="plain"></div>"#;
    assert_eq!(rewrite(html, &maps()), html);
}
