//! Tests for header stylesheet link collapsing.

use squish_html::rewrite_stylesheet_links;

#[test]
fn test_two_links_collapse_to_one() {
    let html = "<head>\n\
                <link href=\"css/one.css\" rel=\"stylesheet\" type=\"text/css\" />\n\
                <link href=\"css/two.css\" rel=\"stylesheet\" type=\"text/css\" />\n\
                </head>";
    let out = rewrite_stylesheet_links(html, "../css/optimized.min.css");
    assert_eq!(
        out,
        "<head>\n\
         \u{20}   <link href=\"../css/optimized.min.css\" rel=\"stylesheet\" type=\"text/css\" />\n\
         </head>"
    );
}

#[test]
fn test_single_link_is_rewritten_in_place() {
    let html = "before\n<link href=\"a.css\" rel=\"stylesheet\" type=\"text/css\" />\nafter";
    let out = rewrite_stylesheet_links(html, "min.css");
    assert_eq!(
        out,
        "before\n    <link href=\"min.css\" rel=\"stylesheet\" type=\"text/css\" />\nafter"
    );
}

#[test]
fn test_non_stylesheet_links_pass_through() {
    // `link href` without `text/css` is not a stylesheet link.
    let html = "<link href=\"feed.xml\" rel=\"alternate\" type=\"application/rss+xml\" />";
    assert_eq!(rewrite_stylesheet_links(html, "min.css"), html);
}

#[test]
fn test_document_without_links_is_unchanged() {
    let html = "<p>no links here</p>\n<p>still none</p>";
    assert_eq!(rewrite_stylesheet_links(html, "min.css"), html);
}

#[test]
fn test_trailing_newline_survives() {
    let html = "<link href=\"a.css\" type=\"text/css\" />\n";
    let out = rewrite_stylesheet_links(html, "min.css");
    assert!(out.ends_with('\n'));
}
