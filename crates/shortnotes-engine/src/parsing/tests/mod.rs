//! Integration tests for the parsing module.
//!
//! Fixtures (.html) live in the crate's `tests/fixtures` directory and are
//! shared with the public API tests.


use pretty_assertions::assert_eq;

use crate::parsing::{
    ParseError,
    blocks::{BlockKind, InnerContent, MAX_DEPTH},
    parse_note,
};
use outline::{max_depth, outline};

fn fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap()
}

// Fixture-based structure tests

#[test]
fn fixture_quote_paragraph() {
    let doc = parse_note(&fixture("quote_paragraph")).unwrap();
    insta::assert_snapshot!(outline(&doc.blocks), @r"
    Quote core/quote
      Paragraph core/paragraph
    ");
}

#[test]
fn fixture_quote_verse() {
    let doc = parse_note(&fixture("quote_verse")).unwrap();
    insta::assert_snapshot!(outline(&doc.blocks), @r"
    Quote core/quote
      Verse core/verse
    ");

    let verse = &doc.blocks[0].inner_blocks[0];
    assert_eq!(verse.inner_html.lines().count(), 6);
    assert!(verse.inner_html.contains("escapes me\nI will stumble"));
}

#[test]
fn fixture_mixed_note() {
    let doc = parse_note(&fixture("mixed_note")).unwrap();
    insta::assert_snapshot!(outline(&doc.blocks), @r"
    Paragraph core/paragraph
    Image core/image
    Gallery core/gallery
      Image core/image
      Image core/image
    Other acme/weather
    ");
}

// Structure details

#[test]
fn quote_inner_content_interleaves_html_and_block() {
    let doc = parse_note(&fixture("quote_paragraph")).unwrap();
    let quote = &doc.blocks[0];

    assert_eq!(quote.inner_content.len(), 3);
    assert_eq!(
        quote.inner_content[0],
        InnerContent::Html("\n<blockquote class=\"wp-block-quote\">".into())
    );
    assert_eq!(quote.inner_content[1], InnerContent::Block(0));
    assert_eq!(
        quote.trailing_html(),
        "<cite>Stephen Dedalus, A Portrait of the Artist as a Young Man</cite></blockquote>\n"
    );
}

#[test]
fn attributes_are_kept_verbatim() {
    let doc = parse_note(&fixture("mixed_note")).unwrap();
    assert_eq!(
        doc.blocks[1].attrs.as_deref(),
        Some(r#"{"id":42,"sizeSlug":"large"}"#)
    );
    assert_eq!(doc.blocks[0].attrs, None);
}

#[test]
fn unknown_blocks_keep_content() {
    let doc = parse_note(&fixture("mixed_note")).unwrap();
    let weather = &doc.blocks[3];
    assert_eq!(weather.kind, BlockKind::Other);
    assert_eq!(
        weather.inner_html,
        "\n<div class=\"wp-block-acme-weather\">Rain, <a href=\"https://weather.example/sea\">again</a>.</div>\n"
    );
}

#[test]
fn html_between_blocks_becomes_freeform() {
    let markup = "<p>loose</p>\n<!-- wp:paragraph --><p>held</p><!-- /wp:paragraph -->\n\n";
    let doc = parse_note(markup).unwrap();
    insta::assert_snapshot!(outline(&doc.blocks), @r"
    Other (freeform)
    Paragraph core/paragraph
    ");
    assert_eq!(doc.blocks[0].inner_html, "<p>loose</p>\n");
}

#[test]
fn void_block_has_no_content() {
    let doc = parse_note("<!-- wp:separator /-->").unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].name, "core/separator");
    assert!(doc.blocks[0].inner_html.is_empty());
    assert!(doc.blocks[0].inner_content.is_empty());
}

#[test]
fn stray_end_marker_is_text() {
    let markup = "<p>a</p><!-- /wp:paragraph -->";
    let doc = parse_note(markup).unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::Other);
    assert_eq!(doc.blocks[0].inner_html, markup);
}

#[test]
fn ordinary_comment_inside_block_is_html() {
    let markup = "<!-- wp:paragraph --><p>a<!-- aside -->b</p><!-- /wp:paragraph -->";
    let doc = parse_note(markup).unwrap();
    assert_eq!(doc.blocks[0].inner_html, "<p>a<!-- aside -->b</p>");
}

// Failure modes

#[test]
fn unterminated_block_fails() {
    let result = parse_note("<!-- wp:paragraph --><p>never closed</p>");
    assert_eq!(
        result.unwrap_err(),
        ParseError::UnterminatedBlock {
            name: "core/paragraph".into(),
            offset: 0,
        }
    );
}

#[test]
fn closing_outer_block_over_open_inner_fails() {
    let markup = "<!-- wp:quote --><!-- wp:paragraph --><p>x</p><!-- /wp:quote -->";
    assert_eq!(
        parse_note(markup).unwrap_err(),
        ParseError::UnterminatedBlock {
            name: "core/paragraph".into(),
            offset: 17,
        }
    );
}

#[test]
fn nesting_beyond_cap_is_kept_as_text() {
    let levels = MAX_DEPTH + 2;
    let markup = format!(
        "{}x{}",
        "<!-- wp:group -->".repeat(levels),
        "<!-- /wp:group -->".repeat(levels)
    );
    let doc = parse_note(&markup).unwrap();

    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(max_depth(&doc.blocks), MAX_DEPTH);

    let mut innermost = &doc.blocks[0];
    while let Some(child) = innermost.inner_blocks.first() {
        innermost = child;
    }
    assert_eq!(
        innermost.inner_html,
        "<!-- wp:group --><!-- wp:group -->x<!-- /wp:group --><!-- /wp:group -->"
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(parse_note("").unwrap().blocks.is_empty());
}

/// Test whitespace between markers doesn't produce blocks.
#[test]
fn whitespace_only() {
    assert!(parse_note("\n\n  \n").unwrap().blocks.is_empty());
}
