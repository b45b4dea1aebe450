use crate::parsing::{
    ParseError,
    blocks::{Block, BlockKind},
    inline::{extract_links, inline_text},
    parse_note,
};

use super::quote::format_quote;

/// Knobs for [`transform_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOptions {
    /// Literal text standing in for image and gallery blocks. The default is
    /// empty: media is attached to a status separately.
    pub media_text: String,
}

/// The flattened status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub text: String,
}

/// Flattens block markup into status text with default options.
pub fn transform(markup: &str) -> Result<TransformResult, ParseError> {
    transform_with(markup, &StatusOptions::default())
}

/// Flattens block markup into status text.
///
/// Each top-level block becomes one text fragment; fragments are joined with
/// single spaces. Every link target in the markup then follows, in document
/// order, duplicates included.
pub fn transform_with(markup: &str, options: &StatusOptions) -> Result<TransformResult, ParseError> {
    let doc = parse_note(markup)?;

    let mut parts: Vec<String> = doc
        .blocks
        .iter()
        .map(|block| render_block(block, options))
        .filter(|text| !text.is_empty())
        .collect();
    let fragments = parts.len();

    parts.extend(
        extract_links(markup)
            .map(|link| link.target)
            .filter(|target| !target.is_empty()),
    );
    log::debug!(
        "transformed {} blocks into {fragments} fragments and {} links",
        doc.blocks.len(),
        parts.len() - fragments
    );

    Ok(TransformResult {
        text: parts.join(" ").trim().to_string(),
    })
}

fn render_block(block: &Block, options: &StatusOptions) -> String {
    match block.kind {
        BlockKind::Paragraph | BlockKind::Verse => inline_text(&block.inner_html),
        BlockKind::Image | BlockKind::Gallery => options.media_text.clone(),
        BlockKind::Quote => format_quote(block).render(),
        BlockKind::Other => inline_text(&block.full_html()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(markup: &str) -> String {
        transform(markup).unwrap().text
    }

    #[test]
    fn paragraphs_join_with_space() {
        let markup = "<!-- wp:paragraph --><p>one</p><!-- /wp:paragraph -->\n\n<!-- wp:paragraph --><p>two</p><!-- /wp:paragraph -->";
        assert_eq!(text(markup), "one two");
    }

    #[test]
    fn links_move_to_the_end() {
        let markup = "<!-- wp:paragraph --><p>see <a href=\"https://a.example\">this</a> and <a href=\"https://b.example\">that</a></p><!-- /wp:paragraph -->";
        assert_eq!(text(markup), "see this and that https://a.example https://b.example");
    }

    #[test]
    fn media_blocks_use_configured_text() {
        let markup = "<!-- wp:image --><figure><img src=\"x.jpg\"/></figure><!-- /wp:image --><!-- wp:paragraph --><p>caption</p><!-- /wp:paragraph -->";
        assert_eq!(text(markup), "caption");

        let options = StatusOptions {
            media_text: "[image]".into(),
        };
        assert_eq!(transform_with(markup, &options).unwrap().text, "[image] caption");
    }

    #[test]
    fn image_only_note_is_empty_by_default() {
        let markup = "<!-- wp:gallery --><figure><!-- wp:image --><figure><img src=\"x.jpg\"/></figure><!-- /wp:image --></figure><!-- /wp:gallery -->";
        assert_eq!(StatusOptions::default().media_text, "");
        assert_eq!(text(markup), "");
    }

    #[test]
    fn unknown_blocks_render_nested_text() {
        let markup = "<!-- wp:group --><div><!-- wp:paragraph --><p>inside</p><!-- /wp:paragraph --></div><!-- /wp:group -->";
        assert_eq!(text(markup), "inside");
    }

    #[test]
    fn empty_link_targets_are_not_appended() {
        let markup = "<!-- wp:paragraph --><p><a href=\"\">nowhere</a></p><!-- /wp:paragraph -->";
        assert_eq!(text(markup), "nowhere");
    }

    #[test]
    fn duplicate_links_are_kept() {
        let markup = "<!-- wp:paragraph --><p><a href=\"https://a.example\">1</a> <a href=\"https://a.example\">2</a></p><!-- /wp:paragraph -->";
        assert_eq!(text(markup), "1 2 https://a.example https://a.example");
    }

    #[test]
    fn empty_markup_is_empty_text() {
        assert_eq!(text(""), "");
    }

    #[test]
    fn dangling_end_marker_is_dropped_text() {
        let markup = "<!-- wp:paragraph --><p>hello</p><!-- /wp:paragraph --><!-- /wp:para";
        assert_eq!(text(markup), "hello");
    }

    #[test]
    fn malformed_markup_fails() {
        assert!(matches!(
            transform("<!-- wp:paragraph --><p>x</p>"),
            Err(ParseError::UnterminatedBlock { .. })
        ));
    }
}
