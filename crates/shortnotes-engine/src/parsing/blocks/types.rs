/// The kind of a block, resolved from its fully-qualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Image,
    Gallery,
    Quote,
    /// Pre-formatted poetry; line breaks are content.
    Verse,
    /// Any other block, including freeform HTML between blocks.
    Other,
}

impl BlockKind {
    /// Maps a fully-qualified block name (`core/paragraph`) to its kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "core/paragraph" => Self::Paragraph,
            "core/image" => Self::Image,
            "core/gallery" => Self::Gallery,
            "core/quote" => Self::Quote,
            "core/verse" => Self::Verse,
            _ => Self::Other,
        }
    }
}

/// One entry of a block's content in source order: either a run of the
/// block's own HTML or the slot where a nested block sat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InnerContent {
    Html(String),
    /// Index into [`Block::inner_blocks`].
    Block(usize),
}

/// A parsed block. Built once per parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Fully-qualified name (`core/quote`), empty for freeform HTML.
    pub name: String,
    /// The raw JSON attributes from the start marker, uninterpreted.
    pub attrs: Option<String>,
    /// The block's own HTML with nested blocks cut out.
    pub inner_html: String,
    pub inner_blocks: Vec<Block>,
    pub inner_content: Vec<InnerContent>,
}

impl Block {
    /// A nameless block wrapping HTML found outside any block marker.
    pub fn freeform(html: String) -> Self {
        Self {
            kind: BlockKind::Other,
            name: String::new(),
            attrs: None,
            inner_content: vec![InnerContent::Html(html.clone())],
            inner_html: html,
            inner_blocks: vec![],
        }
    }

    /// The HTML that follows the last nested block, or all of the block's
    /// HTML if it has no nested blocks.
    pub fn trailing_html(&self) -> String {
        let after_last_block = self
            .inner_content
            .iter()
            .rposition(|c| matches!(c, InnerContent::Block(_)))
            .map_or(0, |i| i + 1);

        self.inner_content[after_last_block..]
            .iter()
            .filter_map(|c| match c {
                InnerContent::Html(html) => Some(html.as_str()),
                InnerContent::Block(_) => None,
            })
            .collect()
    }

    /// The block's HTML with nested blocks put back in place (without their
    /// markers). Depth is bounded by the parser's nesting cap.
    pub fn full_html(&self) -> String {
        let mut html = String::with_capacity(self.inner_html.len());
        for content in &self.inner_content {
            match content {
                InnerContent::Html(chunk) => html.push_str(chunk),
                InnerContent::Block(i) => {
                    if let Some(child) = self.inner_blocks.get(*i) {
                        html.push_str(&child.full_html());
                    }
                }
            }
        }
        html
    }
}
