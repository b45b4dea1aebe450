use std::fmt;

use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::{collapse_whitespace, kinds::Tag, strip_tags},
};

const CITE_OPEN: &str = "<cite";
const CITE_CLOSE: &str = "</cite>";

/// A quote reduced to plain text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteUnit {
    /// Quoted text. Verse keeps its line breaks.
    pub body: String,
    /// Attribution, with any links reduced to their text.
    pub citation: Option<String>,
}

impl QuoteUnit {
    pub const OPEN_QUOTE: char = '“';
    pub const CLOSE_QUOTE: char = '”';
    pub const CITATION_SEPARATOR: &'static str = " - ";

    /// `“body” - citation`, or just `“body”` without a citation.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QuoteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", Self::OPEN_QUOTE, self.body, Self::CLOSE_QUOTE)?;
        if let Some(citation) = &self.citation {
            write!(f, "{}{citation}", Self::CITATION_SEPARATOR)?;
        }
        Ok(())
    }
}

/// Reduces a quote block to its body and citation.
///
/// The body comes from the nested paragraph or verse blocks; the citation
/// from the HTML after them. Links are not touched here: they stay in the
/// source for the whole-document link pass.
pub fn format_quote(block: &Block) -> QuoteUnit {
    let mut has_content = false;
    let mut parts = vec![];

    for child in &block.inner_blocks {
        let text = match child.kind {
            BlockKind::Paragraph => collapse_whitespace(&strip_tags(&child.inner_html)),
            BlockKind::Verse => strip_tags(&child.inner_html).trim().to_string(),
            BlockKind::Image
            | BlockKind::Gallery
            | BlockKind::Quote
            | BlockKind::Other => continue,
        };
        has_content = true;
        if !text.is_empty() {
            parts.push(text);
        }
    }

    let citation_html = if has_content {
        let trailing = block.trailing_html();
        cite_element(&trailing)
            .map(str::to_string)
            .unwrap_or(trailing)
    } else {
        cite_element(&block.inner_html)
            .unwrap_or_default()
            .to_string()
    };
    let citation = collapse_whitespace(&strip_tags(&citation_html));

    QuoteUnit {
        body: parts.join(" "),
        citation: (!citation.is_empty()).then_some(citation),
    }
}

/// The content of the first `<cite>` element in `html`.
fn cite_element(html: &str) -> Option<&str> {
    let (open, _) = html.match_indices(CITE_OPEN).find(|(at, _)| {
        html.as_bytes()
            .get(at + CITE_OPEN.len())
            .is_some_and(|&b| Tag::ends_name(b))
    })?;
    let content_start = open + html[open..].find('>')? + 1;
    let content_end = content_start + html[content_start..].find(CITE_CLOSE)?;
    Some(&html[content_start..content_end])
}
