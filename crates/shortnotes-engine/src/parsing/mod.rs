pub mod blocks;
pub mod error;
pub mod inline;
pub mod span;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkerClassifier};
pub use error::ParseError;

#[derive(Debug)]
pub struct ParsedNote {
    pub blocks: Vec<Block>,
}

/// Parses block markup into its top-level blocks.
pub fn parse_note(markup: &str) -> Result<ParsedNote, ParseError> {
    let mut builder = BlockBuilder::new(markup);

    for token in MarkerClassifier::new(markup) {
        builder.push(token?)?;
    }

    let blocks = builder.finish()?;
    log::debug!("parsed {} top-level blocks from {} bytes", blocks.len(), markup.len());
    Ok(ParsedNote { blocks })
}
